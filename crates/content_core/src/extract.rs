use serde::Serialize;

/// Turns fetched text into a serializable record.
///
/// `None` means there was nothing to extract; it is not an error.
pub trait ContentExtractor: Send + Sync {
    type Record: Serialize;

    fn extract(&self, text: &str) -> Option<Self::Record>;
}
