//! Content engine: HTTP fetching, body decoding and JSON persistence.
mod decode;
mod fetch;
mod persist;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use fetch::{
    fetch_text, FetchSettings, Fetcher, LogProgressSink, ProgressSink, ReqwestFetcher,
    DEFAULT_USER_AGENT,
};
pub use persist::{ensure_output_dir, JsonPersister, PersistError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, FetchProgress, Stage};
