use std::sync::LazyLock;

use content_logging::content_debug;
use regex::Regex;

use crate::extract::ContentExtractor;
use crate::records::ArxivRecord;
use crate::text::truncate_chars;

/// HyperTransformer (CC BY 4.0).
pub const DEFAULT_ARXIV_ID: &str = "2201.04182";

const LICENSE: &str = "arXiv.org perpetual, non-exclusive license";
const SOURCE: &str = "arXiv (CC BY compatible for preprints)";
const PUBLISHED_DATE_CHARS: usize = 10;

static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<entry>(.+?)</entry>").expect("entry pattern"));

static AUTHOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<author>\s*<name>(.+?)</name>").expect("author pattern")
});

static TITLE: LazyLock<Regex> = LazyLock::new(|| tag_pattern("title"));
static SUMMARY: LazyLock<Regex> = LazyLock::new(|| tag_pattern("summary"));
static PUBLISHED: LazyLock<Regex> = LazyLock::new(|| tag_pattern("published"));

fn tag_pattern(tag: &str) -> Regex {
    let tag = regex::escape(tag);
    Regex::new(&format!(r"(?s)<{tag}[^>]*>(.+?)</{tag}>")).expect("tag pattern")
}

/// Pulls paper metadata out of an arXiv Atom API response.
#[derive(Debug, Clone)]
pub struct ArxivExtractor {
    arxiv_id: String,
}

impl ArxivExtractor {
    pub fn new(arxiv_id: impl Into<String>) -> Self {
        Self {
            arxiv_id: arxiv_id.into(),
        }
    }

    pub fn arxiv_id(&self) -> &str {
        &self.arxiv_id
    }
}

impl Default for ArxivExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_ARXIV_ID)
    }
}

impl ContentExtractor for ArxivExtractor {
    type Record = ArxivRecord;

    fn extract(&self, xml: &str) -> Option<ArxivRecord> {
        let Some(entry) = ENTRY.captures(xml).and_then(|caps| caps.get(1)) else {
            content_debug!("arXiv response for {} has no <entry>", self.arxiv_id);
            return None;
        };
        let entry = entry.as_str();

        let authors = AUTHOR_NAME
            .captures_iter(entry)
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str().trim().to_string())
            .collect();
        let published = first_capture(&PUBLISHED, entry);

        Some(ArxivRecord {
            arxiv_id: self.arxiv_id.clone(),
            title: first_capture(&TITLE, entry).replace('\n', " "),
            authors,
            abstract_text: first_capture(&SUMMARY, entry).replace('\n', " "),
            published: truncate_chars(&published, PUBLISHED_DATE_CHARS).to_string(),
            url: format!("https://arxiv.org/abs/{}", self.arxiv_id),
            license: LICENSE.to_string(),
            source: SOURCE.to_string(),
        })
    }
}

/// Trimmed body of the first `<tag ...>...</tag>` in `xml`, or an empty string.
pub fn extract_tag(xml: &str, tag: &str) -> String {
    first_capture(&tag_pattern(tag), xml)
}

fn first_capture(pattern: &Regex, xml: &str) -> String {
    pattern
        .captures(xml)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
