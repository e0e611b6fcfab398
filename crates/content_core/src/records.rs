use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRecord {
    /// Roman numeral as it appears in the heading.
    pub number: String,
    pub title: String,
    pub content: String,
}

/// Field order is the JSON key order; `preface` trails `chapters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub translator: String,
    pub year: String,
    pub source: String,
    pub url: String,
    pub chapters: Vec<ChapterRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preface: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRecord {
    pub date: String,
    pub place: String,
    pub recipient: Recipient,
    pub salutation: String,
    pub body: String,
    pub closing: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCollection {
    pub title: String,
    pub author: String,
    pub source: String,
    pub url: String,
    pub letters: Vec<LetterRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArxivRecord {
    pub arxiv_id: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// `YYYY-MM-DD` when the feed carries an ISO-8601 timestamp; not validated.
    pub published: String,
    pub url: String,
    pub license: String,
    pub source: String,
}
