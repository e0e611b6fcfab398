pub const BOOK_URL: &str = "https://www.gutenberg.org/cache/epub/135/pg135.txt";
pub const LETTERS_URL: &str = "https://www.gutenberg.org/cache/epub/8110/pg8110.txt";
pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

pub const BOOK_FILENAME: &str = "les_miserables.json";
pub const PAPER_FILENAME: &str = "hypertransformer_paper.json";
pub const LETTERS_FILENAME: &str = "lincoln_letters.json";

/// Where each content type is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls {
    pub book: String,
    pub letters: String,
    pub arxiv_api: String,
}

impl SourceUrls {
    pub fn arxiv_query(&self, arxiv_id: &str) -> String {
        format!("{}?id_list={}", self.arxiv_api, arxiv_id)
    }
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            book: BOOK_URL.to_string(),
            letters: LETTERS_URL.to_string(),
            arxiv_api: ARXIV_API_URL.to_string(),
        }
    }
}
