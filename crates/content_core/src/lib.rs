//! Content core: pure text normalization and record extraction.
mod arxiv;
mod book;
mod extract;
mod gutenberg;
mod latex;
mod letters;
mod records;
mod text;

pub use arxiv::{extract_tag, ArxivExtractor, DEFAULT_ARXIV_ID};
pub use book::{BookExtractor, MAX_CHAPTERS, MAX_CHAPTER_CHARS, MAX_PREFACE_CHARS};
pub use extract::ContentExtractor;
pub use gutenberg::{clean_gutenberg_text, END_MARKERS, START_MARKERS};
pub use latex::escape_latex;
pub use letters::LettersExtractor;
pub use records::{
    ArxivRecord, BookRecord, ChapterRecord, LetterCollection, LetterRecord, Recipient,
};
pub use text::truncate_chars;
