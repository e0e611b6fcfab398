use std::sync::LazyLock;

use content_logging::content_debug;
use regex::Regex;

use crate::extract::ContentExtractor;
use crate::records::{BookRecord, ChapterRecord};
use crate::text::{next_char_boundary, truncate_chars};

pub const MAX_CHAPTERS: usize = 5;
pub const MAX_CHAPTER_CHARS: usize = 3000;
pub const MAX_PREFACE_CHARS: usize = 2000;

const PREFACE_HEADING: &str = "PREFACE\n\n";
const PREFACE_TERMINATORS: &[&str] = &["VOLUME", "BOOK"];
const BOOK_END_HEADING: &str = "BOOK SECOND";

static BOOK_START_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"BOOK FIRST[-—]A JUST MAN\n\n").expect("book heading pattern")
});

static CHAPTER_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"CHAPTER ([IVXLCDM]+)[-—]").expect("chapter heading pattern")
});

/// Extracts the preface and the opening chapters of *Les Misérables*.
#[derive(Debug, Default, Clone, Copy)]
pub struct BookExtractor;

impl ContentExtractor for BookExtractor {
    type Record = BookRecord;

    fn extract(&self, text: &str) -> Option<BookRecord> {
        // Gutenberg serves CRLF; the headings are matched on blank lines.
        let text = text.replace("\r\n", "\n");

        let preface = extract_preface(&text);
        let chapters = match book_first_range(&text) {
            Some(range) => extract_chapters(range),
            None => {
                content_debug!("no BOOK FIRST range found; book has no chapters");
                Vec::new()
            }
        };
        content_debug!(
            "book extraction: preface={} chapters={}",
            preface.is_some(),
            chapters.len()
        );

        Some(BookRecord {
            title: "Les Misérables".to_string(),
            author: "Victor Hugo".to_string(),
            translator: "Isabel Florence Hapgood".to_string(),
            year: "1862".to_string(),
            source: "Project Gutenberg (Public Domain)".to_string(),
            url: "https://www.gutenberg.org/ebooks/135".to_string(),
            chapters,
            preface,
        })
    }
}

/// Text after the first `PREFACE` heading up to the next `VOLUME` or `BOOK`.
fn extract_preface(text: &str) -> Option<String> {
    let body_start = text.find(PREFACE_HEADING)? + PREFACE_HEADING.len();
    let search_from = next_char_boundary(text, body_start)?;
    let body_end = PREFACE_TERMINATORS
        .iter()
        .filter_map(|term| text[search_from..].find(term).map(|idx| search_from + idx))
        .min()?;
    let preface = text[body_start..body_end].trim();
    Some(truncate_chars(preface, MAX_PREFACE_CHARS).to_string())
}

fn book_first_range(text: &str) -> Option<&str> {
    let heading = BOOK_START_HEADING.find(text)?;
    let body_start = heading.end();
    let search_from = next_char_boundary(text, body_start)?;
    let body_end = search_from + text[search_from..].find(BOOK_END_HEADING)?;
    Some(&text[body_start..body_end])
}

/// Scan chapter headings in order. A chapter is its heading, a title running
/// to the first blank line, and a body running to the next heading or the end
/// of the range. A heading with no title or body is skipped.
fn extract_chapters(book: &str) -> Vec<ChapterRecord> {
    let mut chapters = Vec::new();
    let mut pos = 0;

    while chapters.len() < MAX_CHAPTERS {
        let Some(caps) = CHAPTER_HEADING.captures_at(book, pos) else {
            break;
        };
        let (Some(heading), Some(number)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        match chapter_bounds(book, heading.end()) {
            Some(bounds) => {
                chapters.push(ChapterRecord {
                    number: number.as_str().to_string(),
                    title: book[heading.end()..bounds.title_end].trim().to_string(),
                    content: truncate_chars(
                        book[bounds.content_start..bounds.content_end].trim(),
                        MAX_CHAPTER_CHARS,
                    )
                    .to_string(),
                });
                pos = bounds.content_end;
            }
            // Headings are ASCII, so one byte past the start is a boundary.
            None => pos = heading.start() + 1,
        }
    }

    chapters
}

struct ChapterBounds {
    title_end: usize,
    content_start: usize,
    content_end: usize,
}

fn chapter_bounds(book: &str, title_start: usize) -> Option<ChapterBounds> {
    let from = next_char_boundary(book, title_start)?;
    let title_end = from + book[from..].find("\n\n")?;
    let content_start = title_end + 2;
    let from = next_char_boundary(book, content_start)?;
    let content_end = CHAPTER_HEADING
        .find_at(book, from)
        .map_or(book.len(), |m| m.start());
    Some(ChapterBounds {
        title_end,
        content_start,
        content_end,
    })
}
