use content_core::{
    clean_gutenberg_text, BookExtractor, ContentExtractor, MAX_CHAPTERS, MAX_CHAPTER_CHARS,
};
use pretty_assertions::assert_eq;

fn synthetic_book(chapters: &[(&str, &str, &str)]) -> String {
    let mut text = String::from(
        "The Project Gutenberg eBook of Les Misérables\n\
         *** START OF THE PROJECT GUTENBERG EBOOK LES MISÉRABLES ***\n\n\
         PREFACE\n\n\
         So long as there shall exist, by virtue of law and custom, decrees of\n\
         damnation pronounced by society.\n\n\
         VOLUME I.—FANTINE\n\n\
         BOOK FIRST-A JUST MAN\n\n",
    );
    for (number, title, body) in chapters {
        text.push_str(&format!("CHAPTER {number}-{title}\n\n{body}\n\n"));
    }
    text.push_str("BOOK SECOND-THE FALL\n\nCHAPTER I-THE EVENING OF A DAY OF WALKING\n\nNot part of book first.\n\n");
    text.push_str("*** END OF THE PROJECT GUTENBERG EBOOK LES MISÉRABLES ***\nfooter");
    text
}

#[test]
fn extracts_preface_and_chapters_in_order() {
    let raw = synthetic_book(&[
        ("I", "M. MYRIEL", "In 1815, M. Charles-François-Bienvenu Myriel was Bishop of D——"),
        ("II", "M. MYRIEL BECOMES MONSEIGNEUR WELCOME", "The episcopal palace of D—— adjoins the hospital."),
        ("III", "A HARD BISHOPRIC FOR A GOOD BISHOP", "The Bishop did not omit his pastoral visits."),
    ]);
    let book = BookExtractor
        .extract(clean_gutenberg_text(&raw))
        .expect("book record");

    assert_eq!(book.title, "Les Misérables");
    assert_eq!(book.author, "Victor Hugo");
    let preface = book.preface.expect("preface");
    assert!(preface.starts_with("So long as there shall exist"));
    assert!(preface.ends_with("society."));

    let numbers: Vec<_> = book.chapters.iter().map(|c| c.number.as_str()).collect();
    assert_eq!(numbers, vec!["I", "II", "III"]);
    assert_eq!(book.chapters[0].title, "M. MYRIEL");
    assert_eq!(
        book.chapters[1].content,
        "The episcopal palace of D—— adjoins the hospital."
    );
    assert!(book
        .chapters
        .iter()
        .all(|c| !c.content.contains("Not part of book first")));
}

#[test]
fn em_dash_headings_and_crlf_line_endings() {
    let raw = "PREFACE\r\n\r\nA preface.\r\n\r\nBOOK FIRST—A JUST MAN\r\n\r\nCHAPTER I—M. MYRIEL\r\n\r\nBody one.\r\n\r\nCHAPTER II—M. MYRIEL BECOMES MONSEIGNEUR WELCOME\r\n\r\nBody two.\r\n\r\nBOOK SECOND—THE FALL\r\n";
    let book = BookExtractor.extract(raw).expect("book record");
    assert_eq!(book.preface.as_deref(), Some("A preface."));
    assert_eq!(book.chapters.len(), 2);
    assert_eq!(book.chapters[0].title, "M. MYRIEL");
    assert_eq!(book.chapters[0].content, "Body one.");
    assert_eq!(book.chapters[1].number, "II");
    assert_eq!(book.chapters[1].content, "Body two.");
}

#[test]
fn caps_chapter_count_and_content_length() {
    let long_body = "é".repeat(MAX_CHAPTER_CHARS + 500);
    let specs: Vec<(String, String, String)> = ["I", "II", "III", "IV", "V", "VI", "VII"]
        .iter()
        .map(|n| (n.to_string(), format!("Title {n}"), long_body.clone()))
        .collect();
    let borrowed: Vec<(&str, &str, &str)> = specs
        .iter()
        .map(|(n, t, b)| (n.as_str(), t.as_str(), b.as_str()))
        .collect();
    let raw = synthetic_book(&borrowed);

    let book = BookExtractor.extract(&raw).expect("book record");
    assert_eq!(book.chapters.len(), MAX_CHAPTERS);
    assert_eq!(book.chapters[4].number, "V");
    assert!(book
        .chapters
        .iter()
        .all(|c| c.content.chars().count() == MAX_CHAPTER_CHARS));
}

#[test]
fn missing_book_first_yields_no_chapters_and_no_preface() {
    let book = BookExtractor
        .extract("Nothing resembling a novel here.")
        .expect("book record is always produced");
    assert!(book.chapters.is_empty());
    assert_eq!(book.preface, None);
}

#[test]
fn long_preface_is_truncated() {
    let raw = format!("PREFACE\n\n{}\n\nBOOK FIRST", "x".repeat(2500));
    let book = BookExtractor.extract(&raw).expect("book record");
    assert_eq!(book.preface.map(|p| p.len()), Some(2000));
}
