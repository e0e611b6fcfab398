use content_core::{BookRecord, ChapterRecord, ContentExtractor, LettersExtractor};
use pretty_assertions::assert_eq;

fn sample_book(preface: Option<&str>) -> BookRecord {
    BookRecord {
        title: "Les Misérables".to_string(),
        author: "Victor Hugo".to_string(),
        translator: "Isabel Florence Hapgood".to_string(),
        year: "1862".to_string(),
        source: "Project Gutenberg (Public Domain)".to_string(),
        url: "https://www.gutenberg.org/ebooks/135".to_string(),
        chapters: vec![ChapterRecord {
            number: "I".to_string(),
            title: "M. MYRIEL".to_string(),
            content: "Bishop of D——".to_string(),
        }],
        preface: preface.map(str::to_string),
    }
}

#[test]
fn book_keys_follow_field_order() {
    let json = serde_json::to_string(&sample_book(Some("p"))).unwrap();
    let keys = [
        "\"title\"",
        "\"author\"",
        "\"translator\"",
        "\"year\"",
        "\"source\"",
        "\"url\"",
        "\"chapters\"",
        "\"preface\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
}

#[test]
fn absent_preface_is_omitted() {
    let json = serde_json::to_string(&sample_book(None)).unwrap();
    assert!(!json.contains("preface"));
}

#[test]
fn letters_serialize_recipient_relation_or_title() {
    let letters = LettersExtractor.extract("").expect("letters");
    assert_eq!(letters.letters.len(), 2);

    let value = serde_json::to_value(&letters).unwrap();
    let father = &value["letters"][0]["recipient"];
    assert_eq!(father["relation"], "Father");
    assert!(father.get("title").is_none());
    let grant = &value["letters"][1]["recipient"];
    assert_eq!(grant["title"], "Lieutenant-General");
    assert!(grant.get("relation").is_none());
}

#[test]
fn letters_ignore_fetched_text() {
    let from_empty = LettersExtractor.extract("");
    let from_text = LettersExtractor.extract("Some letters, perhaps.");
    assert_eq!(from_empty, from_text);
}
