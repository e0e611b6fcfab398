/// Start-of-text markers, in priority order.
pub const START_MARKERS: &[&str] = &[
    "*** START OF THE PROJECT GUTENBERG EBOOK",
    "*** START OF THIS PROJECT GUTENBERG EBOOK",
    "*END*THE SMALL PRINT",
];

/// End-of-text markers, in priority order.
pub const END_MARKERS: &[&str] = &[
    "*** END OF THE PROJECT GUTENBERG EBOOK",
    "*** END OF THIS PROJECT GUTENBERG EBOOK",
    "End of the Project Gutenberg EBook",
    "End of Project Gutenberg",
];

/// Strip Project Gutenberg header and footer boilerplate.
///
/// The first marker in list order that occurs anywhere in `text` wins, not the
/// earliest occurrence in the text. The body starts after the line holding the
/// start marker and stops at the start of the end marker. A start marker on an
/// unterminated last line leaves the start at 0. If the end marker precedes the
/// start cut the result is empty.
pub fn clean_gutenberg_text(text: &str) -> &str {
    let start = first_marker(text, START_MARKERS)
        .and_then(|idx| text[idx..].find('\n').map(|nl| idx + nl + 1))
        .unwrap_or(0);
    let end = first_marker(text, END_MARKERS).unwrap_or(text.len());

    if end < start {
        return "";
    }
    text[start..end].trim()
}

fn first_marker(text: &str, markers: &[&str]) -> Option<usize> {
    markers.iter().find_map(|marker| text.find(marker))
}
