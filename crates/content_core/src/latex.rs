/// Escape characters with special meaning in LaTeX.
///
/// Each input character is mapped once, so the backslashes and braces that
/// escape sequences introduce are never escaped again.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match escape_char(ch) {
            Some(seq) => escaped.push_str(seq),
            None => escaped.push(ch),
        }
    }
    escaped
}

fn escape_char(ch: char) -> Option<&'static str> {
    let seq = match ch {
        '\\' => r"\textbackslash{}",
        '&' => r"\&",
        '%' => r"\%",
        '$' => r"\$",
        '#' => r"\#",
        '_' => r"\_",
        '{' => r"\{",
        '}' => r"\}",
        '~' => r"\textasciitilde{}",
        '^' => r"\textasciicircum{}",
        _ => return None,
    };
    Some(seq)
}
