/// Keep at most `max_chars` characters of `input`.
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((end, _)) => &input[..end],
        None => input,
    }
}

/// Skip one character after `pos`, so lazy `.+?` style bodies are never empty.
pub(crate) fn next_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::{next_char_boundary, truncate_chars};

    #[test]
    fn short_input_kept_as_is() {
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let input = "é".repeat(5);
        assert_eq!(truncate_chars(&input, 3), "ééé");
        assert_eq!(truncate_chars(&input, 3).len(), 6);
    }

    #[test]
    fn exact_length_is_not_truncated() {
        assert_eq!(truncate_chars("abc", 3), "abc");
    }

    #[test]
    fn next_boundary_steps_over_multibyte() {
        assert_eq!(next_char_boundary("—x", 0), Some(3));
        assert_eq!(next_char_boundary("ab", 2), None);
    }
}
