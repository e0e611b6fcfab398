use content_core::escape_latex;
use pretty_assertions::assert_eq;

#[test]
fn escapes_every_special_character() {
    assert_eq!(escape_latex(r"& % $ # _ { }"), r"\& \% \$ \# \_ \{ \}");
}

#[test]
fn backslash_escape_is_not_re_escaped() {
    assert_eq!(escape_latex(r"50% \& up"), r"50\% \textbackslash{}\& up");
}

#[test]
fn escaping_is_deterministic_for_mixed_input() {
    let input = r"C:\path_to\file ~ 100% ^2";
    assert_eq!(
        escape_latex(input),
        r"C:\textbackslash{}path\_to\textbackslash{}file \textasciitilde{} 100\% \textasciicircum{}2"
    );
}
