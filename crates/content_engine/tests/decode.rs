use content_engine::decode_text;
use pretty_assertions::assert_eq;

#[test]
fn decode_respects_charset_header() {
    let bytes = b"caf\xe9"; // iso-8859-1
    let decoded = decode_text(bytes, Some("text/plain; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.text, "café");
    assert!(decoded.encoding_label.eq_ignore_ascii_case("windows-1252"));
}

#[test]
fn decode_handles_utf8_bom() {
    let bytes = b"\xEF\xBB\xBFhello";
    let decoded = decode_text(bytes, Some("text/plain")).unwrap();
    assert_eq!(decoded.text, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn decode_defaults_to_strict_utf8() {
    let decoded = decode_text("Misérables".as_bytes(), None).unwrap();
    assert_eq!(decoded.text, "Misérables");
    assert!(decode_text(b"caf\xe9", None).is_err());
}
