use super::*;

#[test]
fn excerpt_keeps_short_text() {
    assert_eq!(excerpt("  short  ", 10), "short");
}

#[test]
fn excerpt_truncates_on_char_boundary() {
    assert_eq!(excerpt("h\u{e9}llo w\u{f6}rld", 6), "h\u{e9}llo\u{2026}");
}
