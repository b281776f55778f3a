use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_line_continuation_removed() {
    assert_eq!(unescape_string("a\\\nb"), "ab");
    assert_eq!(unescape_string("a\\\r\nb"), "ab");
}

#[test]
fn test_escaped_quotes_reduced() {
    assert_eq!(unescape_string(r#"say \"hi\""#), r#"say "hi""#);
    assert_eq!(unescape_string(r"it\'s"), "it's");
}

#[test]
fn test_other_sequences_kept() {
    assert_eq!(unescape_string(r"a\nb"), r"a\nb");
    assert_eq!(unescape_string(r"a\\b"), r"a\\b");
    assert_eq!(unescape_string(r"a\tb"), r"a\tb");
    assert_eq!(unescape_string("trailing\\"), "trailing\\");
}

#[test]
fn test_doubled_backslash_consumed_as_pair() {
    // `\\` is consumed as a pair; the `\"` after it still reduces.
    assert_eq!(unescape_string(r#"\\\""#), r#"\\""#);
}

#[test]
fn test_expand_newline() {
    assert_eq!(expand_sequences(r"a\nb"), "a\nb");
    assert_eq!(expand_sequences(r"\n"), "\n");
}

#[test]
fn test_expand_escaped_newline_sequence() {
    assert_eq!(expand_sequences(r"a\\nb"), r"a\nb");
}

#[test]
fn test_expand_borrows_plain_text() {
    assert!(matches!(expand_sequences("plain"), Cow::Borrowed("plain")));
}

#[test]
fn test_expand_leaves_other_backslashes() {
    assert_eq!(expand_sequences(r"a\tb\\c"), r"a\tb\\c");
}

#[test]
fn test_quote_for_display() {
    assert_eq!(quote_for_display("abc"), "\"abc\"");
    assert_eq!(quote_for_display(r#"a"b"#), r#""a\"b""#);
    assert_eq!(quote_for_display(r"x\ny"), "\"x\ny\"");
}

#[test]
fn test_store_internal_cases() {
    assert_eq!(store_internal("plain"), "plain");
    assert_eq!(store_internal(r"\n"), r"\\n");
    assert_eq!(expand_sequences(&store_internal(r"\n")), r"\n");
    assert_eq!(expand_sequences(&store_internal("line\nbreak")), "line\nbreak");
}

proptest! {
    #[test]
    fn prop_store_then_expand_is_identity(text in r#"[a-c\\n"\n ]{0,24}"#) {
        let stored = store_internal(&text);
        prop_assert_eq!(expand_sequences(&stored).into_owned(), text);
    }

    #[test]
    fn prop_unescape_without_backslash_is_identity(text in "[^\\\\]{0,32}") {
        prop_assert_eq!(unescape_string(&text), text);
    }
}
