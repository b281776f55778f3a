use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn s(raw: &str) -> StringValue {
    StringValue::new(raw)
}

fn texts(iter: ValueIter) -> Vec<String> {
    iter.map(|v| v.internal_value().into_owned()).collect()
}

/// Literal body spelling one character, with a newline written as `\n`.
fn spelled(c: &str) -> String {
    c.replace('\n', r"\n")
}

#[test]
fn test_internal_expands_newline_escape() {
    let value = s(r"a\nb");
    assert_eq!(value.raw(), r"a\nb");
    assert_eq!(value.internal(), "a\nb");
    assert_eq!(value.char_len(), 3);
}

#[test]
fn test_diagnostic_requotes() {
    assert_eq!(s(r#"say "hi""#).diagnostic(), r#""say \"hi\"""#);
}

#[test]
fn test_concat_uses_internal_forms() {
    let joined = s(r"a\n").add(&Value::string("b")).unwrap();
    assert_eq!(joined.internal_value(), "a\nb");
}

#[test]
fn test_concat_rejects_non_strings() {
    let err = s("a").add(&Value::int(1)).unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_subtract_removes_all_occurrences() {
    let result = s("banana").sub(&Value::string("an")).unwrap();
    assert_eq!(result, Value::string("ba"));
}

#[test]
fn test_subtract_empty_needle_is_identity() {
    let result = s("abc").sub(&Value::string("")).unwrap();
    assert_eq!(result, Value::string("abc"));
}

#[test]
fn test_subtract_regex_removes_matches() {
    let digits = Value::regex("[0-9]+").unwrap();
    let result = s("a12b3").sub(&digits).unwrap();
    assert_eq!(result, Value::string("ab"));
}

#[test]
fn test_subtract_rejects_numbers() {
    assert!(s("a1").sub(&Value::int(1)).unwrap_err().is_type_error());
}

#[test]
fn test_repeat_constraints() {
    assert_eq!(s("ab").mul(&Value::int(0)).unwrap(), Value::string(""));
    assert!(s("ab").mul(&Value::int(-1)).unwrap_err().is_type_error());
    assert!(s("ab").mul(&Value::float(2.0)).unwrap_err().is_type_error());
    assert!(s("ab").mul(&Value::string("2")).unwrap_err().is_type_error());
}

#[test]
fn test_repeat_beyond_limit_is_rejected_before_allocating() {
    let err = s("a").mul(&Value::int(i64::MAX)).unwrap_err();
    assert!(err.is_type_error());

    let just_over = i64::try_from(MAX_REPEAT_LEN / 2 + 1).unwrap();
    assert!(s("ab").mul(&Value::int(just_over)).unwrap_err().is_type_error());
}

#[test]
fn test_string_equality_on_content() {
    assert_eq!(s("abc").compare(BinaryOp::Eq, &Value::string("abc")), Ok(true));
    assert_eq!(s("abc").compare(BinaryOp::NotEq, &Value::string("abd")), Ok(true));
    assert_eq!(
        s(r"a\nb").compare(BinaryOp::Eq, &Value::string_internal("a\nb")),
        Ok(true)
    );
    assert_eq!(
        s(r"a\nb").compare(BinaryOp::Eq, &Value::string(r"a\\nb")),
        Ok(false)
    );
}

#[test]
fn test_computed_strings_equal_escaped_literals() {
    let literal = Value::string(r"a\nb");

    let joined = s("a").add(&Value::string(r"\nb")).unwrap();
    assert_eq!(joined.compare(BinaryOp::Eq, &literal), Ok(Value::Bool(true)));
    assert_eq!(joined, literal);

    let stripped = s(r"a\nxb").sub(&Value::string("x")).unwrap();
    assert_eq!(stripped.compare(BinaryOp::Eq, &literal), Ok(Value::Bool(true)));

    let repeated = s(r"\n").mul(&Value::int(2)).unwrap();
    assert_eq!(repeated.compare(BinaryOp::Eq, &Value::string(r"\n\n")), Ok(Value::Bool(true)));

    let mut written = s("ab");
    written.index_set(Some(&Value::int(1)), &Value::string(r"\nb")).unwrap();
    assert_eq!(written.compare(BinaryOp::Eq, &literal), Ok(true));
}

#[test]
fn test_iterated_newline_equals_escaped_literal() {
    let newline = Value::string(r"\n");
    let chars: Vec<Value> = s(r"x\n").iterate().collect();
    assert_eq!(chars[1].compare(BinaryOp::Eq, &newline), Ok(Value::Bool(true)));
    assert_eq!(chars[0].compare(BinaryOp::Eq, &newline), Ok(Value::Bool(false)));
}

#[test]
fn test_regex_matches_expanded_text() {
    let re = Value::regex("a\nb").unwrap();
    assert_eq!(s(r"a\nb").compare(BinaryOp::Eq, &re), Ok(true));
}

#[test]
fn test_string_matches_regex() {
    let re = Value::regex("^a.c$").unwrap();
    assert_eq!(s("abc").compare(BinaryOp::Eq, &re), Ok(true));
    assert_eq!(s("abd").compare(BinaryOp::NotEq, &re), Ok(true));
}

#[test]
fn test_string_ordering_always_type_error() {
    for right in [Value::string("b"), Value::int(1), Value::Null] {
        let err = s("a").compare(BinaryOp::Lt, &right).unwrap_err();
        assert!(err.is_type_error(), "ordering against {right:?}");
    }
}

#[test]
fn test_index_read() {
    let value = s("héllo");
    assert_eq!(value.index_get(&Value::int(1)).unwrap(), Value::string("é"));
    assert_eq!(value.index_get(&Value::int(4)).unwrap(), Value::string("o"));
}

#[test]
fn test_index_read_out_of_range_is_undefined_index() {
    let err = s("abc").index_get(&Value::int(5)).unwrap_err();
    assert!(err.is_undefined_index());
    assert!(!err.is_type_error());

    let err = s("abc").index_get(&Value::int(-1)).unwrap_err();
    assert!(err.is_undefined_index());
}

#[test]
fn test_index_read_rejects_non_integer() {
    let err = s("abc").index_get(&Value::string("1")).unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_append_without_index() {
    let mut value = s("ab");
    value.index_set(None, &Value::string("c")).unwrap();
    assert_eq!(value.internal(), "abc");
}

#[test]
fn test_write_replaces_code_point() {
    let mut value = s("abc");
    value.index_set(Some(&Value::int(1)), &Value::string("XY")).unwrap();
    assert_eq!(value.internal(), "aXYc");

    value.index_set(Some(&Value::int(0)), &Value::int(7)).unwrap();
    assert_eq!(value.internal(), "7XYc");
}

#[test]
fn test_write_at_length_appends() {
    let mut value = s("ab");
    value.index_set(Some(&Value::int(2)), &Value::string("c")).unwrap();
    assert_eq!(value.internal(), "abc");

    let err = value
        .index_set(Some(&Value::int(9)), &Value::string("z"))
        .unwrap_err();
    assert!(err.is_undefined_index());
    assert_eq!(value.internal(), "abc");
}

#[test]
fn test_write_rejects_other_kinds() {
    let mut value = s("ab");
    let err = value.index_set(None, &Value::Bool(true)).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(value.internal(), "ab");
}

#[test]
fn test_write_does_not_touch_aliases() {
    let original = s("ab");
    let mut alias = original.clone();
    assert!(alias.shares_buffer(&original));

    alias.index_set(None, &Value::string("c")).unwrap();
    assert_eq!(original.internal(), "ab");
    assert_eq!(alias.internal(), "abc");
    assert!(!alias.shares_buffer(&original));
}

#[test]
fn test_iteration_snapshot_ignores_later_writes() {
    let mut value = s("ab");
    let iter = value.iterate();
    value.index_set(None, &Value::string("c")).unwrap();
    assert_eq!(texts(iter), vec!["a", "b"]);
}

#[test]
fn test_iteration_of_empty_string() {
    assert_eq!(s("").iterate().count(), 0);
}

#[test]
fn test_iterator_restart() {
    let mut iter = s("xyz").iterate();
    iter.next();
    assert_eq!(texts(iter.restart()), vec!["x", "y", "z"]);
    assert_eq!(texts(iter), vec!["y", "z"]);
}

/// Literal bodies mixing plain characters with `\n` escapes.
const ESCAPED_BODY: &str = "(a|b|\u{e9}| |\\\\n){0,8}";

proptest! {
    #[test]
    fn prop_concat_equals_joined_literal(a in ESCAPED_BODY, b in ESCAPED_BODY) {
        let joined = s(&a).add(&Value::Str(s(&b))).unwrap();
        let literal = Value::Str(s(&format!("{a}{b}")));
        prop_assert_eq!(joined.compare(BinaryOp::Eq, &literal).unwrap(), Value::Bool(true));
    }

    #[test]
    fn prop_iterated_chars_equal_their_literals(body in ESCAPED_BODY) {
        for c in s(&body).iterate() {
            let literal = Value::Str(s(&spelled(&c.internal_value())));
            prop_assert_eq!(c.compare(BinaryOp::Eq, &literal).unwrap(), Value::Bool(true));
        }
    }

    #[test]
    fn prop_repeat_length(text in "[a-z\u{e9}\u{4e2d}]{0,8}", n in 0i64..16) {
        let repeated = s(&text).mul(&Value::int(n)).unwrap();
        let repeated = repeated.as_str().unwrap().internal().into_owned();
        let count = usize::try_from(n).unwrap();
        prop_assert_eq!(repeated.chars().count(), count * text.chars().count());
        prop_assert_eq!(repeated, text.repeat(count));
    }

    #[test]
    fn prop_iteration_yields_code_points(text in "\\PC{0,16}") {
        let value = StringValue::from_internal(&text);
        let expected: Vec<String> = text.chars().map(String::from).collect();
        prop_assert_eq!(texts(value.iterate()), expected.clone());
        prop_assert_eq!(texts(value.iterate()), expected);
    }

    #[test]
    fn prop_string_never_equals_number(text in "\\PC{0,8}", n in any::<i64>()) {
        let value = s(&text);
        let number = Value::int(n);
        prop_assert_eq!(value.compare(BinaryOp::Eq, &number), Ok(false));
        prop_assert_eq!(value.compare(BinaryOp::NotEq, &number), Ok(true));
        for op in [BinaryOp::Lt, BinaryOp::LtEq, BinaryOp::Gt, BinaryOp::GtEq] {
            prop_assert!(value.compare(op, &number).unwrap_err().is_type_error());
        }
    }

    #[test]
    fn prop_index_read_matches_chars(text in "\\PC{1,12}", pos in 0usize..12) {
        let value = StringValue::from_internal(&text);
        let index = Value::int(i64::try_from(pos).unwrap());
        match text.chars().nth(pos) {
            Some(c) => prop_assert_eq!(
                value.index_get(&index).unwrap().internal_value().into_owned(),
                c.to_string()
            ),
            None => prop_assert!(value.index_get(&index).unwrap_err().is_undefined_index()),
        }
    }
}
