//! Tests for variables, assignment and indexed access.

use super::builders::{assign, assign_index, deref, int, program, regex, string, var};
use super::run;
use primi_ir::{Attr, Node, NodeKind};
use primi_values::{EvalErrorKind, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_undefined_variable() {
    let err = run(&var("missing")).unwrap_err();
    assert!(err.is_undefined_name());
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedName {
            name: "missing".to_string()
        }
    );
}

#[test]
fn test_assignment_returns_value() {
    let node = program(vec![assign("x", int(5))]);
    assert_eq!(run(&node).unwrap(), Value::int(5));
}

#[test]
fn test_reassignment() {
    let node = program(vec![assign("x", int(1)), assign("x", string("a")), var("x")]);
    assert_eq!(run(&node).unwrap(), Value::string("a"));
}

#[test]
fn test_dereference_reads_code_point() {
    let node = deref(string("abc"), int(1));
    assert_eq!(run(&node).unwrap(), Value::string("b"));
}

#[test]
fn test_dereference_out_of_range() {
    let err = run(&deref(string("abc"), int(5))).unwrap_err();
    assert!(err.is_undefined_index());
    assert!(!err.is_type_error());
}

#[test]
fn test_dereference_non_indexable() {
    let err = run(&deref(int(12), int(0))).unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_append_assignment() {
    let node = program(vec![
        assign("s", string("ab")),
        assign_index("s", None, string("c")),
        var("s"),
    ]);
    assert_eq!(run(&node).unwrap().internal_value(), "abc");
}

#[test]
fn test_indexed_assignment_replaces() {
    let node = program(vec![
        assign("s", string("abc")),
        assign_index("s", Some(int(0)), string("X")),
        var("s"),
    ]);
    assert_eq!(run(&node).unwrap().internal_value(), "Xbc");
}

#[test]
fn test_indexed_assignment_returns_right_value() {
    let node = program(vec![
        assign("s", string("abc")),
        assign_index("s", Some(int(1)), int(9)),
    ]);
    assert_eq!(run(&node).unwrap(), Value::int(9));
}

#[test]
fn test_indexed_assignment_leaves_aliases() {
    let node = program(vec![
        assign("s", string("ab")),
        assign("t", var("s")),
        assign_index("s", None, string("c")),
        var("t"),
    ]);
    assert_eq!(run(&node).unwrap().internal_value(), "ab");
}

#[test]
fn test_indexed_assignment_errors() {
    let out_of_range = program(vec![
        assign("s", string("ab")),
        assign_index("s", Some(int(7)), string("c")),
    ]);
    assert!(run(&out_of_range).unwrap_err().is_undefined_index());

    let bad_value = program(vec![
        assign("s", string("ab")),
        assign_index("s", None, regex("x")),
    ]);
    assert!(run(&bad_value).unwrap_err().is_type_error());

    let undefined = assign_index("nope", None, string("c"));
    assert!(run(&undefined).unwrap_err().is_undefined_name());
}

#[test]
fn test_assignment_to_literal_is_malformed() {
    let node = Node::new(NodeKind::Assignment)
        .with_node(Attr::Left, int(1))
        .with_node(Attr::Right, int(2));
    let err = run(&node).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::MalformedNode {
            kind: NodeKind::Assignment,
            attr: Attr::Left,
        }
    );
}
