use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_message_matches_kind_display() {
    let err = undefined_index(5);
    assert_eq!(err.message, err.kind.to_string());
    assert_eq!(err.to_string(), "undefined index 5");
}

#[test]
fn test_error_families_are_disjoint() {
    let type_err = operand_type_mismatch("<", "bool", "number");
    let unsupported = unsupported_operation(Capability::Iteration, "number");
    let index_err = undefined_index(3);
    let name_err = undefined_name("x");

    assert!(type_err.is_type_error());
    assert!(unsupported.is_type_error());
    assert!(!type_err.is_undefined_index() && !type_err.is_undefined_name());

    assert!(index_err.is_undefined_index());
    assert!(!index_err.is_type_error() && !index_err.is_undefined_name());

    assert!(name_err.is_undefined_name());
    assert!(!name_err.is_type_error() && !name_err.is_undefined_index());
}

#[test]
fn test_operand_mismatch_message() {
    let err = operand_type_mismatch("*", "string", "bool");
    assert_eq!(
        err.message,
        "type error: operator `*` cannot be applied to string and bool"
    );
}

#[test]
fn test_unsupported_operation_message() {
    let err = unsupported_operation(Capability::Addition, "bool");
    assert_eq!(err.message, "type error: bool does not support addition");
}

#[test]
fn test_arity_message_pluralization() {
    assert_eq!(arity_mismatch(1, 0).message, "expected 1 argument, got 0");
    assert_eq!(arity_mismatch(2, 3).message, "expected 2 arguments, got 3");
}

#[test]
fn test_malformed_node_message() {
    let err = malformed_node(NodeKind::AnonymousFunction, Attr::Body);
    assert_eq!(
        err.message,
        "malformed AnonymousFunction node: missing or invalid `body`"
    );
}
