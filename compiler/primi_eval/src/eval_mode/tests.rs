use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_is_interpret() {
    assert_eq!(EvalMode::default(), EvalMode::Interpret);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_interpret_unbounded_on_native() {
    assert_eq!(EvalMode::Interpret.max_recursion_depth(), None);
}

#[test]
fn test_bounded_depth() {
    let mode = EvalMode::Bounded { max_depth: 16 };
    assert_eq!(mode.max_recursion_depth(), Some(16));
}
