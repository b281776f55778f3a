//! Handler tests, grouped by node family.

mod variables_tests;

use primi_ir::{Node, StringInterner};
use primi_values::{Context, EvalResult};

use crate::Interpreter;

/// Evaluate `node` in a fresh global context.
fn run(node: &Node) -> EvalResult {
    let interner = StringInterner::new();
    let interp = Interpreter::new(&interner);
    interp.eval(node, &Context::global())
}
