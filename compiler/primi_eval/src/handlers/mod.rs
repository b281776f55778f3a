//! Node handlers.
//!
//! One zero-sized handler per `NodeKind`. A handler reads the attributes it
//! needs from the node, evaluates children through `Interpreter::eval`
//! (left to right, depth first) and returns the node's value. Handlers do
//! not keep the node; a closure keeps a `SharedNode` clone of its body.

mod functions;
mod literals;
mod operators;
mod statements;
mod variables;

pub use functions::{AnonymousFunctionHandler, FunctionCallHandler};
pub use literals::{
    BoolLiteralHandler, NullLiteralHandler, NumberLiteralHandler, RegexLiteralHandler,
    StringLiteralHandler,
};
pub use operators::{AdditionHandler, ComparisonHandler, MultiplicationHandler, OperatorHandler};
pub use statements::{BlockHandler, ForeachHandler, ProgramHandler};
pub use variables::{AssignmentHandler, DereferenceHandler, VariableHandler};

use primi_ir::{Attr, BinaryOp, Node, SharedNode};
use primi_values::{malformed_node, Context, EvalError, EvalResult, Value};

use crate::interpreter::Interpreter;

/// Evaluation routine for one node kind.
pub trait NodeHandler: Sync {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult;
}

// Attribute Access

fn required_node(node: &Node, attr: Attr) -> Result<&SharedNode, EvalError> {
    node.node(attr).ok_or_else(|| malformed_node(node.kind(), attr))
}

fn required_text(node: &Node, attr: Attr) -> Result<&str, EvalError> {
    node.text(attr).ok_or_else(|| malformed_node(node.kind(), attr))
}

fn required_list(node: &Node, attr: Attr) -> Result<&[SharedNode], EvalError> {
    node.list(attr).ok_or_else(|| malformed_node(node.kind(), attr))
}

/// Text of an attribute that is either plain text or a node carrying `text`
/// (a parameter, loop variable or operator node).
fn slot_text(node: &Node, attr: Attr) -> Option<&str> {
    node.text(attr)
        .or_else(|| node.node(attr).and_then(|n| n.text(Attr::Text)))
}

fn name_text(node: &Node, attr: Attr) -> Result<&str, EvalError> {
    slot_text(node, attr).ok_or_else(|| malformed_node(node.kind(), attr))
}

/// Operator spelled by `symbol` in `owner`, restricted to `allowed`.
fn operator(
    owner: &Node,
    attr: Attr,
    symbol: Option<&str>,
    allowed: &[BinaryOp],
) -> Result<BinaryOp, EvalError> {
    symbol
        .and_then(BinaryOp::from_symbol)
        .filter(|op| allowed.contains(op))
        .ok_or_else(|| malformed_node(owner.kind(), attr))
}

/// Evaluate statements in order; the last value is the result.
fn eval_sequence(interp: &Interpreter<'_>, nodes: &[SharedNode], ctx: &Context) -> EvalResult {
    let mut last = Value::Null;
    for statement in nodes {
        last = interp.eval(statement, ctx)?;
    }
    Ok(last)
}
