//! Operator handlers.
//!
//! Chained arithmetic (`a + b - c`, `a * b * c`) arrives as one node with
//! `nodes` operands and `ops` operator nodes between them, folded left.

use primi_ir::{Attr, BinaryOp, Node, SharedNode};
use primi_values::{malformed_node, Context, EvalResult};

use super::{operator, required_list, required_node, slot_text, NodeHandler};
use crate::interpreter::Interpreter;

fn fold_chain(
    interp: &Interpreter<'_>,
    node: &Node,
    ctx: &Context,
    allowed: &[BinaryOp],
) -> EvalResult {
    let operands = required_list(node, Attr::Nodes)?;
    let ops: &[SharedNode] = match node.list(Attr::Ops) {
        Some(ops) => ops,
        None if operands.len() == 1 => &[],
        None => return Err(malformed_node(node.kind(), Attr::Ops)),
    };
    let Some((first, rest)) = operands.split_first() else {
        return Err(malformed_node(node.kind(), Attr::Nodes));
    };
    if ops.len() != rest.len() {
        return Err(malformed_node(node.kind(), Attr::Ops));
    }

    let mut acc = interp.eval(first, ctx)?;
    for (op_node, operand) in ops.iter().zip(rest) {
        let op = operator(node, Attr::Ops, op_node.text(Attr::Text), allowed)?;
        let right = interp.eval(operand, ctx)?;
        acc = acc.binary(op, &right)?;
    }
    Ok(acc)
}

/// `+` / `-` chain.
pub struct AdditionHandler;

impl NodeHandler for AdditionHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        fold_chain(interp, node, ctx, &[BinaryOp::Add, BinaryOp::Sub])
    }
}

/// `*` chain.
pub struct MultiplicationHandler;

impl NodeHandler for MultiplicationHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        fold_chain(interp, node, ctx, &[BinaryOp::Mul])
    }
}

/// A bare operator token in value position.
pub struct OperatorHandler;

impl NodeHandler for OperatorHandler {
    fn handle(&self, _interp: &Interpreter<'_>, node: &Node, _ctx: &Context) -> EvalResult {
        Err(malformed_node(node.kind(), Attr::Text))
    }
}

pub struct ComparisonHandler;

impl ComparisonHandler {
    const OPERATORS: [BinaryOp; 6] = [
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
        BinaryOp::Gt,
        BinaryOp::GtEq,
    ];
}

impl NodeHandler for ComparisonHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        let left = interp.eval(required_node(node, Attr::Left)?, ctx)?;
        let op = operator(node, Attr::Op, slot_text(node, Attr::Op), &Self::OPERATORS)?;
        let right = interp.eval(required_node(node, Attr::Right)?, ctx)?;
        left.compare(op, &right)
    }
}
