//! Statement lists and loops.

use primi_ir::{Attr, Node};
use primi_values::{Context, EvalResult, Value};

use super::{eval_sequence, name_text, required_list, required_node, NodeHandler};
use crate::interpreter::Interpreter;

pub struct ProgramHandler;

impl NodeHandler for ProgramHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        eval_sequence(interp, required_list(node, Attr::Nodes)?, ctx)
    }
}

/// Runs in the enclosing context; blocks open no scope of their own.
pub struct BlockHandler;

impl NodeHandler for BlockHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        eval_sequence(interp, required_list(node, Attr::Nodes)?, ctx)
    }
}

/// `foreach (left as item) body`. The item is bound in the current context
/// and stays bound to the last element afterwards.
pub struct ForeachHandler;

impl NodeHandler for ForeachHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        let iterable = interp.eval(required_node(node, Attr::Left)?, ctx)?;
        let item = interp.intern(name_text(node, Attr::Item)?);
        let body = required_node(node, Attr::Body)?;

        for element in iterable.iterate()? {
            ctx.bind(item, element);
            interp.eval(body, ctx)?;
        }
        Ok(Value::Null)
    }
}
