//! Function literals and calls.

use primi_ir::{Attr, Node};
use primi_values::{malformed_node, Context, EvalResult, Value};
use smallvec::SmallVec;

use super::{required_node, NodeHandler};
use crate::interpreter::Interpreter;

/// Builds a closure over the current context.
///
/// The context is captured by handle: bindings made in it later, before the
/// closure runs, are visible to the body.
pub struct AnonymousFunctionHandler;

impl NodeHandler for AnonymousFunctionHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        let params = match node.list(Attr::Args) {
            Some(args) => args
                .iter()
                .map(|arg| {
                    arg.text(Attr::Text)
                        .map(|text| interp.intern(text))
                        .ok_or_else(|| malformed_node(node.kind(), Attr::Args))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        let body = required_node(node, Attr::Body)?;

        tracing::debug!(arity = params.len(), depth = ctx.depth(), "closure created");
        Ok(Value::func(body.clone(), params, ctx.clone()))
    }
}

/// `callee(args...)`.
pub struct FunctionCallHandler;

impl NodeHandler for FunctionCallHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        let callee = interp.eval(required_node(node, Attr::Callee)?, ctx)?;
        let mut args: SmallVec<[Value; 4]> = SmallVec::new();
        for arg in node.list(Attr::Args).unwrap_or_default() {
            args.push(interp.eval(arg, ctx)?);
        }
        interp.call(&callee, &args)
    }
}
