//! Name resolution, assignment and indexed reads.

use primi_ir::{Attr, Node, NodeKind};
use primi_values::{malformed_node, undefined_name, Context, EvalResult};

use super::{required_node, required_text, NodeHandler};
use crate::interpreter::Interpreter;

pub struct VariableHandler;

impl NodeHandler for VariableHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        let name = required_text(node, Attr::Text)?;
        ctx.lookup(interp.intern(name))
            .ok_or_else(|| undefined_name(name))
    }
}

/// `name = value` or `name[index] = value`.
///
/// The plain form binds into the innermost scope. The indexed form reads
/// the variable, writes into that value, and binds the updated value back
/// the same way; without an `index` attribute it appends. Either way the
/// result is the right-hand value.
pub struct AssignmentHandler;

impl NodeHandler for AssignmentHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        let left = required_node(node, Attr::Left)?;
        match left.kind() {
            NodeKind::Variable => {
                let name = interp.intern(required_text(left, Attr::Text)?);
                let value = interp.eval(required_node(node, Attr::Right)?, ctx)?;
                ctx.bind(name, value.clone());
                Ok(value)
            }
            NodeKind::Dereference => {
                let target = required_node(left, Attr::Target)?;
                if target.kind() != NodeKind::Variable {
                    return Err(malformed_node(node.kind(), Attr::Left));
                }
                let name_text = required_text(target, Attr::Text)?;
                let name = interp.intern(name_text);
                let mut current = ctx
                    .lookup(name)
                    .ok_or_else(|| undefined_name(name_text))?;

                let index = match left.node(Attr::Index) {
                    Some(index) => Some(interp.eval(index, ctx)?),
                    None => None,
                };
                let value = interp.eval(required_node(node, Attr::Right)?, ctx)?;

                current.index_set(index.as_ref(), &value)?;
                ctx.bind(name, current);
                Ok(value)
            }
            NodeKind::Program
            | NodeKind::Block
            | NodeKind::StringLiteral
            | NodeKind::NumberLiteral
            | NodeKind::BoolLiteral
            | NodeKind::NullLiteral
            | NodeKind::RegexLiteral
            | NodeKind::Assignment
            | NodeKind::Addition
            | NodeKind::Multiplication
            | NodeKind::Comparison
            | NodeKind::AnonymousFunction
            | NodeKind::FunctionCall
            | NodeKind::Foreach
            | NodeKind::Operator => Err(malformed_node(node.kind(), Attr::Left)),
        }
    }
}

/// `target[index]`.
pub struct DereferenceHandler;

impl NodeHandler for DereferenceHandler {
    fn handle(&self, interp: &Interpreter<'_>, node: &Node, ctx: &Context) -> EvalResult {
        let target = interp.eval(required_node(node, Attr::Target)?, ctx)?;
        let index = interp.eval(required_node(node, Attr::Index)?, ctx)?;
        target.index_get(&index)
    }
}
