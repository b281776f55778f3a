//! Literal handlers.

use primi_ir::{Attr, Node};
use primi_values::escaping::unescape_string;
use primi_values::{malformed_node, Context, EvalResult, Value};

use super::{required_text, NodeHandler};
use crate::interpreter::Interpreter;

/// `text` without its first and last code point.
fn strip_delimiters(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    chars.next()?;
    chars.next_back()?;
    Some(chars.as_str())
}

/// Quoted string. Escapes are reduced once, here.
pub struct StringLiteralHandler;

impl NodeHandler for StringLiteralHandler {
    fn handle(&self, _interp: &Interpreter<'_>, node: &Node, _ctx: &Context) -> EvalResult {
        let text = required_text(node, Attr::Text)?;
        let body = strip_delimiters(text).ok_or_else(|| malformed_node(node.kind(), Attr::Text))?;
        Ok(Value::string(unescape_string(body)))
    }
}

/// Integer when the text fits `i64`, float otherwise.
pub struct NumberLiteralHandler;

impl NumberLiteralHandler {
    fn is_numeric(text: &str) -> bool {
        text.bytes().any(|b| b.is_ascii_digit())
            && text
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    }
}

impl NodeHandler for NumberLiteralHandler {
    fn handle(&self, _interp: &Interpreter<'_>, node: &Node, _ctx: &Context) -> EvalResult {
        let text = required_text(node, Attr::Text)?;
        if !Self::is_numeric(text) {
            return Err(malformed_node(node.kind(), Attr::Text));
        }
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Value::int(n));
        }
        text.parse::<f64>()
            .map(Value::float)
            .map_err(|_| malformed_node(node.kind(), Attr::Text))
    }
}

pub struct BoolLiteralHandler;

impl NodeHandler for BoolLiteralHandler {
    fn handle(&self, _interp: &Interpreter<'_>, node: &Node, _ctx: &Context) -> EvalResult {
        match required_text(node, Attr::Text)? {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(malformed_node(node.kind(), Attr::Text)),
        }
    }
}

pub struct NullLiteralHandler;

impl NodeHandler for NullLiteralHandler {
    fn handle(&self, _interp: &Interpreter<'_>, _node: &Node, _ctx: &Context) -> EvalResult {
        Ok(Value::Null)
    }
}

/// `/pattern/`, compiled at evaluation.
pub struct RegexLiteralHandler;

impl NodeHandler for RegexLiteralHandler {
    fn handle(&self, _interp: &Interpreter<'_>, node: &Node, _ctx: &Context) -> EvalResult {
        let text = required_text(node, Attr::Text)?;
        let pattern =
            strip_delimiters(text).ok_or_else(|| malformed_node(node.kind(), Attr::Text))?;
        Value::regex(pattern)
    }
}
