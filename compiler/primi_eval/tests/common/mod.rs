//! Shared helpers for integration tests: parser-shaped node builders and a
//! small evaluation harness.

#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]

use primi_eval::{init_tracing, Context, EvalResult, Interpreter};
use primi_ir::{Attr, Node, NodeKind, StringInterner};

pub fn eval(node: &Node) -> EvalResult {
    init_tracing();
    let interner = StringInterner::new();
    let interp = Interpreter::new(&interner);
    interp.eval(node, &Context::global())
}

pub fn literal(raw: &str) -> Node {
    Node::leaf(NodeKind::StringLiteral, raw)
}

pub fn string(body: &str) -> Node {
    literal(&format!("\"{body}\""))
}

pub fn int(n: i64) -> Node {
    Node::leaf(NodeKind::NumberLiteral, n.to_string())
}

pub fn boolean(b: bool) -> Node {
    Node::leaf(NodeKind::BoolLiteral, b.to_string())
}

pub fn null() -> Node {
    Node::new(NodeKind::NullLiteral)
}

pub fn var(name: &str) -> Node {
    Node::leaf(NodeKind::Variable, name)
}

fn binary(kind: NodeKind, left: Node, symbol: &str, right: Node) -> Node {
    Node::new(kind)
        .with_list(Attr::Nodes, [left, right])
        .with_list(Attr::Ops, [Node::leaf(NodeKind::Operator, symbol)])
}

pub fn add(left: Node, right: Node) -> Node {
    binary(NodeKind::Addition, left, "+", right)
}

pub fn mul(left: Node, right: Node) -> Node {
    binary(NodeKind::Multiplication, left, "*", right)
}

pub fn cmp(left: Node, symbol: &str, right: Node) -> Node {
    Node::new(NodeKind::Comparison)
        .with_node(Attr::Left, left)
        .with_node(Attr::Op, Node::leaf(NodeKind::Operator, symbol))
        .with_node(Attr::Right, right)
}

pub fn assign(name: &str, right: Node) -> Node {
    Node::new(NodeKind::Assignment)
        .with_node(Attr::Left, var(name))
        .with_node(Attr::Right, right)
}

pub fn append(name: &str, right: Node) -> Node {
    let target = Node::new(NodeKind::Dereference).with_node(Attr::Target, var(name));
    Node::new(NodeKind::Assignment)
        .with_node(Attr::Left, target)
        .with_node(Attr::Right, right)
}

pub fn assign_at(name: &str, index: Node, right: Node) -> Node {
    Node::new(NodeKind::Assignment)
        .with_node(Attr::Left, deref(var(name), index))
        .with_node(Attr::Right, right)
}

pub fn sub(left: Node, right: Node) -> Node {
    binary(NodeKind::Addition, left, "-", right)
}

pub fn deref(target: Node, index: Node) -> Node {
    Node::new(NodeKind::Dereference)
        .with_node(Attr::Target, target)
        .with_node(Attr::Index, index)
}

pub fn program(statements: Vec<Node>) -> Node {
    Node::new(NodeKind::Program).with_list(Attr::Nodes, statements)
}

pub fn block(statements: Vec<Node>) -> Node {
    Node::new(NodeKind::Block).with_list(Attr::Nodes, statements)
}

pub fn func(params: &[&str], body: Node) -> Node {
    Node::new(NodeKind::AnonymousFunction)
        .with_list(Attr::Args, params.iter().map(|p| var(p)))
        .with_node(Attr::Body, body)
}

pub fn call(callee: Node, args: Vec<Node>) -> Node {
    Node::new(NodeKind::FunctionCall)
        .with_node(Attr::Callee, callee)
        .with_list(Attr::Args, args)
}

pub fn foreach(iterable: Node, item: &str, body: Node) -> Node {
    Node::new(NodeKind::Foreach)
        .with_node(Attr::Left, iterable)
        .with_text(Attr::Item, item)
        .with_node(Attr::Body, body)
}
