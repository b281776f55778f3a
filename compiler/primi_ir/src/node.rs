//! Attribute-mapped syntax-tree nodes.
//!
//! The parser hands the evaluator a tree in which every node is a kind tag
//! plus a handful of named attributes (`text`, `body`, `args`, ...). This
//! module keeps that shape instead of one struct per node kind, so a
//! handler reads exactly the attributes it needs and ignores the rest.

use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Kind discriminator of a syntax-tree node.
///
/// The evaluator selects a handler by this tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Top-level statement list.
    Program,
    /// Nested statement list (function bodies, loop bodies).
    Block,
    /// Quoted string literal; `text` includes the delimiting quotes.
    StringLiteral,
    /// Integer or floating-point literal.
    NumberLiteral,
    /// `true` or `false`.
    BoolLiteral,
    /// `null`.
    NullLiteral,
    /// Regular expression literal; `text` includes the delimiting slashes.
    RegexLiteral,
    /// Variable reference.
    Variable,
    /// `left = right`, where `left` is a variable or an indexed target.
    Assignment,
    /// Chain of `+` / `-` operations.
    Addition,
    /// Chain of `*` operations.
    Multiplication,
    /// Binary comparison.
    Comparison,
    /// Indexed access, `target[index]`.
    Dereference,
    /// Function literal.
    AnonymousFunction,
    /// Call of a function value.
    FunctionCall,
    /// `foreach (left as item) { body }`.
    Foreach,
    /// Operator token in an `ops` list or `op` slot; `text` is the symbol.
    /// Read by its parent, never evaluated on its own.
    Operator,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [NodeKind; 17] = [
        NodeKind::Program,
        NodeKind::Block,
        NodeKind::StringLiteral,
        NodeKind::NumberLiteral,
        NodeKind::BoolLiteral,
        NodeKind::NullLiteral,
        NodeKind::RegexLiteral,
        NodeKind::Variable,
        NodeKind::Assignment,
        NodeKind::Addition,
        NodeKind::Multiplication,
        NodeKind::Comparison,
        NodeKind::Dereference,
        NodeKind::AnonymousFunction,
        NodeKind::FunctionCall,
        NodeKind::Foreach,
        NodeKind::Operator,
    ];

    /// Name of the kind as the parser spells it.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Block => "Block",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::NumberLiteral => "NumberLiteral",
            NodeKind::BoolLiteral => "BoolLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::RegexLiteral => "RegexLiteral",
            NodeKind::Variable => "Variable",
            NodeKind::Assignment => "Assignment",
            NodeKind::Addition => "Addition",
            NodeKind::Multiplication => "Multiplication",
            NodeKind::Comparison => "Comparison",
            NodeKind::Dereference => "Dereference",
            NodeKind::AnonymousFunction => "AnonymousFunction",
            NodeKind::FunctionCall => "FunctionCall",
            NodeKind::Foreach => "Foreach",
            NodeKind::Operator => "Operator",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute key of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    /// Raw source slice (literals, identifiers, operator symbols).
    Text,
    /// Ordered operand or statement list.
    Nodes,
    /// Operator nodes interleaved with `Nodes` in chained expressions.
    Ops,
    Left,
    Right,
    /// Operator node of a comparison.
    Op,
    /// Indexed value of a dereference.
    Target,
    /// Index expression of a dereference.
    Index,
    /// Parameter names (function literal) or argument expressions (call).
    Args,
    Body,
    Callee,
    /// Loop variable of a `foreach`.
    Item,
}

impl Attr {
    /// Name of the attribute as the parser spells it.
    pub fn name(self) -> &'static str {
        match self {
            Attr::Text => "text",
            Attr::Nodes => "nodes",
            Attr::Ops => "ops",
            Attr::Left => "left",
            Attr::Right => "right",
            Attr::Op => "op",
            Attr::Target => "target",
            Attr::Index => "index",
            Attr::Args => "args",
            Attr::Body => "body",
            Attr::Callee => "callee",
            Attr::Item => "item",
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value stored under an attribute key.
#[derive(Clone, Debug)]
pub enum NodeAttr {
    Text(String),
    Node(SharedNode),
    List(Vec<SharedNode>),
}

/// A syntax-tree node: kind tag plus attributes.
#[derive(Clone, Debug)]
pub struct Node {
    kind: NodeKind,
    attrs: FxHashMap<Attr, NodeAttr>,
}

impl Node {
    /// Create a node with no attributes.
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            attrs: FxHashMap::default(),
        }
    }

    /// Create a node carrying only a `text` attribute.
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Node::new(kind).with_text(Attr::Text, text)
    }

    /// Set a text attribute.
    #[must_use]
    pub fn with_text(mut self, attr: Attr, text: impl Into<String>) -> Self {
        self.attrs.insert(attr, NodeAttr::Text(text.into()));
        self
    }

    /// Set a single-child attribute.
    #[must_use]
    pub fn with_node(mut self, attr: Attr, node: impl Into<SharedNode>) -> Self {
        self.attrs.insert(attr, NodeAttr::Node(node.into()));
        self
    }

    /// Set a list attribute.
    #[must_use]
    pub fn with_list<I>(mut self, attr: Attr, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SharedNode>,
    {
        let list = nodes.into_iter().map(Into::into).collect();
        self.attrs.insert(attr, NodeAttr::List(list));
        self
    }

    /// The node's kind tag.
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Whether the attribute is present.
    #[inline]
    pub fn has(&self, attr: Attr) -> bool {
        self.attrs.contains_key(&attr)
    }

    /// Text attribute, if present and textual.
    pub fn text(&self, attr: Attr) -> Option<&str> {
        match self.attrs.get(&attr)? {
            NodeAttr::Text(text) => Some(text),
            NodeAttr::Node(_) | NodeAttr::List(_) => None,
        }
    }

    /// Single-child attribute, if present and a node.
    pub fn node(&self, attr: Attr) -> Option<&SharedNode> {
        match self.attrs.get(&attr)? {
            NodeAttr::Node(node) => Some(node),
            NodeAttr::Text(_) | NodeAttr::List(_) => None,
        }
    }

    /// List attribute.
    ///
    /// A single child stored where a list is expected is returned as a
    /// one-element slice; parsers collapse one-item lists.
    pub fn list(&self, attr: Attr) -> Option<&[SharedNode]> {
        match self.attrs.get(&attr)? {
            NodeAttr::List(nodes) => Some(nodes),
            NodeAttr::Node(node) => Some(std::slice::from_ref(node)),
            NodeAttr::Text(_) => None,
        }
    }

    /// Move this node behind a shared handle.
    pub fn into_shared(self) -> SharedNode {
        SharedNode(Arc::new(self))
    }
}

/// Shared handle to a node.
///
/// Function values keep their body through this handle, so the body is
/// referenced from the tree and never copied.
#[derive(Clone)]
pub struct SharedNode(Arc<Node>);

impl SharedNode {
    /// Whether both handles point at the same node.
    #[inline]
    pub fn ptr_eq(a: &SharedNode, b: &SharedNode) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl From<Node> for SharedNode {
    fn from(node: Node) -> Self {
        node.into_shared()
    }
}

impl Deref for SharedNode {
    type Target = Node;

    #[inline]
    fn deref(&self) -> &Node {
        &self.0
    }
}

impl fmt::Debug for SharedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
