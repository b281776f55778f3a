//! Primi IR - syntax-tree types consumed by the Primi runtime.
//!
//! This crate contains the data structures shared between the (external)
//! parser and the evaluator:
//! - `Name` / `StringInterner` for interned identifiers
//! - `Node`, `NodeKind`, `Attr` for the attribute-mapped syntax tree
//! - `BinaryOp` for operator symbols appearing in expression nodes
//!
//! # Design
//!
//! A node is a kind tag plus a small attribute map, mirroring the shape the
//! parser emits. Subtrees are shared through `SharedNode` so closures can
//! hold on to a function body without copying it.

mod interner;
mod name;
mod node;
mod op;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use node::{Attr, Node, NodeAttr, NodeKind, SharedNode};
pub use op::BinaryOp;
