//! Error types for evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` separates the failure families the evaluator core can
//! raise. Three of them are what callers most often branch on:
//! - type errors (`TypeError`, `UnsupportedOperation`): the interpreted
//!   program applied an operator to operands it does not accept
//! - `UndefinedIndex`: indexed access outside valid bounds
//! - `UndefinedName`: a name missing from the whole scope chain
//!
//! The factory functions below are the public API for building errors;
//! they fill in both `kind` and `message`.
//!
//! Errors carry no source positions. Whoever invoked the top-level
//! evaluation attaches location context when reporting.

use crate::capability::Capability;
use crate::value::Value;
use primi_ir::{Attr, NodeKind};
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Type
    /// Operand rejected by an operator, or a value violating an operation's
    /// numeric/shape constraint.
    TypeError {
        message: String,
    },
    /// The left operand's kind lacks the operator's capability.
    UnsupportedOperation {
        capability: Capability,
        type_name: String,
    },

    // Access
    UndefinedIndex {
        index: i64,
    },
    UndefinedName {
        name: String,
    },

    // Function
    NotCallable {
        type_name: String,
    },
    ArityMismatch {
        expected: usize,
        got: usize,
    },
    StackOverflow {
        depth: usize,
    },

    // Syntax tree
    MalformedNode {
        kind: NodeKind,
        attr: Attr,
    },
    InvalidRegex {
        pattern: String,
        reason: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeError { message } => write!(f, "type error: {message}"),
            Self::UnsupportedOperation {
                capability,
                type_name,
            } => write!(
                f,
                "type error: {type_name} does not support {}",
                capability.name()
            ),
            Self::UndefinedIndex { index } => write!(f, "undefined index {index}"),
            Self::UndefinedName { name } => write!(f, "undefined variable: {name}"),
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::ArityMismatch { expected, got } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "expected {expected} {arg_word}, got {got}")
            }
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
            Self::MalformedNode { kind, attr } => {
                write!(f, "malformed {kind} node: missing or invalid `{attr}`")
            }
            Self::InvalidRegex { pattern, reason } => {
                write!(f, "invalid regular expression /{pattern}/: {reason}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error from a structured kind.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Whether this is a type error (rejected operand or missing capability).
    #[inline]
    pub fn is_type_error(&self) -> bool {
        matches!(
            self.kind,
            EvalErrorKind::TypeError { .. } | EvalErrorKind::UnsupportedOperation { .. }
        )
    }

    /// Whether this is an out-of-bounds index error.
    #[inline]
    pub fn is_undefined_index(&self) -> bool {
        matches!(self.kind, EvalErrorKind::UndefinedIndex { .. })
    }

    /// Whether this is a failed name resolution.
    #[inline]
    pub fn is_undefined_name(&self) -> bool {
        matches!(self.kind, EvalErrorKind::UndefinedName { .. })
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Type Errors

/// Operator applied to a right operand the left kind does not accept.
#[cold]
pub fn operand_type_mismatch(op: &str, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError {
        message: format!("operator `{op}` cannot be applied to {left} and {right}"),
    })
}

/// Operand of an accepted kind that violates the operation's constraints.
#[cold]
pub fn invalid_operand(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError {
        message: message.into(),
    })
}

/// The left operand's kind lacks the capability.
#[cold]
pub fn unsupported_operation(capability: Capability, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperation {
        capability,
        type_name: type_name.to_string(),
    })
}

// Access Errors

/// Index outside the valid range.
#[cold]
pub fn undefined_index(index: i64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedIndex { index })
}

/// Name not bound anywhere in the scope chain.
#[cold]
pub fn undefined_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedName {
        name: name.to_string(),
    })
}

// Function Errors

/// Value is not callable.
#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    })
}

/// Wrong number of arguments in a call.
#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

/// Maximum call depth exceeded.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}

// Syntax Tree Errors

/// Node lacks an attribute its handler requires, or holds the wrong shape.
#[cold]
pub fn malformed_node(kind: NodeKind, attr: Attr) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedNode { kind, attr })
}

/// Regex pattern failed to compile.
#[cold]
pub fn invalid_regex(pattern: &str, reason: impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidRegex {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests;
