#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add noise at every call site"
)]
//! Primi Values - the runtime value model of the Primi interpreter.
//!
//! This crate provides:
//! - Runtime values (`Value`) and the concrete kinds behind them
//!   (`Number`, `StringValue`, `RegexValue`, `FnContainer`, ...)
//! - Capability traits (`SupportsAddition`, `SupportsComparison`, ...) and
//!   the per-kind `Capabilities` set
//! - Coercion helpers (truthiness, index and equality operand checks)
//! - String escape reduction and expansion
//! - The lexical scope chain (`Context`) shared by closures
//! - Evaluation errors (`EvalError`, `EvalErrorKind`, `EvalResult`)
//!
//! # Dispatch
//!
//! Binary operators dispatch on the left operand's kind. The left kind's
//! capability implementation validates the right operand with an explicit
//! match whose default arm is a type error.

mod capability;
pub mod coerce;
mod context;
mod errors;
pub mod escaping;
mod value;

pub use capability::{
    Capabilities, Capability, SupportsAddition, SupportsComparison, SupportsIndexedAccess,
    SupportsIteration, SupportsMultiplication, SupportsSubtraction,
};
pub use context::{Context, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use value::{
    BoolValue, FnContainer, Heap, NullValue, Number, RegexValue, StringValue, Value, ValueIter,
    ValueKind, MAX_REPEAT_LEN,
};

// Re-export error constructors for use by the evaluator
pub use errors::{
    arity_mismatch, invalid_operand, invalid_regex, malformed_node, not_callable,
    operand_type_mismatch, recursion_limit_exceeded, undefined_index, undefined_name,
    unsupported_operation,
};
