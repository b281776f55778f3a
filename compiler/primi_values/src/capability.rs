//! Operator capabilities.
//!
//! A capability is a named operator family a value kind may support. Each
//! one exists twice: as a trait implemented by the concrete kind types in
//! `value`, and as a bit in `Capabilities` so callers can ask what a value
//! supports without attempting the operation. `Value` dispatch and the
//! `CAPABILITIES` constants on each kind must agree; the value tests check
//! this for every kind.

use crate::errors::{EvalError, EvalResult};
use crate::value::{Value, ValueIter};
use bitflags::bitflags;
use primi_ir::BinaryOp;
use std::fmt;

/// A single operator family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Addition,
    Subtraction,
    Multiplication,
    Comparison,
    Iteration,
    IndexedAccess,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Addition,
        Capability::Subtraction,
        Capability::Multiplication,
        Capability::Comparison,
        Capability::Iteration,
        Capability::IndexedAccess,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Capability::Addition => "addition",
            Capability::Subtraction => "subtraction",
            Capability::Multiplication => "multiplication",
            Capability::Comparison => "comparison",
            Capability::Iteration => "iteration",
            Capability::IndexedAccess => "indexed access",
        }
    }

    /// The flag corresponding to this capability.
    pub fn flag(self) -> Capabilities {
        match self {
            Capability::Addition => Capabilities::ADDITION,
            Capability::Subtraction => Capabilities::SUBTRACTION,
            Capability::Multiplication => Capabilities::MULTIPLICATION,
            Capability::Comparison => Capabilities::COMPARISON,
            Capability::Iteration => Capabilities::ITERATION,
            Capability::IndexedAccess => Capabilities::INDEXED_ACCESS,
        }
    }

    /// Capability an arithmetic or comparison operator requires.
    pub fn for_op(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Capability::Addition,
            BinaryOp::Sub => Capability::Subtraction,
            BinaryOp::Mul => Capability::Multiplication,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq => Capability::Comparison,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of capabilities supported by a value kind.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Capabilities: u8 {
        const ADDITION = 1 << 0;
        const SUBTRACTION = 1 << 1;
        const MULTIPLICATION = 1 << 2;
        const COMPARISON = 1 << 3;
        const ITERATION = 1 << 4;
        const INDEXED_ACCESS = 1 << 5;

        /// `+ - *`.
        const ARITHMETIC = Self::ADDITION.bits()
            | Self::SUBTRACTION.bits()
            | Self::MULTIPLICATION.bits();
    }
}

impl Capabilities {
    #[inline]
    pub fn supports(self, capability: Capability) -> bool {
        self.contains(capability.flag())
    }
}

/// `left + right`.
pub trait SupportsAddition {
    fn add(&self, right: &Value) -> EvalResult;
}

/// `left - right`.
pub trait SupportsSubtraction {
    fn sub(&self, right: &Value) -> EvalResult;
}

/// `left * right`.
pub trait SupportsMultiplication {
    fn mul(&self, right: &Value) -> EvalResult;
}

/// `==`, `!=`, `<`, `<=`, `>`, `>=`.
///
/// Implementations reject right operand kinds they do not know with a type
/// error, and reject operators that make no sense for the pair (ordering of
/// booleans, for instance) the same way.
pub trait SupportsComparison {
    fn compare(&self, op: BinaryOp, right: &Value) -> Result<bool, EvalError>;
}

/// Lazy, restartable iteration.
pub trait SupportsIteration {
    /// Start a new pass over the current content.
    ///
    /// The iterator works on a snapshot; later writes to the value do not
    /// affect a pass already in progress.
    fn iterate(&self) -> ValueIter;
}

/// `target[index]` reads and writes.
pub trait SupportsIndexedAccess {
    fn index_get(&self, index: &Value) -> EvalResult;

    /// Write `value` at `index`, or append when `index` is `None`.
    fn index_set(&mut self, index: Option<&Value>, value: &Value) -> Result<(), EvalError>;
}
