//! Runtime values.
//!
//! `Value` is a closed set of kinds. Operators dispatch on the left
//! operand's kind to the capability trait its kind type implements; a kind
//! without the capability yields `unsupported_operation`. Every dispatch
//! below matches all kinds explicitly so a new kind cannot silently fall
//! into a default arm.
//!
//! Heap payloads are created only through the factory methods here and on
//! the kind types (`Heap::new` is crate-private).

mod function;
mod heap;
mod iter;
mod number;
mod pattern;
mod scalar;
mod string;

use std::borrow::Cow;
use std::fmt;

use primi_ir::{BinaryOp, Name, SharedNode};

pub use function::FnContainer;
pub use heap::Heap;
pub use iter::ValueIter;
pub use number::Number;
pub use pattern::RegexValue;
pub use scalar::{BoolValue, NullValue};
pub use string::{StringValue, MAX_REPEAT_LEN};

use crate::capability::{
    Capabilities, Capability, SupportsAddition, SupportsComparison, SupportsIndexedAccess,
    SupportsIteration, SupportsMultiplication, SupportsSubtraction,
};
use crate::coerce;
use crate::context::Context;
use crate::errors::{invalid_operand, unsupported_operation, EvalError, EvalResult};

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    /// Raw text, see `StringValue`.
    Str(StringValue),
    Regex(RegexValue),
    Func(FnContainer),
}

/// Kind tag of a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Regex,
    Function,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Regex => "regex",
            ValueKind::Function => "function",
        }
    }

    /// Capabilities every value of this kind supports.
    pub fn capabilities(self) -> Capabilities {
        match self {
            ValueKind::Null => NullValue::CAPABILITIES,
            ValueKind::Bool => BoolValue::CAPABILITIES,
            ValueKind::Number => Number::CAPABILITIES,
            ValueKind::String => StringValue::CAPABILITIES,
            ValueKind::Regex => RegexValue::CAPABILITIES,
            ValueKind::Function => FnContainer::CAPABILITIES,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Number(Number::Int(n))
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }

    /// String value from raw (already escape-reduced) text.
    #[inline]
    pub fn string(raw: impl Into<String>) -> Self {
        Value::Str(StringValue::new(raw))
    }

    /// String value whose internal text is exactly `text`.
    #[inline]
    pub fn string_internal(text: &str) -> Self {
        Value::Str(StringValue::from_internal(text))
    }

    pub fn regex(pattern: &str) -> EvalResult {
        RegexValue::new(pattern).map(Value::Regex)
    }

    /// Closure over `context`.
    #[inline]
    pub fn func(body: SharedNode, params: Vec<Name>, context: Context) -> Self {
        Value::Func(FnContainer::build(body, params, context))
    }
}

// Value Methods

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Str(_) => ValueKind::String,
            Value::Regex(_) => ValueKind::Regex,
            Value::Func(_) => ValueKind::Function,
        }
    }

    /// Kind name for error messages.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.kind().capabilities()
    }

    #[inline]
    pub fn is_truthy(&self) -> bool {
        coerce::is_truthy(self)
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&StringValue> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_func(&self) -> Option<&FnContainer> {
        match self {
            Value::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Diagnostic rendering, as printed to users.
    ///
    /// Strings are quoted with embedded quotes re-escaped; regexes keep their
    /// slashes.
    pub fn string_value(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Str(s) => s.diagnostic(),
            Value::Regex(r) => format!("/{}/", r.pattern()),
            Value::Func(_) => "<function>".to_string(),
        }
    }

    /// Rendering used when the value feeds another operation.
    ///
    /// Strings yield their internal text and regexes their bare pattern;
    /// other kinds fall back to the diagnostic rendering.
    pub fn internal_value(&self) -> Cow<'_, str> {
        match self {
            Value::Str(s) => s.internal(),
            Value::Regex(r) => Cow::Borrowed(r.pattern()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Func(_) => {
                Cow::Owned(self.string_value())
            }
        }
    }
}

// Capability Dispatch

impl Value {
    pub fn add(&self, right: &Value) -> EvalResult {
        match self {
            Value::Number(n) => n.add(right),
            Value::Str(s) => s.add(right),
            Value::Null | Value::Bool(_) | Value::Regex(_) | Value::Func(_) => {
                Err(unsupported_operation(Capability::Addition, self.type_name()))
            }
        }
    }

    pub fn sub(&self, right: &Value) -> EvalResult {
        match self {
            Value::Number(n) => n.sub(right),
            Value::Str(s) => s.sub(right),
            Value::Null | Value::Bool(_) | Value::Regex(_) | Value::Func(_) => Err(
                unsupported_operation(Capability::Subtraction, self.type_name()),
            ),
        }
    }

    pub fn mul(&self, right: &Value) -> EvalResult {
        match self {
            Value::Number(n) => n.mul(right),
            Value::Str(s) => s.mul(right),
            Value::Null | Value::Bool(_) | Value::Regex(_) | Value::Func(_) => Err(
                unsupported_operation(Capability::Multiplication, self.type_name()),
            ),
        }
    }

    /// Compare with a comparison operator; yields a bool value.
    pub fn compare(&self, op: BinaryOp, right: &Value) -> EvalResult {
        if !op.is_comparison() {
            return Err(invalid_operand(format!(
                "`{op}` is not a comparison operator"
            )));
        }
        let holds = match self {
            Value::Null => NullValue.compare(op, right)?,
            Value::Bool(b) => BoolValue(*b).compare(op, right)?,
            Value::Number(n) => n.compare(op, right)?,
            Value::Str(s) => s.compare(op, right)?,
            Value::Regex(r) => r.compare(op, right)?,
            Value::Func(_) => {
                return Err(unsupported_operation(
                    Capability::Comparison,
                    self.type_name(),
                ));
            }
        };
        Ok(Value::Bool(holds))
    }

    /// Apply any binary operator.
    pub fn binary(&self, op: BinaryOp, right: &Value) -> EvalResult {
        match op {
            BinaryOp::Add => self.add(right),
            BinaryOp::Sub => self.sub(right),
            BinaryOp::Mul => self.mul(right),
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::LtEq
            | BinaryOp::Gt
            | BinaryOp::GtEq => self.compare(op, right),
        }
    }

    pub fn iterate(&self) -> Result<ValueIter, EvalError> {
        match self {
            Value::Str(s) => Ok(s.iterate()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Regex(_) | Value::Func(_) => {
                Err(unsupported_operation(Capability::Iteration, self.type_name()))
            }
        }
    }

    pub fn index_get(&self, index: &Value) -> EvalResult {
        match self {
            Value::Str(s) => s.index_get(index),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Regex(_) | Value::Func(_) => {
                Err(unsupported_operation(Capability::IndexedAccess, self.type_name()))
            }
        }
    }

    /// Write into this value; `None` appends.
    pub fn index_set(&mut self, index: Option<&Value>, value: &Value) -> Result<(), EvalError> {
        match self {
            Value::Str(s) => s.index_set(index, value),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Regex(_) | Value::Func(_) => {
                Err(unsupported_operation(Capability::IndexedAccess, self.type_name()))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_value())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::float(f)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
