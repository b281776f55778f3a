//! Numbers.

use std::cmp::Ordering;
use std::fmt;

use primi_ir::BinaryOp;

use crate::capability::{
    Capabilities, SupportsAddition, SupportsComparison, SupportsMultiplication,
    SupportsSubtraction,
};
use crate::coerce::equality_polarity;
use crate::errors::{operand_type_mismatch, EvalError, EvalResult};
use crate::value::Value;

/// Integer or floating-point number.
///
/// Integer arithmetic stays integral until it overflows `i64`; the result is
/// then computed in floating point instead of failing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub const CAPABILITIES: Capabilities = Capabilities::ARITHMETIC.union(Capabilities::COMPARISON);

    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed int/float arithmetic is defined in floating point"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    fn arith(
        self,
        right: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Number {
        match (self, right) {
            (Number::Int(a), Number::Int(b)) => match int_op(a, b) {
                Some(n) => Number::Int(n),
                None => Number::Float(float_op(self.as_f64(), right.as_f64())),
            },
            _ => Number::Float(float_op(self.as_f64(), right.as_f64())),
        }
    }

    fn partial_cmp_number(self, right: Number) -> Option<Ordering> {
        match (self, right) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&right.as_f64()),
        }
    }

    fn right_operand(op: BinaryOp, right: &Value) -> Result<Number, EvalError> {
        match right {
            Value::Number(n) => Ok(*n),
            Value::Null | Value::Bool(_) | Value::Str(_) | Value::Regex(_) | Value::Func(_) => Err(
                operand_type_mismatch(op.as_symbol(), "number", right.type_name()),
            ),
        }
    }
}

/// Whether `ordering` satisfies the comparison operator. `None` (NaN
/// involved) only satisfies `!=`.
fn ordering_holds(op: BinaryOp, ordering: Option<Ordering>) -> bool {
    match op {
        BinaryOp::Eq => ordering == Some(Ordering::Equal),
        BinaryOp::NotEq => ordering != Some(Ordering::Equal),
        BinaryOp::Lt => ordering == Some(Ordering::Less),
        BinaryOp::LtEq => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOp::Gt => ordering == Some(Ordering::Greater),
        BinaryOp::GtEq => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => false,
    }
}

impl SupportsAddition for Number {
    fn add(&self, right: &Value) -> EvalResult {
        let right = Number::right_operand(BinaryOp::Add, right)?;
        Ok(Value::Number(self.arith(right, i64::checked_add, |a, b| a + b)))
    }
}

impl SupportsSubtraction for Number {
    fn sub(&self, right: &Value) -> EvalResult {
        let right = Number::right_operand(BinaryOp::Sub, right)?;
        Ok(Value::Number(self.arith(right, i64::checked_sub, |a, b| a - b)))
    }
}

impl SupportsMultiplication for Number {
    fn mul(&self, right: &Value) -> EvalResult {
        let right = Number::right_operand(BinaryOp::Mul, right)?;
        Ok(Value::Number(self.arith(right, i64::checked_mul, |a, b| a * b)))
    }
}

impl SupportsComparison for Number {
    fn compare(&self, op: BinaryOp, right: &Value) -> Result<bool, EvalError> {
        match right {
            Value::Number(n) => Ok(ordering_holds(op, self.partial_cmp_number(*n))),
            Value::Bool(b) => {
                let eq = equality_polarity(op, "number", right)?;
                Ok((!self.is_zero() == *b) == eq)
            }
            // Strings never equal numbers, whatever their content.
            Value::Str(_) => Ok(!equality_polarity(op, "number", right)?),
            Value::Null | Value::Regex(_) | Value::Func(_) => Err(operand_type_mismatch(
                op.as_symbol(),
                "number",
                right.type_name(),
            )),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
