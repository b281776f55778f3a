//! Coercion helpers shared by the value kinds.
//!
//! Kinds never convert each other implicitly except through truthiness,
//! which equality between booleans and other scalars relies on.

use crate::errors::{invalid_operand, operand_type_mismatch, EvalError};
use crate::value::{Number, Value};
use primi_ir::BinaryOp;

/// Truthiness of any value.
///
/// Strings are judged on their internal form, so a literal holding only an
/// escaped line continuation is empty and therefore false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => !n.is_zero(),
        Value::Str(s) => !s.internal().is_empty(),
        Value::Regex(_) | Value::Func(_) => true,
    }
}

/// Integer index out of an index operand.
pub fn index_from(index: &Value) -> Result<i64, EvalError> {
    match index {
        Value::Number(Number::Int(i)) => Ok(*i),
        Value::Number(Number::Float(f)) => Err(invalid_operand(format!(
            "index must be an integer, got {f}"
        ))),
        Value::Null | Value::Bool(_) | Value::Str(_) | Value::Regex(_) | Value::Func(_) => Err(
            invalid_operand(format!("index must be an integer, got {}", index.type_name())),
        ),
    }
}

/// For pairs that only support `==` and `!=`: `true` for `==`, `false` for
/// `!=`, and a type error for every other operator.
pub fn equality_polarity(op: BinaryOp, left: &str, right: &Value) -> Result<bool, EvalError> {
    match op {
        BinaryOp::Eq => Ok(true),
        BinaryOp::NotEq => Ok(false),
        BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq
        | BinaryOp::Add
        | BinaryOp::Sub
        | BinaryOp::Mul => Err(operand_type_mismatch(
            op.as_symbol(),
            left,
            right.type_name(),
        )),
    }
}
