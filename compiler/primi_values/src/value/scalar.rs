//! Booleans and null.
//!
//! Both only compare, and only for equality: a boolean against booleans,
//! numbers and null, null against null and booleans. The right operand is
//! reduced to its truthiness.

use primi_ir::BinaryOp;

use crate::capability::{Capabilities, SupportsComparison};
use crate::coerce::{equality_polarity, is_truthy};
use crate::errors::{operand_type_mismatch, EvalError};
use crate::value::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoolValue(pub bool);

impl BoolValue {
    pub const CAPABILITIES: Capabilities = Capabilities::COMPARISON;
}

impl SupportsComparison for BoolValue {
    fn compare(&self, op: BinaryOp, right: &Value) -> Result<bool, EvalError> {
        match right {
            Value::Bool(_) | Value::Number(_) | Value::Null => {
                let eq = equality_polarity(op, "bool", right)?;
                Ok((self.0 == is_truthy(right)) == eq)
            }
            Value::Str(_) | Value::Regex(_) | Value::Func(_) => Err(operand_type_mismatch(
                op.as_symbol(),
                "bool",
                right.type_name(),
            )),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NullValue;

impl NullValue {
    pub const CAPABILITIES: Capabilities = Capabilities::COMPARISON;
}

impl SupportsComparison for NullValue {
    fn compare(&self, op: BinaryOp, right: &Value) -> Result<bool, EvalError> {
        match right {
            Value::Null | Value::Bool(_) => {
                let eq = equality_polarity(op, "null", right)?;
                Ok(!is_truthy(right) == eq)
            }
            Value::Number(_) | Value::Str(_) | Value::Regex(_) | Value::Func(_) => Err(
                operand_type_mismatch(op.as_symbol(), "null", right.type_name()),
            ),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bool_equals_number_by_truthiness() {
        let t = BoolValue(true);
        assert_eq!(t.compare(BinaryOp::Eq, &Value::int(1)), Ok(true));
        assert_eq!(t.compare(BinaryOp::Eq, &Value::int(0)), Ok(false));
        assert_eq!(BoolValue(false).compare(BinaryOp::Eq, &Value::float(0.0)), Ok(true));
    }

    #[test]
    fn test_bool_against_null() {
        assert_eq!(BoolValue(true).compare(BinaryOp::Eq, &Value::Null), Ok(false));
        assert_eq!(BoolValue(false).compare(BinaryOp::Eq, &Value::Null), Ok(true));
        assert_eq!(BoolValue(true).compare(BinaryOp::NotEq, &Value::Null), Ok(true));
    }

    #[test]
    fn test_bool_ordering_is_type_error() {
        let err = BoolValue(true).compare(BinaryOp::Lt, &Value::int(1)).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_bool_rejects_strings() {
        let err = BoolValue(true).compare(BinaryOp::Eq, &Value::string("x"));
        assert!(err.is_err_and(|e| e.is_type_error()));
    }

    #[test]
    fn test_null_comparison() {
        assert_eq!(NullValue.compare(BinaryOp::Eq, &Value::Null), Ok(true));
        assert_eq!(NullValue.compare(BinaryOp::Eq, &Value::Bool(false)), Ok(true));
        assert_eq!(NullValue.compare(BinaryOp::NotEq, &Value::Bool(true)), Ok(true));
        assert!(NullValue
            .compare(BinaryOp::Eq, &Value::int(0))
            .is_err_and(|e| e.is_type_error()));
        assert!(NullValue
            .compare(BinaryOp::GtEq, &Value::Null)
            .is_err_and(|e| e.is_type_error()));
    }
}
