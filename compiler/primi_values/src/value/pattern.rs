//! Regular expression values.

use std::borrow::Cow;
use std::fmt;

use primi_ir::BinaryOp;
use regex::Regex;

use super::heap::Heap;
use crate::capability::{Capabilities, SupportsComparison};
use crate::coerce::equality_polarity;
use crate::errors::{invalid_regex, operand_type_mismatch, EvalError};
use crate::value::Value;

/// A compiled pattern.
///
/// Two regex values are equal when their pattern sources are.
#[derive(Clone)]
pub struct RegexValue(Heap<Regex>);

impl RegexValue {
    pub const CAPABILITIES: Capabilities = Capabilities::COMPARISON;

    pub fn new(pattern: &str) -> Result<Self, EvalError> {
        match Regex::new(pattern) {
            Ok(re) => {
                tracing::trace!(pattern, "compiled regex");
                Ok(RegexValue(Heap::new(re)))
            }
            Err(err) => Err(invalid_regex(pattern, err)),
        }
    }

    /// Pattern source, without delimiters.
    #[inline]
    pub fn pattern(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }

    /// `haystack` with every match removed.
    pub fn remove_matches<'h>(&self, haystack: &'h str) -> Cow<'h, str> {
        self.0.replace_all(haystack, "")
    }
}

impl SupportsComparison for RegexValue {
    fn compare(&self, op: BinaryOp, right: &Value) -> Result<bool, EvalError> {
        match right {
            Value::Str(s) => {
                let eq = equality_polarity(op, "regex", right)?;
                Ok(self.is_match(&s.internal()) == eq)
            }
            Value::Regex(r) => {
                let eq = equality_polarity(op, "regex", right)?;
                Ok((self == r) == eq)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Func(_) => Err(
                operand_type_mismatch(op.as_symbol(), "regex", right.type_name()),
            ),
        }
    }
}

impl PartialEq for RegexValue {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}

impl Eq for RegexValue {}

impl fmt::Debug for RegexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegexValue(/{}/)", self.pattern())
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

    fn re(pattern: &str) -> RegexValue {
        RegexValue::new(pattern).unwrap()
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexValue::new("(").unwrap_err();
        assert!(matches!(
            err.kind,
            crate::EvalErrorKind::InvalidRegex { ref pattern, .. } if pattern == "("
        ));
    }

    #[test]
    fn test_matches_string() {
        let digits = re(r"\d+");
        assert_eq!(digits.compare(BinaryOp::Eq, &Value::string("a1")), Ok(true));
        assert_eq!(digits.compare(BinaryOp::NotEq, &Value::string("ab")), Ok(true));
    }

    #[test]
    fn test_regex_equality_by_pattern() {
        assert_eq!(re("a+").compare(BinaryOp::Eq, &Value::Regex(re("a+"))), Ok(true));
        assert_eq!(re("a+").compare(BinaryOp::Eq, &Value::Regex(re("a*"))), Ok(false));
    }

    #[test]
    fn test_ordering_rejected() {
        let err = re("a").compare(BinaryOp::Lt, &Value::string("a"));
        assert!(err.is_err_and(|e| e.is_type_error()));
        let err = re("a").compare(BinaryOp::Eq, &Value::int(1));
        assert!(err.is_err_and(|e| e.is_type_error()));
    }

    #[test]
    fn test_remove_matches() {
        assert_eq!(re("[0-9]").remove_matches("a1b22c"), "abc");
    }
}
