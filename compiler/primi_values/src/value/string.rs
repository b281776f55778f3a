//! String values.
//!
//! A `StringValue` keeps its *raw* text: the literal body after escape
//! reduction. Operators work on the *internal* text, which expands the
//! remaining escape sequences on every read; see `crate::escaping`.
//!
//! Character positions (indexing, iteration) count code points of the
//! internal text. Equality and pattern matching also use the internal text,
//! so a computed string equals the literal spelling the same content.

use std::borrow::Cow;

use primi_ir::BinaryOp;

use super::heap::Heap;
use super::iter::ValueIter;
use crate::capability::{
    Capabilities, SupportsAddition, SupportsComparison, SupportsIndexedAccess, SupportsIteration,
    SupportsMultiplication, SupportsSubtraction,
};
use crate::coerce::{equality_polarity, index_from};
use crate::errors::{invalid_operand, operand_type_mismatch, undefined_index, EvalError, EvalResult};
use crate::escaping::{expand_sequences, quote_for_display, store_internal};
use crate::value::{Number, Value};

/// Longest string, in bytes, that repetition will build.
pub const MAX_REPEAT_LEN: usize = 1 << 30;

#[derive(Clone, Debug)]
pub struct StringValue(Heap<String>);

impl StringValue {
    pub const CAPABILITIES: Capabilities = Capabilities::all();

    /// Wrap raw text, as produced by escape reduction of a literal.
    pub fn new(raw: impl Into<String>) -> Self {
        StringValue(Heap::new(raw.into()))
    }

    /// Store computed internal text; [`StringValue::internal`] returns it
    /// unchanged.
    pub fn from_internal(text: &str) -> Self {
        StringValue::new(store_internal(text).into_owned())
    }

    /// Stored text.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Operation-ready text with escape sequences expanded.
    pub fn internal(&self) -> Cow<'_, str> {
        expand_sequences(&self.0)
    }

    /// Quoted, re-escaped rendering for display.
    pub fn diagnostic(&self) -> String {
        quote_for_display(&self.0)
    }

    /// Length in code points of the internal text.
    pub fn char_len(&self) -> usize {
        self.internal().chars().count()
    }

    /// Whether two values share one buffer.
    pub fn shares_buffer(&self, other: &StringValue) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// One-character string value.
    pub(crate) fn char_value(c: char) -> Value {
        Value::Str(StringValue::from_internal(c.encode_utf8(&mut [0; 4])))
    }
}

impl PartialEq for StringValue {
    fn eq(&self, other: &Self) -> bool {
        self.shares_buffer(other) || self.internal() == other.internal()
    }
}

impl Eq for StringValue {}

impl SupportsAddition for StringValue {
    fn add(&self, right: &Value) -> EvalResult {
        match right {
            Value::Str(r) => {
                let joined = [self.internal(), r.internal()].concat();
                Ok(Value::Str(StringValue::from_internal(&joined)))
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Regex(_) | Value::Func(_) => {
                Err(operand_type_mismatch("+", "string", right.type_name()))
            }
        }
    }
}

impl SupportsSubtraction for StringValue {
    fn sub(&self, right: &Value) -> EvalResult {
        let text = self.internal();
        let stripped = match right {
            Value::Str(r) => {
                let needle = r.internal();
                if needle.is_empty() {
                    text.into_owned()
                } else {
                    text.replace(&*needle, "")
                }
            }
            Value::Regex(re) => re.remove_matches(&text).into_owned(),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Func(_) => {
                return Err(operand_type_mismatch("-", "string", right.type_name()));
            }
        };
        Ok(Value::Str(StringValue::from_internal(&stripped)))
    }
}

impl SupportsMultiplication for StringValue {
    fn mul(&self, right: &Value) -> EvalResult {
        let count = match right {
            Value::Number(Number::Int(n)) => usize::try_from(*n).map_err(|_| {
                invalid_operand(format!("cannot repeat a string {n} times"))
            })?,
            Value::Number(Number::Float(f)) => {
                return Err(invalid_operand(format!(
                    "string repeat count must be an integer, got {f}"
                )));
            }
            Value::Null | Value::Bool(_) | Value::Str(_) | Value::Regex(_) | Value::Func(_) => {
                return Err(operand_type_mismatch("*", "string", right.type_name()));
            }
        };

        let text = self.internal();
        if text
            .len()
            .checked_mul(count)
            .map_or(true, |len| len > MAX_REPEAT_LEN)
        {
            return Err(invalid_operand(format!(
                "string repeated {count} times is too long"
            )));
        }
        Ok(Value::Str(StringValue::from_internal(&text.repeat(count))))
    }
}

impl SupportsComparison for StringValue {
    fn compare(&self, op: BinaryOp, right: &Value) -> Result<bool, EvalError> {
        match right {
            Value::Str(r) => {
                let eq = equality_polarity(op, "string", right)?;
                Ok((self == r) == eq)
            }
            Value::Regex(re) => {
                let eq = equality_polarity(op, "string", right)?;
                Ok(re.is_match(&self.internal()) == eq)
            }
            // Strings never equal numbers, whatever their content.
            Value::Number(_) => Ok(!equality_polarity(op, "string", right)?),
            Value::Null | Value::Bool(_) | Value::Func(_) => Err(operand_type_mismatch(
                op.as_symbol(),
                "string",
                right.type_name(),
            )),
        }
    }
}

impl SupportsIteration for StringValue {
    fn iterate(&self) -> ValueIter {
        ValueIter::chars(self.internal().into_owned())
    }
}

impl SupportsIndexedAccess for StringValue {
    /// Indices count from the start only; a negative index is undefined.
    fn index_get(&self, index: &Value) -> EvalResult {
        let i = index_from(index)?;
        let c = usize::try_from(i)
            .ok()
            .and_then(|pos| self.internal().chars().nth(pos));
        c.map(StringValue::char_value).ok_or_else(|| undefined_index(i))
    }

    /// Writes replace this value's buffer with a fresh one. Other values
    /// sharing the old buffer keep their content.
    fn index_set(&mut self, index: Option<&Value>, value: &Value) -> Result<(), EvalError> {
        let piece: Cow<'_, str> = match value {
            Value::Str(s) => s.internal(),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Null | Value::Bool(_) | Value::Regex(_) | Value::Func(_) => {
                return Err(operand_type_mismatch("[]=", "string", value.type_name()));
            }
        };

        let mut text = self.internal().into_owned();
        match index {
            None => text.push_str(&piece),
            Some(index) => {
                let i = index_from(index)?;
                let pos = usize::try_from(i).map_err(|_| undefined_index(i))?;
                match text.char_indices().nth(pos) {
                    Some((start, c)) => text.replace_range(start..start + c.len_utf8(), &piece),
                    None if pos == text.chars().count() => text.push_str(&piece),
                    None => return Err(undefined_index(i)),
                }
            }
        }

        *self = StringValue::from_internal(&text);
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
