//! Lazy iteration over values.

use std::iter::FusedIterator;

use super::heap::Heap;
use super::string::StringValue;
use super::Value;

/// Iterator over the code points of a string snapshot.
///
/// The text is captured when iteration starts and shared through `Heap`.
/// A clone continues from the same position; [`ValueIter::restart`] begins a
/// new pass. Writes to the source value after the snapshot are not observed.
#[derive(Clone, Debug)]
pub struct ValueIter {
    data: Heap<String>,
    byte_pos: usize,
}

impl ValueIter {
    pub(crate) fn chars(text: String) -> Self {
        ValueIter {
            data: Heap::new(text),
            byte_pos: 0,
        }
    }

    /// A fresh pass over the same snapshot.
    pub fn restart(&self) -> Self {
        ValueIter {
            data: self.data.clone(),
            byte_pos: 0,
        }
    }
}

impl Iterator for ValueIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let c = self.data.get(self.byte_pos..)?.chars().next()?;
        self.byte_pos += c.len_utf8();
        Some(StringValue::char_value(c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.data.len().saturating_sub(self.byte_pos);
        (rest.div_ceil(4), Some(rest))
    }
}

impl FusedIterator for ValueIter {}
