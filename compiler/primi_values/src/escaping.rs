//! String escape handling.
//!
//! A string value goes through three representations:
//! - the literal slice in source, with its quotes;
//! - the *raw* text stored in the value, after [`unescape_string`] has
//!   reduced line continuations and escaped quotes;
//! - the *internal* text used by operators, produced from raw text by
//!   [`expand_sequences`] on every read.
//!
//! [`store_internal`] goes the other way, so operators that compute a new
//! internal text can store it without it being expanded a second time.

use std::borrow::Cow;

/// Reduce escapes in the body of a string literal.
///
/// Backslash followed by a line break (`\n` or `\r\n`) is a line
/// continuation and disappears entirely. `\"` and `\'` become bare quotes.
/// A doubled backslash is kept as two characters and no other sequence is
/// touched; those are left for [`expand_sequences`].
pub fn unescape_string(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('\n') => {
                chars.next();
            }
            Some('\r') => {
                chars.next();
                if chars.peek() == Some(&'\n') {
                    chars.next();
                } else {
                    out.push('\\');
                    out.push('\r');
                }
            }
            Some(quote @ ('"' | '\'')) => {
                chars.next();
                out.push(quote);
            }
            Some('\\') => {
                chars.next();
                out.push_str("\\\\");
            }
            _ => out.push('\\'),
        }
    }

    out
}

/// Expand escape sequences of stored text.
///
/// `\n` not preceded by a backslash becomes a newline. Afterwards, every
/// `\\n` collapses to the two characters `\n`.
pub fn expand_sequences(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let bytes = raw.as_bytes();
    let mut expanded = String::with_capacity(raw.len());
    let mut start = 0;
    let mut i = 0;
    while i + 1 < bytes.len() {
        let preceded = i > 0 && bytes[i - 1] == b'\\';
        if bytes[i] == b'\\' && bytes[i + 1] == b'n' && !preceded {
            expanded.push_str(&raw[start..i]);
            expanded.push('\n');
            i += 2;
            start = i;
        } else {
            i += 1;
        }
    }
    expanded.push_str(&raw[start..]);

    if expanded.contains(r"\\n") {
        Cow::Owned(expanded.replace(r"\\n", r"\n"))
    } else {
        Cow::Owned(expanded)
    }
}

/// Encode internal text so that [`expand_sequences`] yields it back.
pub fn store_internal(text: &str) -> Cow<'_, str> {
    if text.contains(r"\n") {
        Cow::Owned(text.replace(r"\n", r"\\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Escape embedded double quotes.
pub fn escape_quotes(raw: &str) -> Cow<'_, str> {
    if raw.contains('"') {
        Cow::Owned(raw.replace('"', "\\\""))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Diagnostic form of stored text: quotes escaped, sequences expanded,
/// wrapped in double quotes.
pub fn quote_for_display(raw: &str) -> String {
    let escaped = escape_quotes(raw);
    format!("\"{}\"", expand_sequences(&escaped))
}

#[cfg(test)]
mod tests;
