/*!
# Structural Spans

Measures how many tokens a complete array or object occupies inside a token
sequence, including its opening and closing separators. Nested structures
are skipped by recursion without inspecting their contents, so the cost of
stepping over a sibling is proportional to its token length, not to the
size of its decoded value.

A span is never materialized: callers get back a token count and recompute
it per query. The token sequence stays caller-owned and read-only
throughout.
*/
use std::error::Error;
use std::fmt;

use log::trace;

use crate::tokenizer::Token;

/// Represents errors raised while measuring a structural span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// The token sequence ended before the closer matching the opener at
    /// `start` appeared.
    UnmatchedStructure { start: usize },
}

impl Error for SpanError {}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedStructure { start } => {
                write!(
                    f,
                    "structure opened at token {start} has no matching closer"
                )
            }
        }
    }
}

/// Returns the number of tokens occupied by the array or object opening at
/// `start`, delimiters included.
///
/// Returns `Ok(0)` when `tokens` is empty or the token at `start` is not an
/// opening separator. That is a deliberate "not applicable" signal, letting
/// callers probe positions speculatively.
///
/// # Errors
///
/// Returns [`SpanError::UnmatchedStructure`] when the token sequence ends
/// before the matching closer is found.
pub fn span_length(tokens: &[Token], start: usize) -> Result<usize, SpanError> {
    match tokens.get(start) {
        Some(tok) if tok.is_separator("[") => array_span(tokens, start),
        Some(tok) if tok.is_separator("{") => object_span(tokens, start),
        _ => Ok(0),
    }
}

/// Count the tokens of the array opening at `start`. The caller has already
/// checked that `tokens[start]` is `[`.
fn array_span(tokens: &[Token], start: usize) -> Result<usize, SpanError> {
    let mut count = 1;
    let mut cursor = start + 1;

    loop {
        let tok = tokens
            .get(cursor)
            .ok_or(SpanError::UnmatchedStructure { start })?;

        if tok.is_separator("]") {
            trace!("array at {start} spans {} tokens", count + 1);
            return Ok(count + 1);
        }

        if tok.is_opener() {
            let nested = span_length(tokens, cursor)?;
            count += nested;
            cursor += nested;
        } else {
            // Scalar element or comma.
            count += 1;
            cursor += 1;
        }
    }
}

/// Count the tokens of the object opening at `start`. Keys, colons, and
/// values all count one each except nested structures, which are skipped
/// span-wise. The caller has already checked that `tokens[start]` is `{`.
fn object_span(tokens: &[Token], start: usize) -> Result<usize, SpanError> {
    let mut count = 1;
    let mut cursor = start + 1;

    loop {
        let tok = tokens
            .get(cursor)
            .ok_or(SpanError::UnmatchedStructure { start })?;

        if tok.is_separator("}") {
            trace!("object at {start} spans {} tokens", count + 1);
            return Ok(count + 1);
        }

        if tok.is_opener() {
            let nested = span_length(tokens, cursor)?;
            count += nested;
            cursor += nested;
        } else {
            // Key, colon, scalar value, or comma.
            count += 1;
            cursor += 1;
        }
    }
}
