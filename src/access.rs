/*!
# Lazy Navigation

Locates array elements and object values inside a token sequence by
skipping over sibling spans, without decoding any of the skipped content.
Both lookups return token offsets only; turning an offset into a native
value is left to the caller.

Locating the `n`th element costs the total token length of the first `n`
elements' spans, which is the point of the whole exercise: deeply nested
siblings are stepped over in one move each.
*/
use log::trace;

use crate::span::{SpanError, span_length};
use crate::tokenizer::{Token, TokenKind};

/// Returns the token index of the `n`th (0-based) element of the array
/// opening at `start`.
///
/// Returns `Ok(None)` when the token at `start` is not `[`, when the array
/// holds fewer than `n + 1` elements, or when the tokens between elements
/// do not form an array body.
///
/// # Errors
///
/// Returns [`SpanError::UnmatchedStructure`] when the token sequence ends
/// before the array closes.
pub fn element_offset(
    tokens: &[Token],
    start: usize,
    n: usize,
) -> Result<Option<usize>, SpanError> {
    match tokens.get(start) {
        Some(tok) if tok.is_separator("[") => {}
        _ => return Ok(None),
    }

    let mut cursor = start + 1;
    let mut index = 0;

    loop {
        let tok = tokens
            .get(cursor)
            .ok_or(SpanError::UnmatchedStructure { start })?;

        if tok.is_separator("]") {
            return Ok(None);
        }
        if index == n {
            trace!("element {n} of array at {start} begins at token {cursor}");
            return Ok(Some(cursor));
        }

        cursor += skip_value(tokens, cursor)?;
        let after = tokens
            .get(cursor)
            .ok_or(SpanError::UnmatchedStructure { start })?;

        if after.is_separator(",") {
            cursor += 1;
            index += 1;
        } else if !after.is_separator("]") {
            // Not an array body; give up rather than walk garbage.
            return Ok(None);
        }
    }
}

/// Returns the token index of the value bound to `key` in the object
/// opening at `start`.
///
/// Keys are compared against the raw token text, so escape sequences in the
/// document must appear verbatim in `key`.
///
/// Returns `Ok(None)` when the token at `start` is not `{`, when the key is
/// absent, or when the tokens between entries do not form an object body.
///
/// # Errors
///
/// Returns [`SpanError::UnmatchedStructure`] when the token sequence ends
/// before the object closes.
pub fn value_offset(
    tokens: &[Token],
    start: usize,
    key: &str,
) -> Result<Option<usize>, SpanError> {
    match tokens.get(start) {
        Some(tok) if tok.is_separator("{") => {}
        _ => return Ok(None),
    }

    let mut cursor = start + 1;

    loop {
        let tok = tokens
            .get(cursor)
            .ok_or(SpanError::UnmatchedStructure { start })?;

        if tok.is_separator("}") {
            return Ok(None);
        }

        // Entry shape: StringLiteral key, colon, value.
        if tok.kind != TokenKind::StringLiteral {
            return Ok(None);
        }
        let colon = tokens
            .get(cursor + 1)
            .ok_or(SpanError::UnmatchedStructure { start })?;
        if colon.kind != TokenKind::Operator {
            return Ok(None);
        }
        let value_at = cursor + 2;
        if tokens.get(value_at).is_none() {
            return Err(SpanError::UnmatchedStructure { start });
        }

        if tok.value == key {
            trace!("key {key:?} of object at {start} binds token {value_at}");
            return Ok(Some(value_at));
        }

        cursor = value_at + skip_value(tokens, value_at)?;
        let after = tokens
            .get(cursor)
            .ok_or(SpanError::UnmatchedStructure { start })?;

        if after.is_separator(",") {
            cursor += 1;
        } else if !after.is_separator("}") {
            return Ok(None);
        }
    }
}

/// Token width of the value starting at `at`: the whole span for a nested
/// structure, one token for a scalar.
fn skip_value(tokens: &[Token], at: usize) -> Result<usize, SpanError> {
    match tokens.get(at) {
        Some(tok) if tok.is_opener() => span_length(tokens, at),
        _ => Ok(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn element_lookup_on_non_array_is_not_applicable() {
        let tokens = tokenize("true").unwrap();
        assert_eq!(element_offset(&tokens, 0, 0), Ok(None));
        assert_eq!(element_offset(&[], 0, 0), Ok(None));
    }

    #[test]
    fn element_lookup_in_flat_array() {
        // [ true , false , null , 50.00 ]
        let tokens = tokenize("[true, false, null, 50.00]").unwrap();
        assert_eq!(element_offset(&tokens, 0, 0), Ok(Some(1)));
        assert_eq!(element_offset(&tokens, 0, 1), Ok(Some(3)));
        assert_eq!(element_offset(&tokens, 0, 2), Ok(Some(5)));
        assert_eq!(element_offset(&tokens, 0, 3), Ok(Some(7)));
        assert_eq!(tokens[7].value, "50.00");
    }

    #[test]
    fn element_lookup_past_the_end() {
        let tokens = tokenize("[1, 2]").unwrap();
        assert_eq!(element_offset(&tokens, 0, 2), Ok(None));

        let tokens = tokenize("[]").unwrap();
        assert_eq!(element_offset(&tokens, 0, 0), Ok(None));
    }

    #[test]
    fn element_lookup_skips_nested_siblings_whole() {
        // [ {"a": [1, 2]} , [3] , 4 ]
        let tokens = tokenize(r#"[{"a": [1, 2]}, [3], 4]"#).unwrap();

        let second = element_offset(&tokens, 0, 1).unwrap().unwrap();
        assert!(tokens[second].is_separator("["));

        let third = element_offset(&tokens, 0, 2).unwrap().unwrap();
        assert_eq!(tokens[third].value, "4");
    }

    #[test]
    fn element_lookup_in_unclosed_array_is_an_error() {
        let tokens = tokenize("[1, 2").unwrap();
        assert_eq!(
            element_offset(&tokens, 0, 5),
            Err(SpanError::UnmatchedStructure { start: 0 })
        );
    }

    #[test]
    fn key_lookup_on_non_object_is_not_applicable() {
        let tokens = tokenize("[1]").unwrap();
        assert_eq!(value_offset(&tokens, 0, "a"), Ok(None));
    }

    #[test]
    fn key_lookup_in_flat_object() {
        // { "a" : 1 , "b" : 2 }
        let tokens = tokenize(r#"{"a": 1, "b": 2}"#).unwrap();

        let a = value_offset(&tokens, 0, "a").unwrap().unwrap();
        assert_eq!(tokens[a].value, "1");
        let b = value_offset(&tokens, 0, "b").unwrap().unwrap();
        assert_eq!(tokens[b].value, "2");
        assert_eq!(value_offset(&tokens, 0, "c"), Ok(None));
    }

    #[test]
    fn key_lookup_skips_structured_values() {
        let tokens =
            tokenize(r#"{"skip": {"deep": [1, 2, 3]}, "want": true}"#).unwrap();
        let want = value_offset(&tokens, 0, "want").unwrap().unwrap();
        assert_eq!(tokens[want].value, "true");
    }

    #[test]
    fn key_lookup_returns_offset_of_structured_value() {
        let tokens = tokenize(r#"{"key": {"values": [1]}}"#).unwrap();
        let values = value_offset(&tokens, 0, "key").unwrap().unwrap();
        assert!(tokens[values].is_separator("{"));

        // Chain into the nested object.
        let inner = value_offset(&tokens, values, "values").unwrap().unwrap();
        assert!(tokens[inner].is_separator("["));
    }

    #[test]
    fn key_lookup_in_unclosed_object_is_an_error() {
        let tokens = tokenize(r#"{"a": 1"#).unwrap();
        assert_eq!(
            value_offset(&tokens, 0, "b"),
            Err(SpanError::UnmatchedStructure { start: 0 })
        );
    }

    #[test]
    fn key_comparison_is_verbatim() {
        // Escape sequences are preserved by the scanner, so the lookup key
        // must spell them the same way.
        let tokens = tokenize(r#"{"a\"b": 1}"#).unwrap();
        assert_eq!(value_offset(&tokens, 0, "a\"b"), Ok(None));
        let hit = value_offset(&tokens, 0, r#"a\"b"#).unwrap();
        assert_eq!(hit, Some(3));
    }
}
