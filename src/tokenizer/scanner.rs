//! # JSON Scanner
//!
//! Converts a JSON document into a flat token sequence by applying a fixed,
//! ordered list of scan rules at a moving cursor. Whitespace consumes input
//! but emits no token; every other rule emits at most one token per
//! application. Scanning is all-or-nothing: any error aborts the call and
//! the caller receives no tokens.
use std::error::Error;
use std::fmt;

use log::debug;

use crate::tokenizer::{Token, TokenKind};

/// Represents errors raised while scanning a JSON document. Every variant
/// carries enough position information for the caller to report a precise
/// source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A string literal was opened but the input ended before an unescaped
    /// closing quote. Carries the byte index of the opening quote.
    UnterminatedString { index: usize },
    /// No scan rule consumed the character at the given byte index.
    NoRuleMatched { ch: char, index: usize },
    /// The scan loop stopped before consuming the whole input. Unreachable
    /// as long as the rule set covers every character some rule can start
    /// on, but kept as a guard against rule gaps.
    IncompleteConsumption { consumed: usize },
}

impl Error for TokenizeError {}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString { index } => {
                write!(f, "unterminated string starting at index {index}")
            }
            Self::NoRuleMatched { ch, index } => {
                write!(f, "no rule matched {ch:?} at index {index}")
            }
            Self::IncompleteConsumption { consumed } => {
                write!(
                    f,
                    "stopped after {consumed} bytes without reaching the end of input"
                )
            }
        }
    }
}

/// The outcome of applying one scan rule at one cursor position: at most
/// one emitted token, plus the number of input bytes consumed.
struct Scan {
    token: Option<Token>,
    consumed: usize,
}

impl Scan {
    /// The rule did not apply at this position.
    const NOTHING: Self = Self {
        token: None,
        consumed: 0,
    };

    fn emit(value: impl Into<String>, kind: TokenKind, consumed: usize) -> Self {
        Self {
            token: Some(Token::new(value, kind)),
            consumed,
        }
    }
}

/// A single recognizer that may consume input at the cursor and optionally
/// emit one token.
type ScanRule = fn(&str, usize) -> Result<Scan, TokenizeError>;

/// The scan rules in priority order. The dispatch loop applies the whole
/// list at each cursor position.
const SCAN_RULES: [ScanRule; 6] = [
    skip_whitespace,
    keyword_literal,
    number_literal,
    operator,
    separator,
    string_literal,
];

/// Tokenize a JSON document into a flat token sequence.
///
/// Whitespace is consumed silently; all other input must be claimed by some
/// scan rule. The call is all-or-nothing: on error no tokens are returned.
///
/// # Errors
///
/// Returns a [`TokenizeError`] identifying the failing byte index when a
/// string is unterminated, a character matches no rule, or the scan loop
/// stops short of the input length.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut consumed = 0;

    while consumed < input.len() {
        let before = consumed;

        for rule in SCAN_RULES {
            let scan = rule(input, consumed)?;
            consumed += scan.consumed;
            if let Some(token) = scan.token {
                tokens.push(token);
            }
            if consumed == input.len() {
                break;
            }
        }

        if consumed == before {
            // The cursor only ever stops on char boundaries, so this is
            // always the character that no rule claimed.
            let ch = input[consumed..].chars().next().unwrap_or('\u{FFFD}');
            return Err(TokenizeError::NoRuleMatched {
                ch,
                index: consumed,
            });
        }
    }

    if consumed != input.len() {
        return Err(TokenizeError::IncompleteConsumption { consumed });
    }

    debug!("scanned {} tokens from {} bytes", tokens.len(), input.len());
    Ok(tokens)
}

/// Consume a maximal run of whitespace. Emits no token.
fn skip_whitespace(input: &str, idx: usize) -> Result<Scan, TokenizeError> {
    let bytes = input.as_bytes();
    let mut run = 0;
    while matches!(
        bytes.get(idx + run).copied(),
        Some(b' ' | b'\t' | b'\n' | b'\r')
    ) {
        run += 1;
    }
    Ok(Scan {
        token: None,
        consumed: run,
    })
}

/// Match one of the fixed literals `false`, `null`, `true` by exact prefix.
fn keyword_literal(input: &str, idx: usize) -> Result<Scan, TokenizeError> {
    const KEYWORDS: [&str; 3] = ["false", "null", "true"];

    let rest = &input[idx..];
    for keyword in KEYWORDS {
        if rest.starts_with(keyword) {
            return Ok(Scan::emit(
                keyword,
                TokenKind::KeywordLiteral,
                keyword.len(),
            ));
        }
    }
    Ok(Scan::NOTHING)
}

/// Greedily consume digits and at most one decimal point. A run without any
/// digit does not apply, leaving the cursor untouched.
fn number_literal(input: &str, idx: usize) -> Result<Scan, TokenizeError> {
    let rest = &input[idx..];
    let mut len = 0;
    let mut digits = 0;
    let mut has_decimal = false;

    for byte in rest.bytes() {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' if !has_decimal => has_decimal = true,
            _ => break,
        }
        len += 1;
    }

    if digits == 0 {
        return Ok(Scan::NOTHING);
    }
    Ok(Scan::emit(&rest[..len], TokenKind::NumberLiteral, len))
}

/// Match the colon character.
fn operator(input: &str, idx: usize) -> Result<Scan, TokenizeError> {
    if input.as_bytes().get(idx) == Some(&b':') {
        return Ok(Scan::emit(":", TokenKind::Operator, 1));
    }
    Ok(Scan::NOTHING)
}

/// Match one of the separators `,` `[` `]` `{` `}`.
fn separator(input: &str, idx: usize) -> Result<Scan, TokenizeError> {
    match input.as_bytes().get(idx).copied() {
        Some(b @ (b',' | b'[' | b']' | b'{' | b'}')) => Ok(Scan::emit(
            (b as char).to_string(),
            TokenKind::Separator,
            1,
        )),
        _ => Ok(Scan::NOTHING),
    }
}

/// Match a `"`-delimited string literal. The emitted value excludes the
/// quotes and keeps escape sequences verbatim. A backslash always escapes
/// the character after it, so `\\` followed by `"` closes the string.
fn string_literal(input: &str, idx: usize) -> Result<Scan, TokenizeError> {
    let rest = &input[idx..];
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'"') {
        return Ok(Scan::NOTHING);
    }

    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                return Ok(Scan::emit(
                    &rest[1..i],
                    TokenKind::StringLiteral,
                    i + 1,
                ));
            }
            // The escaped character can never close the string.
            b'\\' => i += 2,
            _ => i += 1,
        }
    }

    Err(TokenizeError::UnterminatedString { index: idx })
}
