//! # JSON Token
//!
//! Defines the token values produced by scanning a JSON document.
use std::fmt::Display;

/// Classifies a [`Token`] produced by the scanner.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// One of the fixed literals `false`, `null`, `true`.
    KeywordLiteral,

    /// A digit run with at most one decimal point (no sign, no exponent).
    NumberLiteral,

    /// A `"`-delimited string. The token value excludes the delimiting
    /// quotes and preserves escape sequences verbatim.
    StringLiteral,

    /// The colon character.
    Operator,

    /// One of `,` `[` `]` `{` `}`.
    Separator,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::KeywordLiteral => "KeywordLiteral",
            TokenKind::NumberLiteral => "NumberLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
        };
        write!(f, "{name}")
    }
}

/// A single token from a JSON document. Created once by the scanner and
/// never mutated.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// The token text. For string literals this excludes the quotes.
    pub value: String,
    /// The token's kind.
    pub kind: TokenKind,
}

impl Token {
    /// Construct a token from its text and kind.
    #[must_use]
    pub fn new(value: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// Returns whether this token is the separator with the given text.
    #[must_use]
    pub fn is_separator(&self, text: &str) -> bool {
        self.kind == TokenKind::Separator && self.value == text
    }

    /// Returns whether this token opens an array or an object.
    #[must_use]
    pub fn is_opener(&self) -> bool {
        self.is_separator("[") || self.is_separator("{")
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{:?}]", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_check_requires_kind_and_text() {
        let open = Token::new("[", TokenKind::Separator);
        assert!(open.is_separator("["));
        assert!(!open.is_separator("{"));

        // Same text, wrong kind.
        let fake = Token::new("[", TokenKind::StringLiteral);
        assert!(!fake.is_separator("["));
    }

    #[test]
    fn opener_covers_both_structures() {
        assert!(Token::new("[", TokenKind::Separator).is_opener());
        assert!(Token::new("{", TokenKind::Separator).is_opener());
        assert!(!Token::new("]", TokenKind::Separator).is_opener());
        assert!(!Token::new(":", TokenKind::Operator).is_opener());
    }

    #[test]
    fn display_shows_kind_and_value() {
        let tok = Token::new("hello", TokenKind::StringLiteral);
        assert_eq!(tok.to_string(), "StringLiteral[\"hello\"]");
    }
}
