//! # Tokenizer/ Scanner
//!
//! Converts a JSON document into a flat token sequence via an ordered list
//! of scan rules.
pub mod scanner;
pub mod token;

// Re-exports
pub use scanner::{TokenizeError, tokenize};
pub use token::{Token, TokenKind};
