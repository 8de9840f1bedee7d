//! Miscellaneous utility functions.

use anyhow::Context as _;
use colored::Colorize;
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::tokenizer::{Token, TokenKind};

/// Write a token listing (one kind-colored token per line, prefixed by its
/// index) to `writer`. Silently returns `Ok(())` on broken pipe so that
/// piping to tools like `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_colored_tokens<W: Write>(
    writer: &mut W,
    tokens: &[Token],
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        for (index, token) in tokens.iter().enumerate() {
            // Pad before coloring so the ANSI codes do not skew the column.
            let kind = format!("{:<14}", token.kind.to_string());
            writeln!(
                writer,
                "{index:>4} {} {}",
                kind.dimmed(),
                colored_value(token)
            )?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write token listing to stdout"),
    }
}

/// Color a token's text by its kind.
fn colored_value(token: &Token) -> colored::ColoredString {
    match token.kind {
        TokenKind::KeywordLiteral => token.value.yellow().bold(),
        TokenKind::NumberLiteral => token.value.yellow(),
        TokenKind::StringLiteral => format!("\"{}\"", token.value).green(),
        TokenKind::Operator => token.value.magenta(),
        TokenKind::Separator => token.value.cyan().bold(),
    }
}
