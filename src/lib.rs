/*!
# `jsonspan` Library

Provides lazy access to JSON documents: tokenize once, measure structural
spans, and locate array elements or object keys by skipping over sibling
spans instead of decoding them.
*/

pub mod access;
pub mod commands;
pub mod span;
pub mod tokenizer;
pub mod utils;
