//! Lexical analysis module.
//!
//! Converts source text into a stream of tokens, one per call. It handles:
//!
//! - The character cursor and its advance/peek operations
//! - Space and `//` comment skipping
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting

pub mod scanner;
pub mod tokens;
