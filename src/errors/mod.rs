//! Error types and error handling for the scanner.
//!
//! A scan stops at the first lexical error. This module defines:
//!
//! - The positioned `Error` returned by the scanner
//! - The `ErrorImpl` variants (unrecognised character, malformed number,
//!   unterminated string)
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
