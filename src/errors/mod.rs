//! Error types for the lexer.
//!
//! This module defines the errors `tokenize` can fail with:
//!
//! - Error structures with source position information
//! - One variant per way the input can fail to lex
//! - Names and suggestions used when rendering diagnostics

pub mod errors;
