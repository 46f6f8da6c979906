//! Lexical analysis for `lk` source text.
//!
//! This module converts source text into an ordered sequence of tokens that
//! covers every byte of the input:
//!
//! - A forward-only scanner over the raw text
//! - An ordered rule table that classifies each position
//! - Comments, whitespace and newlines kept as tokens of their own
//! - Token position tracking for error reporting

pub mod lexer;
pub mod scanner;
pub mod tokens;
