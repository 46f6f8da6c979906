//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the tokenizer's rule table:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a handler for fixed-text tokens
//! - `MK_RUN_HANDLER!` - Creates a handler for maximal-run tokens
//!
//! The handlers are non-capturing closures; their signature comes from
//! `RuleHandler`, so they must be used where that type is expected.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "foo".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a handler for a token whose text is always `$value`.
///
/// The generated handler advances the scanner past the literal and emits a
/// token of `$kind` covering it.
///
/// # Example
///
/// ```ignore
/// Rule::new(r"^->", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer, _regex| {
            let start = lexer.position();
            lexer.advance_n($value.chars().count());
            lexer.push_from(start, $kind);
            Ok(())
        }
    };
}

/// Creates a handler that emits one `$kind` token for the whole regex match
/// at the cursor.
///
/// # Example
///
/// ```ignore
/// Rule::new(r"^[A-Za-z0-9_]+", MK_RUN_HANDLER!(TokenKind::Identifier))
/// ```
#[macro_export]
macro_rules! MK_RUN_HANDLER {
    ($kind:expr) => {
        |lexer, regex| {
            let start = lexer.position();
            let len = regex
                .find(lexer.remainder())
                .map_or(0, |matched| matched.as_str().chars().count());
            lexer.advance_n(len);
            lexer.push_from(start, $kind);
            Ok(())
        }
    };
}
