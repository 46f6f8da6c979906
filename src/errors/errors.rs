use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexing failure together with where it happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at offset {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn offset(&self) -> usize {
        self.position.0 as usize
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedBlockComment => "UnterminatedBlockComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character: '!' } => {
                ErrorTip::Suggestion(String::from("`!` is only valid as part of `!=`"))
            }
            ErrorImpl::UnexpectedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unexpected character: {:?}", character))
            }
            ErrorImpl::UnterminatedBlockComment => ErrorTip::Suggestion(String::from(
                "Block comment is never closed, add a matching `*/`",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
}
