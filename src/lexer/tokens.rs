use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Colon,

    Arrow,     // ->
    Equals,    // =
    NotEquals, // !=
    And,       // &
    Or,        // |

    Comment,      // // ...
    BlockComment, // /* ... */
    Newline,
    Whitespace,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified slice of the input. `value` is always the exact source text
/// covered by `span`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:?}) {}..{}",
            self.kind,
            self.value,
            self.start(),
            self.end()
        )
    }
}

impl Token {
    pub fn start(&self) -> usize {
        self.span.start.0 as usize
    }

    pub fn end(&self) -> usize {
        self.span.end.0 as usize
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Comments, whitespace and newlines: tokens a parser may step over.
    pub fn is_trivia(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Comment,
            TokenKind::BlockComment,
            TokenKind::Newline,
            TokenKind::Whitespace,
        ])
    }

    pub fn debug(&self) {
        println!("{}", self);
    }
}
