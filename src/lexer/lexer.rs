use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_RUN_HANDLER, MK_TOKEN,
};

use super::{
    scanner::Scanner,
    tokens::{Token, TokenKind},
};

pub type RuleHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

/// One entry of the rule table. `regex` is anchored at the cursor and only
/// decides whether the rule applies; `handler` does the consuming.
pub struct Rule {
    regex: Regex,
    handler: RuleHandler,
}

impl Rule {
    fn new(pattern: &str, handler: RuleHandler) -> Rule {
        Rule {
            regex: Regex::new(pattern).expect("lexer rule pattern must compile"),
            handler,
        }
    }
}

lazy_static! {
    /// Tried top to bottom, first match wins. Two-character tokens must stay
    /// above any rule matching their first character.
    static ref RULES: Vec<Rule> = vec![
        Rule::new(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        Rule::new(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        Rule::new(r"^\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        Rule::new(r"^\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        Rule::new(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        Rule::new(r"^//", line_comment_handler),
        Rule::new(r"^/\*", block_comment_handler),
        Rule::new(r"^->", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->")),
        Rule::new(r"^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        Rule::new(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Equals, "=")),
        Rule::new(r"^&", MK_DEFAULT_HANDLER!(TokenKind::And, "&")),
        Rule::new(r"^\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "|")),
        Rule::new(r"^\n", MK_DEFAULT_HANDLER!(TokenKind::Newline, "\n")),
        Rule::new(r"^[A-Za-z0-9_]+", MK_RUN_HANDLER!(TokenKind::Identifier)),
        // any whitespace except the newline, which is its own token
        Rule::new(r"^[^\S\n]+", MK_RUN_HANDLER!(TokenKind::Whitespace)),
    ];
}

pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    tokens: Vec<Token>,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            scanner: Scanner::new(source),
            tokens: vec![],
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.scanner.advance(n);
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Emits a `kind` token covering everything from `start` to the cursor.
    pub fn push_from(&mut self, start: usize, kind: TokenKind) {
        let end = self.scanner.position();
        trace!(%kind, start, end, "token");

        let value = String::from(self.scanner.slice(start, end));
        let span = Span {
            start: self.position_at(start),
            end: self.position_at(end),
        };

        self.push(MK_TOKEN!(kind, value, span));
    }

    pub fn at(&self) -> Option<char> {
        self.scanner.current()
    }

    pub fn position(&self) -> usize {
        self.scanner.position()
    }

    pub fn remainder(&self) -> &'a str {
        self.scanner.remainder()
    }

    pub fn at_eof(&self) -> bool {
        self.scanner.is_finished()
    }

    fn position_at(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    fn error_here(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.position_at(self.position()))
    }
}

fn line_comment_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let start = lexer.position();
    lexer.scanner.consume_rest_of_line();
    lexer.push_from(start, TokenKind::Comment);
    Ok(())
}

fn block_comment_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let start = lexer.position();
    lexer.advance_n(2);

    loop {
        if lexer.at_eof() {
            return Err(lexer.error_here(ErrorImpl::UnterminatedBlockComment));
        }

        if lexer.scanner.matches_at("*/", 0) {
            lexer.advance_n(2);
            break;
        }

        lexer.advance_n(1);
    }

    lexer.push_from(start, TokenKind::BlockComment);
    Ok(())
}

/// Splits `source` into tokens covering every byte of it, in order.
///
/// `file` only labels the positions; it defaults to `"shell"`. Fails on the
/// first character no rule accepts, or on a block comment that is never
/// closed. No tokens are returned on failure.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while let Some(character) = lex.at() {
        let rule = RULES
            .iter()
            .find(|rule| rule.regex.is_match(lex.remainder()));

        match rule {
            Some(rule) => (rule.handler)(&mut lex, &rule.regex)?,
            None => {
                return Err(lex.error_here(ErrorImpl::UnexpectedCharacter { character }));
            }
        }
    }

    debug!(file = %lex.file, tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
