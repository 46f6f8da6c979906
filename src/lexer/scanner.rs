//! Forward-only cursor over the raw source text.
//!
//! The scanner owns nothing but a byte position into a borrowed `&str`.
//! Lookahead offsets are counted in characters from the cursor, while the
//! position itself is a byte offset, so the cursor always rests on a
//! character boundary and slices taken between two positions are valid.

/// A single forward pass over `source`.
///
/// `None` is used as the end-marker by every lookahead method; asking for a
/// character past the end of the input is never an error.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner { source, pos: 0 }
    }

    /// Byte position of the character `offset` characters ahead of the cursor.
    ///
    /// One past the last character maps to `source.len()`, anything further
    /// maps to `None`.
    fn byte_offset(&self, offset: usize) -> Option<usize> {
        let rest = self.remainder();

        rest.char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(rest.len()))
            .nth(offset)
            .map(|i| self.pos + i)
    }

    /// Returns the character `offset` characters ahead of the cursor, or
    /// `None` when that position is at or past the end of the text.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.byte_offset(offset)
            .and_then(|i| self.source[i..].chars().next())
    }

    pub fn current(&self) -> Option<char> {
        self.char_at(0)
    }

    /// Moves the cursor forward by `n` characters and returns the character
    /// now under it. Stops at the end of the text.
    pub fn advance(&mut self, n: usize) -> Option<char> {
        for _ in 0..n {
            match self.current() {
                Some(c) => self.pos += c.len_utf8(),
                None => break,
            }
        }

        self.current()
    }

    /// True iff the text `offset` characters ahead of the cursor begins with
    /// `literal`.
    pub fn matches_at(&self, literal: &str, offset: usize) -> bool {
        self.byte_offset(offset)
            .is_some_and(|i| self.source[i..].starts_with(literal))
    }

    /// Consumes everything up to, but not including, the next `\n` (or the
    /// end of the text) and returns it.
    pub fn consume_rest_of_line(&mut self) -> &'a str {
        let rest = self.remainder();
        let len = rest.find('\n').unwrap_or(rest.len());

        self.pos += len;
        &rest[..len]
    }

    pub fn is_finished(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// The text between two byte positions previously reported by
    /// [`Scanner::position`].
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }
}
