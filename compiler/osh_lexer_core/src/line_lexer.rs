//! Stateful reader over one line.
//!
//! [`LineLexer`] tracks a position in a [`SourceLine`] and reads one token
//! at a time, with the mode chosen per call by the parser. It adds the
//! conveniences a recursive-descent parser needs on top of the matcher:
//! peeking past blanks, backing up one byte, and iterating a whole line in
//! a single mode.

use crate::matcher::resolve;
use crate::{LexMode, RuleTables, SourceLine, TokenId};

/// Byte range `start..end` within a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(self) -> bool {
        self.start >= self.end
    }
}

/// A token read from a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub id: TokenId,
    pub span: Span,
}

const _: () = assert!(std::mem::size_of::<Token>() <= 24);

impl Token {
    /// The token's bytes in `line`, which must be the line it was read from.
    pub fn text<'l>(&self, line: &'l SourceLine) -> &'l [u8] {
        line.slice(self.span).unwrap_or_default()
    }

    /// `true` for the zero-width token returned at end of line or where no
    /// rule applies.
    pub fn is_fallback(&self) -> bool {
        self.span.is_empty()
    }
}

/// Reads tokens from one line, one call at a time.
#[derive(Clone, Debug)]
pub struct LineLexer<'a> {
    tables: &'a RuleTables,
    line: &'a SourceLine,
    /// Invariant: `pos <= line.len()`.
    pos: usize,
}

impl<'a> LineLexer<'a> {
    pub fn new(tables: &'a RuleTables, line: &'a SourceLine) -> Self {
        Self {
            tables,
            line,
            pos: 0,
        }
    }

    pub fn line(&self) -> &'a SourceLine {
        self.line
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos == self.line.len()
    }

    /// Read the token at the current position and advance past it.
    ///
    /// At end of line (or on a byte no rule accepts) this returns the
    /// mode's fallback with an empty span and does not advance.
    pub fn read(&mut self, mode: LexMode) -> Token {
        let start = self.pos;
        let m = resolve(self.tables.table(mode), self.line.as_bytes(), start);
        self.pos = m.end;
        Token {
            id: m.id,
            span: Span::new(start, m.end),
        }
    }

    /// The id of the next non-blank token, without consuming anything.
    ///
    /// Returns `Unknown_Tok` at end of line. Used to decide between parses
    /// such as `f ()` (function definition) and `f (` (syntax error).
    pub fn look_ahead(&self, mode: LexMode) -> TokenId {
        let table = self.tables.table(mode);
        let bytes = self.line.as_bytes();
        let mut pos = self.pos;
        loop {
            if pos == bytes.len() {
                return TokenId::UnknownTok;
            }
            let m = resolve(table, bytes, pos);
            if m.id != TokenId::WsSpace || m.end == pos {
                return m.id;
            }
            pos = m.end;
        }
    }

    /// Step back one byte, so the last byte read is read again (possibly in
    /// a different mode). Returns `false` at the start of the line.
    pub fn maybe_unread_one(&mut self) -> bool {
        if self.pos == 0 {
            false
        } else {
            self.pos -= 1;
            true
        }
    }

    /// Every token from the current position, all in `mode`, stopping
    /// before the first zero-width fallback.
    pub fn tokens(&mut self, mode: LexMode) -> Tokens<'_, 'a> {
        Tokens { lexer: self, mode }
    }
}

/// Iterator returned by [`LineLexer::tokens`].
#[derive(Debug)]
pub struct Tokens<'l, 'a> {
    lexer: &'l mut LineLexer<'a>,
    mode: LexMode,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.lexer.read(self.mode);
        (!tok.is_fallback()).then_some(tok)
    }
}

#[cfg(test)]
mod tests;
