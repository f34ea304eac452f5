//! Single-token query over a [`SourceLine`].
//!
//! This is the entry point parsers use: it derives the byte view from the
//! line and returns the matcher's `(id, end)` pair as one owned value that
//! does not borrow the line.

use crate::{LexMode, MatchError, MatchResult, Matcher, RuleTables, SourceLine};

/// The token that starts at `start` in `line`, lexed under `mode`.
///
/// # Errors
///
/// [`MatchError::StartOutOfRange`] if `start > line.len()`.
pub fn one_token(
    tables: &RuleTables,
    mode: LexMode,
    line: &SourceLine,
    start: usize,
) -> Result<MatchResult, MatchError> {
    Matcher::new(tables).one_token(mode, line, start)
}

impl Matcher<'_> {
    /// See [`one_token`].
    pub fn one_token(
        &self,
        mode: LexMode,
        line: &SourceLine,
        start: usize,
    ) -> Result<MatchResult, MatchError> {
        self.match_token(mode, line.as_bytes(), line.len(), start)
    }
}
