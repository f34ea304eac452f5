//! Mode-dispatch matcher.
//!
//! Given a mode, a byte view and a start position, returns the id of the
//! token that begins there and the position just past it. Resolution:
//!
//! 1. Among rules matching a non-empty prefix at `start`, the longest wins.
//! 2. Exact-length ties go to the rule declared first.
//! 3. If nothing matches (including `start == len`), the mode's fallback id
//!    is returned with `end == start`.
//!
//! Matching runs over `&buffer[..len]`, so no rule can see past the logical
//! end of the line. The matcher has no state and performs no I/O.

use crate::rules::{ModeTable, RuleTables};
use crate::{LexMode, MatchError, TokenId};

/// The token found at a start position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchResult {
    pub id: TokenId,
    /// One past the last byte of the token. Equal to the start position for
    /// a zero-width fallback.
    pub end: usize,
}

const _: () = assert!(std::mem::size_of::<MatchResult>() <= 16);

/// Matches single tokens against a set of rule tables.
///
/// `Matcher` is a borrowed handle and is [`Copy`]; create one per thread or
/// share it freely.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'t> {
    tables: &'t RuleTables,
}

impl<'t> Matcher<'t> {
    pub fn new(tables: &'t RuleTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t RuleTables {
        self.tables
    }

    /// Match one token starting at `start` in `buffer[..len]`.
    ///
    /// # Errors
    ///
    /// [`MatchError::LengthExceedsBuffer`] if `len > buffer.len()`, and
    /// [`MatchError::StartOutOfRange`] if `start > len`. Finding no token is
    /// not an error.
    pub fn match_token(
        &self,
        mode: LexMode,
        buffer: &[u8],
        len: usize,
        start: usize,
    ) -> Result<MatchResult, MatchError> {
        let input = buffer.get(..len).ok_or(MatchError::LengthExceedsBuffer {
            len,
            capacity: buffer.len(),
        })?;
        if start > len {
            return Err(MatchError::StartOutOfRange { start, len });
        }
        Ok(resolve(self.tables.table(mode), input, start))
    }

    /// [`match_token`](Self::match_token) for callers holding an untyped
    /// mode tag and a signed position.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidMode`] for an unknown tag and
    /// [`MatchError::NegativeStart`] for `start < 0`, in addition to the
    /// errors of `match_token`.
    pub fn match_raw(
        &self,
        mode_tag: u8,
        buffer: &[u8],
        len: usize,
        start: i64,
    ) -> Result<MatchResult, MatchError> {
        let mode = LexMode::try_from(mode_tag)?;
        if start < 0 {
            return Err(MatchError::NegativeStart(start));
        }
        // Positions beyond the address space are out of range for any line.
        let start = usize::try_from(start).unwrap_or(usize::MAX);
        self.match_token(mode, buffer, len, start)
    }
}

/// Resolve the token at `start` under `table`.
///
/// `start` may equal `input.len()`; no rule matches there.
#[inline]
pub(crate) fn resolve(table: &ModeTable, input: &[u8], start: usize) -> MatchResult {
    let mut best = MatchResult {
        id: table.fallback(),
        end: start,
    };
    for rule in table.rules() {
        if let Some(end) = rule.longest(input, start) {
            // Strictly longer only: earlier rules keep exact-length ties.
            if end > best.end {
                best = MatchResult { id: rule.id(), end };
            }
        }
    }
    best
}
