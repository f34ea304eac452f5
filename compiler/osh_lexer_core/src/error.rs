//! Error types for matcher calls and rule table construction.
//!
//! Both enums describe contract violations by the caller. A position where no
//! rule matches is not an error: it yields the mode's fallback id with a
//! zero-width span.

use thiserror::Error;

use crate::{LexMode, TokenId};

/// A matcher call that violated its input contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// `start` lies past the logical end of the buffer.
    #[error("start position {start} is past the end of the line (length {len})")]
    StartOutOfRange { start: usize, len: usize },

    /// The logical length claims more bytes than the buffer holds.
    #[error("length {len} exceeds the buffer capacity of {capacity} bytes")]
    LengthExceedsBuffer { len: usize, capacity: usize },

    /// Raw callers passed a negative start position.
    #[error("start position {0} is negative")]
    NegativeStart(i64),

    /// Raw callers passed a mode tag outside the known modes.
    #[error("invalid lex mode tag {0}")]
    InvalidMode(u8),

    /// A mode name that does not name any [`LexMode`].
    #[error("unknown lex mode `{0}`")]
    UnknownModeName(String),
}

/// A rule table set that cannot be used for matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleTableError {
    /// Every mode must have a table before the set is usable.
    #[error("no rule table registered for mode {0}")]
    MissingMode(LexMode),

    /// The same mode was registered twice.
    #[error("rule table for mode {0} registered more than once")]
    DuplicateMode(LexMode),

    /// A rule whose pattern cannot consume even a single byte.
    #[error("rule #{index} ({id}) in mode {mode} can never match a non-empty prefix")]
    NeverMatches {
        mode: LexMode,
        index: usize,
        id: TokenId,
    },
}
