//! Shared, immutable line storage.
//!
//! The lexer works one line at a time. A [`SourceLine`] owns the line's bytes
//! behind an `Arc`, so tokens, parser nodes and worker threads can hold the
//! same line without copying it. Bytes are stored exactly as given; there is
//! no transcoding and no terminator handling (a trailing `\n`, if present,
//! is part of the line and lexes as `Op_Newline`).

use std::fmt;
use std::sync::Arc;

use crate::line_lexer::Span;

/// One line of shell source.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SourceLine {
    bytes: Arc<[u8]>,
}

impl SourceLine {
    pub fn new(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }

    /// The line's bytes, exactly as stored.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The bytes covered by `span`, or `None` if it does not lie within the
    /// line.
    pub fn slice(&self, span: Span) -> Option<&[u8]> {
        self.bytes.get(span.start..span.end)
    }

    /// Positions of NUL bytes inside the line.
    ///
    /// No rule accepts NUL, so the matcher stops at each of these with a
    /// zero-width fallback. Callers that want to report them do so here.
    pub fn nul_positions(&self) -> impl Iterator<Item = usize> + '_ {
        memchr::memchr_iter(0, &self.bytes)
    }

    /// `true` if the line contains at least one NUL byte.
    pub fn has_nul(&self) -> bool {
        memchr::memchr(0, &self.bytes).is_some()
    }
}

impl fmt::Debug for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SourceLine")
            .field(&String::from_utf8_lossy(&self.bytes))
            .finish()
    }
}

impl From<&str> for SourceLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceLine {
    fn from(text: String) -> Self {
        Self::from(text.into_bytes())
    }
}

impl From<&[u8]> for SourceLine {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for SourceLine {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }
}

#[cfg(test)]
mod tests;
