//! Driver errors.

use std::io;
use std::path::PathBuf;

use osh_lexer_core::MatchError;
use thiserror::Error;

/// Anything that makes a driver command fail. Reported on stderr, exit 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("cannot read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Writing command output failed (closed pipe, full disk).
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error("invalid start position '{0}': expected a non-negative integer")]
    InvalidStart(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}
