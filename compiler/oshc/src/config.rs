//! Command-line option parsing for the driver commands.

use osh_lexer_core::LexMode;

use crate::CliError;

/// Options for `oshc lex-file`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexFileOptions {
    /// Mode every line is lexed in.
    pub mode: LexMode,
    /// Print a per-kind token histogram after the token listing.
    pub stats: bool,
    /// Lex lines on the rayon thread pool.
    pub parallel: bool,
}

impl Default for LexFileOptions {
    fn default() -> Self {
        Self {
            mode: LexMode::ShCommand,
            stats: false,
            parallel: false,
        }
    }
}

impl LexFileOptions {
    /// Parse the flags that follow the file path.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = Self::default();
        for arg in args {
            if let Some(mode) = arg.strip_prefix("--mode=") {
                options.mode = parse_mode(mode)?;
            } else if arg == "--stats" {
                options.stats = true;
            } else if arg == "--parallel" {
                options.parallel = true;
            } else {
                return Err(CliError::UnknownOption(arg.clone()));
            }
        }
        Ok(options)
    }
}

/// Parse a mode name, ignoring case.
pub fn parse_mode(name: &str) -> Result<LexMode, CliError> {
    Ok(name.parse::<LexMode>()?)
}

/// Parse a start position argument.
pub fn parse_start(arg: &str) -> Result<usize, CliError> {
    arg.parse::<usize>()
        .map_err(|_| CliError::InvalidStart(arg.to_owned()))
}
