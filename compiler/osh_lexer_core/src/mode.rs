//! Lexing modes.
//!
//! The parser picks a mode for every call based on the syntactic context it
//! is in; the mode selects which rule table governs the next token. The same
//! bytes lex differently per mode: `$(` opens a command substitution in
//! [`LexMode::ShCommand`] and [`LexMode::DQ`] but is plain text in
//! [`LexMode::SQ`].

use std::fmt;
use std::str::FromStr;

use crate::MatchError;

/// The active lexical context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(
    clippy::upper_case_acronyms,
    reason = "SQ/DQ are the established names of the quoting contexts"
)]
pub enum LexMode {
    /// Top-level command words, operators and redirects.
    ShCommand = 0,
    /// The remainder of a `#` comment.
    Comment = 1,
    /// Inside `` `...` ``.
    Backtick = 2,
    /// Inside `[[ ... ]]`.
    DBracket = 3,
    /// Inside `'...'`.
    SQ = 4,
    /// Inside `"..."`.
    DQ = 5,
    /// Inside `$'...'`.
    DollarSQ = 6,
    /// Inside `$(( ... ))` and `(( ... ))`.
    Arith = 7,
    /// Inside `@( ... )` and friends.
    ExtGlob = 8,
    /// Right after `${`: the variable name.
    VSub1 = 9,
    /// After the name in `${name...}`: the operator.
    VSub2 = 10,
    /// Operator argument in an unquoted `${x:-arg}`.
    VSubArgUnquoted = 11,
    /// Operator argument in a double-quoted `"${x:-arg}"`.
    VSubArgDQ = 12,
    /// Right-hand side of `=~` in `[[ ]]`.
    BashRegex = 13,
    /// Body lines of an unquoted here-document.
    HereDoc = 14,
}

impl LexMode {
    /// Every mode, indexed by its discriminant.
    pub const ALL: [LexMode; 15] = [
        LexMode::ShCommand,
        LexMode::Comment,
        LexMode::Backtick,
        LexMode::DBracket,
        LexMode::SQ,
        LexMode::DQ,
        LexMode::DollarSQ,
        LexMode::Arith,
        LexMode::ExtGlob,
        LexMode::VSub1,
        LexMode::VSub2,
        LexMode::VSubArgUnquoted,
        LexMode::VSubArgDQ,
        LexMode::BashRegex,
        LexMode::HereDoc,
    ];

    /// Number of modes.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index, suitable for table lookup.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            LexMode::ShCommand => "ShCommand",
            LexMode::Comment => "Comment",
            LexMode::Backtick => "Backtick",
            LexMode::DBracket => "DBracket",
            LexMode::SQ => "SQ",
            LexMode::DQ => "DQ",
            LexMode::DollarSQ => "DollarSQ",
            LexMode::Arith => "Arith",
            LexMode::ExtGlob => "ExtGlob",
            LexMode::VSub1 => "VSub1",
            LexMode::VSub2 => "VSub2",
            LexMode::VSubArgUnquoted => "VSubArgUnquoted",
            LexMode::VSubArgDQ => "VSubArgDQ",
            LexMode::BashRegex => "BashRegex",
            LexMode::HereDoc => "HereDoc",
        }
    }
}

impl TryFrom<u8> for LexMode {
    type Error = MatchError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(MatchError::InvalidMode(tag))
    }
}

impl FromStr for LexMode {
    type Err = MatchError;

    /// Parses a mode name, ignoring ASCII case (`dq`, `ShCommand`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MatchError::UnknownModeName(s.to_owned()))
    }
}

impl fmt::Display for LexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
