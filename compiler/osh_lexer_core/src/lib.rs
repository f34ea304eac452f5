//! Mode-driven token matcher for the shell grammar.
//!
//! This crate answers one question for a parser: *given a lexing mode, a
//! line and a position, which token starts there and where does it end?*
//!
//! # Architecture
//!
//! ```text
//! parser ─▶ one_token / LineLexer ─▶ Matcher ─▶ RuleTables[mode] ─▶ (id, end)
//! ```
//!
//! - [`RuleTables`] hold one ordered `(pattern, id)` list per [`LexMode`],
//!   built once with [`RuleTables::osh`] (or the builder for custom
//!   grammars) and shared by reference.
//! - [`Matcher`] applies longest-match with declaration-order tie-break and
//!   returns a zero-width fallback where nothing matches.
//! - [`one_token`] and [`LineLexer`] are the line-level conveniences.
//!
//! Matching is pure and synchronous; the tables are `Send + Sync`.
//!
//! ```
//! use osh_lexer_core::{one_token, LexMode, RuleTables, SourceLine, TokenId};
//!
//! let tables = RuleTables::osh();
//! let line = SourceLine::new("echo hi");
//! let tok = one_token(&tables, LexMode::ShCommand, &line, 0).unwrap();
//! assert_eq!(tok.id, TokenId::LitChars);
//! assert_eq!(tok.end, 4);
//! ```

mod byte_set;
mod error;
mod id;
mod line;
mod line_lexer;
mod matcher;
mod mode;
pub mod pattern;
mod query;
mod rules;

pub use byte_set::ByteSet;
pub use error::{MatchError, RuleTableError};
pub use id::{Kind, TokenId};
pub use line::SourceLine;
pub use line_lexer::{LineLexer, Span, Token, Tokens};
pub use matcher::{MatchResult, Matcher};
pub use mode::LexMode;
pub use query::one_token;
pub use rules::{is_valid_var_name, ModeTable, Rule, RuleTables, RuleTablesBuilder};

/// Byte classes used by the shell tables, for building custom rules.
pub mod classes {
    pub use crate::byte_set::{
        BLANK, DIGIT, HEX, NAME_CONT, NAME_START, NOT_NUL, NOT_NUL_OR_NEWLINE, OCTAL,
    };
}

#[cfg(test)]
mod properties;
