//! Rule tables: per-mode ordered lists of `(pattern, id)` rules.
//!
//! A [`ModeTable`] is plain data: an ordered rule list plus the id returned
//! when nothing matches. [`RuleTables`] holds one table per [`LexMode`] and is
//! built once, up front, through [`RuleTables::builder`] (or
//! [`RuleTables::osh`] for the shell grammar). After construction the tables
//! are immutable and can be shared across threads by reference.

mod osh;

pub use osh::is_valid_var_name;

use crate::byte_set::ByteSet;
use crate::pattern::Pattern;
use crate::{LexMode, RuleTableError, TokenId};

/// One `(pattern, id)` association.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Pattern,
    id: TokenId,
    /// Bytes that can begin a non-empty match; computed once.
    first: ByteSet,
}

impl Rule {
    pub fn new(pattern: Pattern, id: TokenId) -> Self {
        let first = pattern.first_bytes();
        Self { pattern, id, first }
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// End of this rule's longest non-empty match at `start`, if any.
    #[inline]
    pub fn longest(&self, input: &[u8], start: usize) -> Option<usize> {
        match input.get(start) {
            Some(&b) if self.first.contains(b) => self.pattern.longest(input, start),
            _ => None,
        }
    }

    /// `true` if no input can make this rule consume a byte.
    fn never_matches(&self) -> bool {
        self.first.is_empty()
    }
}

/// The ordered rules of one mode, plus its designated fallback id.
#[derive(Clone, Debug)]
pub struct ModeTable {
    rules: Vec<Rule>,
    fallback: TokenId,
}

impl ModeTable {
    /// An empty table. `fallback` is returned, zero-width, wherever no rule
    /// matches, including at end of line.
    pub fn new(fallback: TokenId) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule. Later rules lose exact-length ties to earlier ones.
    #[must_use]
    pub fn rule(mut self, pattern: Pattern, id: TokenId) -> Self {
        self.rules.push(Rule::new(pattern, id));
        self
    }

    /// Append a group of rules, preserving their order.
    #[must_use]
    pub fn rules_from(mut self, rules: impl IntoIterator<Item = (Pattern, TokenId)>) -> Self {
        self.rules
            .extend(rules.into_iter().map(|(pattern, id)| Rule::new(pattern, id)));
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> TokenId {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One rule table per lexing mode.
#[derive(Clone, Debug)]
pub struct RuleTables {
    /// Indexed by [`LexMode::index`]; always `LexMode::COUNT` long.
    tables: Box<[ModeTable]>,
}

impl RuleTables {
    pub fn builder() -> RuleTablesBuilder {
        RuleTablesBuilder::default()
    }

    /// The table that governs `mode`.
    #[inline]
    pub fn table(&self, mode: LexMode) -> &ModeTable {
        &self.tables[mode.index()]
    }

    /// Total number of rules across all modes.
    pub fn rule_count(&self) -> usize {
        self.tables.iter().map(ModeTable::len).sum()
    }
}

/// Collects a table for every mode, then validates them together.
#[derive(Debug)]
pub struct RuleTablesBuilder {
    tables: [Option<ModeTable>; LexMode::COUNT],
    duplicate: Option<LexMode>,
}

impl Default for RuleTablesBuilder {
    fn default() -> Self {
        Self {
            tables: std::array::from_fn(|_| None),
            duplicate: None,
        }
    }
}

impl RuleTablesBuilder {
    /// Register the table for `mode`.
    #[must_use]
    pub fn mode(mut self, mode: LexMode, table: ModeTable) -> Self {
        let slot = &mut self.tables[mode.index()];
        if slot.is_some() && self.duplicate.is_none() {
            self.duplicate = Some(mode);
        }
        *slot = Some(table);
        self
    }

    /// Validate and freeze the tables.
    ///
    /// Fails if a mode was registered twice or not at all, or if any rule
    /// can never consume a byte (such a rule could only ever produce a
    /// zero-width match, which the matcher reserves for the fallback).
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(self) -> Result<RuleTables, RuleTableError> {
        if let Some(mode) = self.duplicate {
            return Err(RuleTableError::DuplicateMode(mode));
        }

        let mut tables = Vec::with_capacity(LexMode::COUNT);
        for (mode, slot) in LexMode::ALL.into_iter().zip(self.tables) {
            let table = slot.ok_or(RuleTableError::MissingMode(mode))?;
            if let Some((index, rule)) = table
                .rules
                .iter()
                .enumerate()
                .find(|(_, rule)| rule.never_matches())
            {
                return Err(RuleTableError::NeverMatches {
                    mode,
                    index,
                    id: rule.id,
                });
            }
            tracing::trace!(%mode, rules = table.len(), fallback = %table.fallback, "mode table");
            tables.push(table);
        }

        let tables = RuleTables {
            tables: tables.into_boxed_slice(),
        };
        tracing::debug!(rules = tables.rule_count(), "rule tables built");
        Ok(tables)
    }
}
