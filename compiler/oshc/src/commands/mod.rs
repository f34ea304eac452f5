//! Command handlers for the `oshc` driver.
//!
//! Every handler writes its report to `out` and returns an error instead
//! of exiting, so `main` owns process exit codes and tests can capture
//! output in a `Vec<u8>`.

use std::io::Write;
use std::path::Path;

use osh_lexer_core::{one_token, Kind, LexMode, LineLexer, RuleTables, SourceLine, Token};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::config::LexFileOptions;
use crate::CliError;

/// `oshc token <mode> <line> [start]`: match one token and print its id and
/// end position.
pub fn token(
    out: &mut impl Write,
    tables: &RuleTables,
    mode: LexMode,
    line: &str,
    start: usize,
) -> Result<(), CliError> {
    let line = SourceLine::new(line);
    let m = one_token(tables, mode, &line, start)?;
    writeln!(out, "id = {}", m.id)?;
    writeln!(out, "end_pos = {}", m.end)?;
    Ok(())
}

/// `oshc lex <mode> <line>`: print every token of one line, all read in
/// `mode`.
pub fn lex(
    out: &mut impl Write,
    tables: &RuleTables,
    mode: LexMode,
    line: &str,
) -> Result<(), CliError> {
    let line = SourceLine::new(line);
    let mut lexer = LineLexer::new(tables, &line);
    let tokens: Vec<Token> = lexer.tokens(mode).collect();
    let stopped_at = (!lexer.at_end()).then(|| lexer.pos());

    writeln!(out, "Tokens in mode {mode} ({} tokens):", tokens.len())?;
    for tok in &tokens {
        writeln!(
            out,
            "  {} @ {}..{} {:?}",
            tok.id,
            tok.span.start,
            tok.span.end,
            String::from_utf8_lossy(tok.text(&line))
        )?;
    }
    if let Some(pos) = stopped_at {
        writeln!(out, "  stopped at byte {pos}: no rule matches")?;
    }
    Ok(())
}

/// Tokens of one line of a file.
struct LexedLine {
    tokens: Vec<Token>,
    /// Where lexing stopped short of the end of the line (a NUL byte).
    stopped_at: Option<usize>,
}

fn lex_line(tables: &RuleTables, mode: LexMode, line: &SourceLine) -> LexedLine {
    let mut lexer = LineLexer::new(tables, line);
    let tokens = lexer.tokens(mode).collect();
    let stopped_at = (!lexer.at_end()).then(|| lexer.pos());
    LexedLine { tokens, stopped_at }
}

/// Split file contents into lines, keeping each line's `\n`.
pub fn split_lines(content: &[u8]) -> Vec<SourceLine> {
    content
        .split_inclusive(|&b| b == b'\n')
        .map(SourceLine::from_bytes)
        .collect()
}

/// `oshc lex-file <path>`: lex every line of a file in one mode.
#[tracing::instrument(level = "debug", skip(out, tables, options), fields(mode = %options.mode))]
pub fn lex_file(
    out: &mut impl Write,
    tables: &RuleTables,
    path: &Path,
    options: &LexFileOptions,
) -> Result<(), CliError> {
    let content = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&content);
    tracing::debug!(lines = lines.len(), bytes = content.len(), "read file");

    let lex_one = |line: &SourceLine| lex_line(tables, options.mode, line);
    let lexed: Vec<LexedLine> = if options.parallel {
        lines.par_iter().map(lex_one).collect()
    } else {
        lines.iter().map(lex_one).collect()
    };

    let total: usize = lexed.iter().map(|l| l.tokens.len()).sum();
    writeln!(
        out,
        "Tokens for '{}' ({} tokens, {} lines, mode {}):",
        path.display(),
        total,
        lines.len(),
        options.mode
    )?;
    for (line_no, (line, lexed)) in lines.iter().zip(&lexed).enumerate() {
        for tok in &lexed.tokens {
            writeln!(
                out,
                "  {}:{}..{} {} {:?}",
                line_no + 1,
                tok.span.start,
                tok.span.end,
                tok.id,
                String::from_utf8_lossy(tok.text(line))
            )?;
        }
        if let Some(pos) = lexed.stopped_at {
            tracing::warn!(line = line_no + 1, pos, "lexing stopped at a NUL byte");
            writeln!(out, "  {}:{} stopped: no rule matches", line_no + 1, pos)?;
        }
    }

    if options.stats {
        write_histogram(out, &lexed)?;
    }
    tracing::debug!(
        tokens = total,
        stopped = stopped_lines(&lexed),
        "lexed file"
    );
    Ok(())
}

fn stopped_lines(lexed: &[LexedLine]) -> usize {
    lexed.iter().filter(|l| l.stopped_at.is_some()).count()
}

fn write_histogram(out: &mut impl Write, lexed: &[LexedLine]) -> Result<(), CliError> {
    let mut counts: FxHashMap<Kind, usize> = FxHashMap::default();
    for tok in lexed.iter().flat_map(|l| &l.tokens) {
        *counts.entry(tok.id.kind()).or_default() += 1;
    }
    let mut counts: Vec<(Kind, usize)> = counts.into_iter().collect();
    // Most frequent first; kind order breaks ties so output is stable.
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    writeln!(out, "Token kinds:")?;
    for (kind, count) in counts {
        writeln!(out, "  {:<12} {}", kind.name(), count)?;
    }
    Ok(())
}

/// `oshc modes`: list every mode with its rule count and fallback id.
pub fn modes(out: &mut impl Write, tables: &RuleTables) -> Result<(), CliError> {
    writeln!(out, "Lex modes ({}):", LexMode::COUNT)?;
    for mode in LexMode::ALL {
        let table = tables.table(mode);
        writeln!(
            out,
            "  {:>2}  {:<16} {:>3} rules  fallback = {}",
            mode.index(),
            mode.name(),
            table.len(),
            table.fallback()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
