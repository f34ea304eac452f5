//! Property tests for the matcher over the shell tables.

use proptest::prelude::*;

use crate::{LexMode, LineLexer, Matcher, RuleTables, SourceLine, TokenId};

fn any_mode() -> impl Strategy<Value = LexMode> {
    (0..LexMode::COUNT).prop_map(|i| LexMode::ALL[i])
}

/// Bytes weighted toward shell syntax, so that operators and quotes
/// actually appear next to each other.
fn shellish_line() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![
            4 => prop::sample::select(b"abcxyz019_".to_vec()),
            4 => prop::sample::select(b" \t\n$`\"'\\{}()[]<>|&;#=~@*?!%/:-+,".to_vec()),
            1 => any::<u8>(),
        ],
        0..48,
    )
}

proptest! {
    #[test]
    fn result_stays_in_bounds(
        mode in any_mode(),
        bytes in shellish_line(),
        start_frac in 0.0f64..=1.0,
    ) {
        let tables = RuleTables::osh();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss,
            reason = "fraction of a short test line"
        )]
        let start = (bytes.len() as f64 * start_frac) as usize;
        let m = Matcher::new(&tables).match_token(mode, &bytes, bytes.len(), start);
        prop_assert!(m.is_ok());
        if let Ok(m) = m {
            prop_assert!(start <= m.end && m.end <= bytes.len());
        }
    }

    #[test]
    fn matching_is_deterministic(mode in any_mode(), bytes in shellish_line()) {
        let tables = RuleTables::osh();
        let other = RuleTables::osh();
        for start in 0..=bytes.len() {
            let a = Matcher::new(&tables).match_token(mode, &bytes, bytes.len(), start);
            let b = Matcher::new(&other).match_token(mode, &bytes, bytes.len(), start);
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn progress_or_fallback(mode in any_mode(), bytes in shellish_line()) {
        let tables = RuleTables::osh();
        let fallback = tables.table(mode).fallback();
        for start in 0..=bytes.len() {
            let m = Matcher::new(&tables).match_token(mode, &bytes, bytes.len(), start);
            prop_assert!(m.is_ok());
            if let Ok(m) = m {
                prop_assert!(m.end > start || m.id == fallback);
                // The built-in tables only fall back at end of line or NUL.
                if m.end == start {
                    prop_assert!(start == bytes.len() || bytes[start] == 0);
                }
            }
        }
    }

    #[test]
    fn truncated_view_never_reads_past_len(
        mode in any_mode(),
        bytes in shellish_line(),
        cut in 0usize..48,
    ) {
        let tables = RuleTables::osh();
        let len = cut.min(bytes.len());
        let m = Matcher::new(&tables);
        for start in 0..=len {
            let full_buffer = m.match_token(mode, &bytes, len, start);
            let exact = m.match_token(mode, &bytes[..len], len, start);
            prop_assert_eq!(full_buffer, exact);
        }
    }

    #[test]
    fn line_lexer_tiles_up_to_first_nul(bytes in shellish_line()) {
        let tables = RuleTables::osh();
        let line = SourceLine::from(bytes.clone());
        let mut lexer = LineLexer::new(&tables, &line);
        let mut pos = 0;
        for tok in lexer.tokens(LexMode::ShCommand) {
            prop_assert_eq!(tok.span.start, pos);
            prop_assert_ne!(tok.id, TokenId::EolTok);
            pos = tok.span.end;
        }
        let stop = line.nul_positions().next().unwrap_or(line.len());
        prop_assert_eq!(pos, stop);
    }
}
