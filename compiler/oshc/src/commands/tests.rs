use std::io::Write as _;

use pretty_assertions::assert_eq;

use super::*;
use osh_lexer_core::MatchError;

fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    if let Err(err) = run(&mut out) {
        panic!("command failed: {err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn script(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap_or_else(|e| panic!("temp file: {e}"));
    file.write_all(content)
        .unwrap_or_else(|e| panic!("write temp file: {e}"));
    file
}

// === token ===

#[test]
fn token_prints_id_and_end() {
    let tables = RuleTables::osh();
    let text = output(|out| token(out, &tables, LexMode::ShCommand, "echo hi", 0));
    assert_eq!(text, "id = Lit_Chars\nend_pos = 4\n");

    let text = output(|out| token(out, &tables, LexMode::ShCommand, "echo hi", 4));
    assert_eq!(text, "id = WS_Space\nend_pos = 5\n");
}

#[test]
fn token_at_end_of_line() {
    let tables = RuleTables::osh();
    let text = output(|out| token(out, &tables, LexMode::DQ, "ab", 2));
    assert_eq!(text, "id = Eol_Tok\nend_pos = 2\n");
}

#[test]
fn token_past_end_is_an_error() {
    let tables = RuleTables::osh();
    let mut out = Vec::new();
    let result = token(&mut out, &tables, LexMode::ShCommand, "ab", 3);
    assert!(matches!(
        result,
        Err(CliError::Match(MatchError::StartOutOfRange { start: 3, len: 2 }))
    ));
    assert!(out.is_empty());
}

// === lex ===

#[test]
fn lex_lists_tokens() {
    let tables = RuleTables::osh();
    let text = output(|out| lex(out, &tables, LexMode::ShCommand, "ls -l"));
    assert_eq!(
        text,
        "Tokens in mode ShCommand (3 tokens):\n\
         \x20 Lit_Chars @ 0..2 \"ls\"\n\
         \x20 WS_Space @ 2..3 \" \"\n\
         \x20 Lit_Chars @ 3..5 \"-l\"\n"
    );
}

// === lex-file ===

#[test]
fn lex_file_numbers_lines() {
    let tables = RuleTables::osh();
    let file = script(b"a\nb c\n");
    let text = output(|out| lex_file(out, &tables, file.path(), &LexFileOptions::default()));
    let body: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(
        body,
        vec![
            "  1:0..1 Lit_Chars \"a\"",
            "  1:1..2 Op_Newline \"\\n\"",
            "  2:0..1 Lit_Chars \"b\"",
            "  2:1..2 WS_Space \" \"",
            "  2:2..3 Lit_Chars \"c\"",
            "  2:3..4 Op_Newline \"\\n\"",
        ]
    );
    assert!(text.starts_with("Tokens for '"));
    assert!(text.lines().next().is_some_and(|h| h.ends_with("(6 tokens, 2 lines, mode ShCommand):")));
}

#[test]
fn parallel_and_sequential_agree() {
    let tables = RuleTables::osh();
    let mut content = Vec::new();
    for i in 0..200 {
        content.extend_from_slice(format!("for x{i} in a b; do echo \"$x{i}\"; done\n").as_bytes());
    }
    let file = script(&content);
    let sequential = output(|out| {
        lex_file(out, &tables, file.path(), &LexFileOptions::default())
    });
    let parallel = output(|out| {
        let options = LexFileOptions {
            parallel: true,
            ..LexFileOptions::default()
        };
        lex_file(out, &tables, file.path(), &options)
    });
    assert_eq!(sequential, parallel);
}

#[test]
fn stats_histogram_counts_kinds() {
    let tables = RuleTables::osh();
    let file = script(b"if x; then y; fi\n");
    let options = LexFileOptions {
        stats: true,
        ..LexFileOptions::default()
    };
    let text = output(|out| lex_file(out, &tables, file.path(), &options));
    let histogram: Vec<&str> = text
        .lines()
        .skip_while(|l| *l != "Token kinds:")
        .skip(1)
        .collect();
    let expected: Vec<String> = [("WS", 4), ("Op", 3), ("KW", 3), ("Lit", 2)]
        .iter()
        .map(|(kind, count)| format!("  {kind:<12} {count}"))
        .collect();
    assert_eq!(histogram, expected);
}

#[test]
fn nul_byte_is_reported() {
    let tables = RuleTables::osh();
    let file = script(b"ab\0cd\n");
    let text = output(|out| lex_file(out, &tables, file.path(), &LexFileOptions::default()));
    assert!(text.contains("  1:2 stopped: no rule matches"), "{text}");
}

#[test]
fn stopped_lines_counts_lines_cut_short() {
    let tables = RuleTables::osh();
    let lexed: Vec<LexedLine> = split_lines(b"ok\nab\0cd\n\0\nfine\n")
        .iter()
        .map(|line| lex_line(&tables, LexMode::ShCommand, line))
        .collect();
    assert_eq!(stopped_lines(&lexed), 2);
    assert_eq!(lexed[1].stopped_at, Some(2));
    assert_eq!(lexed[2].stopped_at, Some(0));
}

#[test]
fn missing_file_is_a_read_error() {
    let tables = RuleTables::osh();
    let mut out = Vec::new();
    let result = lex_file(
        &mut out,
        &tables,
        Path::new("/nonexistent/script.sh"),
        &LexFileOptions::default(),
    );
    assert!(matches!(result, Err(CliError::Read { .. })));
}

#[test]
fn split_lines_keeps_newlines() {
    let lines = split_lines(b"a\n\nb");
    let bytes: Vec<&[u8]> = lines.iter().map(SourceLine::as_bytes).collect();
    assert_eq!(bytes, vec![b"a\n".as_slice(), b"\n", b"b"]);
    assert!(split_lines(b"").is_empty());
}

// === modes ===

#[test]
fn modes_lists_every_mode() {
    let tables = RuleTables::osh();
    let text = output(|out| modes(out, &tables));
    assert_eq!(text.lines().count(), 1 + LexMode::COUNT);
    assert!(text.starts_with("Lex modes (15):\n"));
    for mode in LexMode::ALL {
        assert!(text.contains(mode.name()), "{mode} missing");
    }
    assert!(text.lines().skip(1).all(|l| l.ends_with("fallback = Eol_Tok")));
}
