use pretty_assertions::assert_eq;

use super::*;

fn ids(lexer: &mut LineLexer<'_>, mode: LexMode) -> Vec<TokenId> {
    lexer.tokens(mode).map(|tok| tok.id).collect()
}

// === Reading ===

#[test]
fn read_advances_past_token() {
    let tables = RuleTables::osh();
    let line = SourceLine::new("echo hi");
    let mut lexer = LineLexer::new(&tables, &line);

    let tok = lexer.read(LexMode::ShCommand);
    assert_eq!(tok.id, TokenId::LitChars);
    assert_eq!(tok.span, Span::new(0, 4));
    assert_eq!(tok.text(&line), b"echo");
    assert_eq!(lexer.pos(), 4);
}

#[test]
fn read_at_end_does_not_advance() {
    let tables = RuleTables::osh();
    let line = SourceLine::new("x");
    let mut lexer = LineLexer::new(&tables, &line);
    lexer.read(LexMode::ShCommand);
    assert!(lexer.at_end());

    let tok = lexer.read(LexMode::ShCommand);
    assert_eq!(tok.id, TokenId::EolTok);
    assert!(tok.is_fallback());
    assert_eq!(lexer.pos(), 1);
}

#[test]
fn mode_can_change_between_reads() {
    let tables = RuleTables::osh();
    let line = SourceLine::new("echo \"$x\"");
    let mut lexer = LineLexer::new(&tables, &line);

    assert_eq!(lexer.read(LexMode::ShCommand).id, TokenId::LitChars);
    assert_eq!(lexer.read(LexMode::ShCommand).id, TokenId::WsSpace);
    assert_eq!(lexer.read(LexMode::ShCommand).id, TokenId::LeftDoubleQuote);
    assert_eq!(lexer.read(LexMode::DQ).id, TokenId::VSubDollarName);
    assert_eq!(lexer.read(LexMode::DQ).id, TokenId::RightDoubleQuote);
    assert!(lexer.at_end());
}

// === Look-ahead ===

#[test]
fn look_ahead_skips_blanks_without_consuming() {
    let tables = RuleTables::osh();
    let line = SourceLine::new("f   ()");
    let mut lexer = LineLexer::new(&tables, &line);
    lexer.read(LexMode::ShCommand);

    assert_eq!(lexer.look_ahead(LexMode::ShCommand), TokenId::OpLParen);
    assert_eq!(lexer.pos(), 1);
}

#[test]
fn look_ahead_at_end_is_unknown() {
    let tables = RuleTables::osh();
    let line = SourceLine::new("f  ");
    let mut lexer = LineLexer::new(&tables, &line);
    lexer.read(LexMode::ShCommand);
    assert_eq!(lexer.look_ahead(LexMode::ShCommand), TokenId::UnknownTok);
}

#[test]
fn look_ahead_stops_at_nul() {
    let tables = RuleTables::osh();
    let line = SourceLine::from_bytes(b" \0");
    let lexer = LineLexer::new(&tables, &line);
    assert_eq!(lexer.look_ahead(LexMode::ShCommand), TokenId::EolTok);
}

// === Unread ===

#[test]
fn unread_one_steps_back_a_byte() {
    let tables = RuleTables::osh();
    let line = SourceLine::new("${x}");
    let mut lexer = LineLexer::new(&tables, &line);

    assert!(!lexer.maybe_unread_one());
    assert_eq!(lexer.read(LexMode::ShCommand).id, TokenId::LeftVarSub);
    assert!(lexer.maybe_unread_one());
    assert_eq!(lexer.pos(), 1);
}

// === Iteration ===

#[test]
fn tokens_iterates_to_end_of_line() {
    let tables = RuleTables::osh();
    let line = SourceLine::new("ls -l | wc\n");
    let mut lexer = LineLexer::new(&tables, &line);
    assert_eq!(
        ids(&mut lexer, LexMode::ShCommand),
        vec![
            TokenId::LitChars,
            TokenId::WsSpace,
            TokenId::LitChars,
            TokenId::WsSpace,
            TokenId::OpPipe,
            TokenId::WsSpace,
            TokenId::LitChars,
            TokenId::OpNewline,
        ]
    );
    assert!(lexer.at_end());
}

#[test]
fn tokens_stop_before_nul() {
    let tables = RuleTables::osh();
    let line = SourceLine::from_bytes(b"ab\0cd");
    let mut lexer = LineLexer::new(&tables, &line);
    assert_eq!(ids(&mut lexer, LexMode::ShCommand), vec![TokenId::LitChars]);
    assert_eq!(lexer.pos(), 2);
}

#[test]
fn spans_tile_the_line() {
    let tables = RuleTables::osh();
    let line = SourceLine::new("for i in 1 2; do echo $i; done");
    let mut lexer = LineLexer::new(&tables, &line);
    let mut expected_start = 0;
    for tok in lexer.tokens(LexMode::ShCommand) {
        assert_eq!(tok.span.start, expected_start);
        assert!(!tok.span.is_empty());
        expected_start = tok.span.end;
    }
    assert_eq!(expected_start, line.len());
}

#[test]
fn span_len() {
    assert_eq!(Span::new(2, 5).len(), 3);
    assert!(Span::new(4, 4).is_empty());
    assert!(Span::default().is_empty());
}

#[test]
fn inverted_span_is_empty() {
    let span = Span { start: 5, end: 3 };
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
}

#[test]
fn tokens_can_be_held_and_resumed() {
    let tables = RuleTables::osh();
    let line = SourceLine::new("echo 'hi'");
    let mut lexer = LineLexer::new(&tables, &line);
    let mut tokens: Tokens<'_, '_> = lexer.tokens(LexMode::ShCommand);
    assert_eq!(tokens.next().map(|t| t.id), Some(TokenId::LitChars));
    assert_eq!(tokens.next().map(|t| t.id), Some(TokenId::WsSpace));
    assert_eq!(lexer.pos(), 5);
    assert_eq!(lexer.read(LexMode::ShCommand).id, TokenId::LeftSingleQuote);
    assert_eq!(
        ids(&mut lexer, LexMode::SQ),
        vec![TokenId::LitChars, TokenId::RightSingleQuote]
    );
    assert!(lexer.at_end());
}
