//! Rule tables for the shell grammar.
//!
//! Each mode's table is assembled from shared fragments (backslash escapes,
//! left substitutions, special variables, ...) in a fixed order. Order only
//! matters for exact-length ties: keywords precede the generic word rule, so
//! `for` is `KW_For` while `format` is `Lit_Chars`; word-separating blanks
//! precede the one-byte catch-all.
//!
//! Every non-NUL byte is accepted by some rule in every mode, so the
//! fallback (`Eol_Tok` throughout) is only produced at end of line or on an
//! interior NUL byte.

use crate::byte_set::{
    ByteSet, BLANK, DIGIT, HEX, NAME_CONT, NAME_START, NOT_NUL, NOT_NUL_OR_NEWLINE, OCTAL,
};
use crate::pattern::{byte, class, lit, plus, repeat, seq, star, Pattern};
use crate::rules::{ModeTable, RuleTables};
use crate::{LexMode, TokenId as T};

type Fragment = Vec<(Pattern, T)>;

/// Unquoted word characters: `[a-zA-Z0-9_/.-]`.
const LIT_CHARS: ByteSet = NAME_CONT.union(ByteSet::from_bytes(b"/.-"));

/// Characters of a `~user` prefix.
const TILDE_USER: ByteSet = NAME_CONT.union(ByteSet::from_bytes(b".-"));

/// Returns `true` if `name` is a valid shell variable name.
pub fn is_valid_var_name(name: &[u8]) -> bool {
    match name.split_first() {
        Some((&first, rest)) => NAME_START.contains(first) && rest.iter().all(|&b| NAME_CONT.contains(b)),
        None => false,
    }
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`
fn name() -> Pattern {
    seq([class(NAME_START), star(NAME_CONT)])
}

fn fixed(items: &[(&str, T)]) -> Fragment {
    items.iter().map(|&(text, id)| (lit(text), id)).collect()
}

// ─── Fragments ──────────────────────────────────────────────────────────

fn unquoted_backslash() -> Fragment {
    vec![
        (seq([byte(b'\\'), class(NOT_NUL_OR_NEWLINE)]), T::LitEscapedChar),
        (lit("\\\n"), T::IgnoredLineCont),
    ]
}

/// Inside double quotes only `$`, `` ` ``, `"` and `\` can be escaped.
fn dq_backslash() -> Fragment {
    vec![
        (
            seq([byte(b'\\'), class(ByteSet::from_bytes(b"$`\"\\"))]),
            T::LitEscapedChar,
        ),
        (lit("\\\n"), T::IgnoredLineCont),
    ]
}

fn left_subs() -> Fragment {
    fixed(&[
        ("`", T::LeftBacktick),
        ("$(", T::LeftCommandSub),
        ("${", T::LeftVarSub),
        ("$((", T::LeftArithSub),
        ("$[", T::LeftArithSub2),
    ])
}

fn dq_left_subs() -> Fragment {
    fixed(&[
        ("`", T::LeftDqBacktick),
        ("$(", T::LeftDqCommandSub),
        ("${", T::LeftDqVarSub),
        ("$((", T::LeftDqArithSub),
        ("$[", T::LeftDqArithSub2),
    ])
}

fn left_quotes() -> Fragment {
    fixed(&[
        ("\"", T::LeftDoubleQuote),
        ("'", T::LeftSingleQuote),
        ("$\"", T::LeftDollarDoubleQuote),
        ("$'", T::LeftDollarSingleQuote),
        ("<(", T::LeftProcSubIn),
        (">(", T::LeftProcSubOut),
    ])
}

fn vars() -> Fragment {
    let mut rules = vec![
        (seq([byte(b'$'), name()]), T::VSubDollarName),
        (seq([byte(b'$'), class(DIGIT)]), T::VSubNumber),
    ];
    rules.extend(fixed(&[
        ("$!", T::VSubBang),
        ("$@", T::VSubAt),
        ("$#", T::VSubPound),
        ("$$", T::VSubDollar),
        ("$*", T::VSubStar),
        ("$-", T::VSubHyphen),
        ("$?", T::VSubQMark),
    ]));
    rules
}

fn ext_glob_openers() -> Fragment {
    fixed(&[
        ("@(", T::ExtGlobAt),
        ("*(", T::ExtGlobStar),
        ("+(", T::ExtGlobPlus),
        ("?(", T::ExtGlobQMark),
        ("!(", T::ExtGlobBang),
    ])
}

fn keywords() -> Fragment {
    fixed(&[
        ("[[", T::KwDLeftBracket),
        ("!", T::KwBang),
        ("for", T::KwFor),
        ("while", T::KwWhile),
        ("until", T::KwUntil),
        ("do", T::KwDo),
        ("done", T::KwDone),
        ("in", T::KwIn),
        ("case", T::KwCase),
        ("esac", T::KwEsac),
        ("if", T::KwIf),
        ("fi", T::KwFi),
        ("then", T::KwThen),
        ("else", T::KwElse),
        ("elif", T::KwElif),
        ("function", T::KwFunction),
        ("time", T::KwTime),
        ("declare", T::AssignDeclare),
        ("typeset", T::AssignTypeset),
        ("local", T::AssignLocal),
        ("readonly", T::AssignReadonly),
        ("export", T::AssignExport),
        ("break", T::ControlFlowBreak),
        ("continue", T::ControlFlowContinue),
        ("return", T::ControlFlowReturn),
        ("exit", T::ControlFlowExit),
    ])
}

/// Parts of an unquoted word, without the catch-all.
///
/// `#` is always `Lit_Pound`. Whether it starts a comment depends on its
/// position in the word, so the caller re-reads it in `Comment` mode.
fn word_parts() -> Fragment {
    let mut rules = unquoted_backslash();
    rules.extend(left_subs());
    rules.extend(left_quotes());
    rules.extend(vars());
    rules.push((plus(LIT_CHARS), T::LitChars));
    rules.push((lit("#"), T::LitPound));
    rules
}

/// Word parts plus extended-glob openers. Regexes are lexed without the
/// openers, since `a+(b)` is a regex there and not a glob.
fn unquoted_word() -> Fragment {
    let mut rules = word_parts();
    rules.extend(ext_glob_openers());
    rules
}

fn redirects() -> Fragment {
    // An optional file descriptor number prefixes the operator: `2>&1`.
    let with_fd = |op: &str, id: T| (seq([star(DIGIT), lit(op)]), id);
    vec![
        with_fd("<", T::RedirLess),
        with_fd(">", T::RedirGreat),
        with_fd("<<", T::RedirDLess),
        with_fd("<<<", T::RedirTLess),
        with_fd(">>", T::RedirDGreat),
        with_fd(">&", T::RedirGreatAnd),
        with_fd("<&", T::RedirLessAnd),
        with_fd("<<-", T::RedirDLessDash),
        with_fd("<>", T::RedirLessGreat),
        with_fd(">|", T::RedirClobber),
        (lit("&>"), T::RedirAndGreat),
        (lit("&>>"), T::RedirAndDGreat),
    ]
}

// ─── Mode tables ────────────────────────────────────────────────────────

fn sh_command() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rule(lit("\n"), T::OpNewline)
        .rules_from(fixed(&[
            ("&", T::OpAmp),
            ("|", T::OpPipe),
            ("|&", T::OpPipeAmp),
            ("&&", T::OpDAmp),
            ("||", T::OpDPipe),
            (";", T::OpSemi),
            (";;", T::OpDSemi),
            ("(", T::OpLParen),
            (")", T::OpRParen),
            ("((", T::OpDLeftParen),
        ]))
        .rules_from(redirects())
        .rule(seq([name(), lit("=")]), T::LitVarLike)
        .rule(seq([name(), lit("+=")]), T::LitVarLike)
        .rule(seq([name(), lit("[")]), T::LitArrayLhsOpen)
        .rules_from(fixed(&[
            ("{", T::LitLBrace),
            ("}", T::LitRBrace),
            (",", T::LitComma),
        ]))
        .rule(seq([lit("~"), star(TILDE_USER)]), T::LitTildeLike)
        .rules_from(keywords())
        .rules_from(unquoted_word())
        .rule(plus(BLANK), T::WsSpace)
        .rule(class(NOT_NUL), T::LitOther)
}

fn comment() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rule(plus(NOT_NUL_OR_NEWLINE), T::IgnoredComment)
        .rule(lit("\n"), T::OpNewline)
}

fn backtick() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rule(lit("`"), T::BacktickRight)
        .rule(
            seq([byte(b'\\'), class(ByteSet::from_bytes(b"$`\\"))]),
            T::BacktickQuoted,
        )
        .rule(plus(ByteSet::none_of(b"`\\\0")), T::BacktickOther)
        .rule(class(NOT_NUL), T::BacktickOther)
}

fn dbracket() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rule(lit("]]"), T::LitDRightBracket)
        .rules_from(fixed(&[
            ("!", T::KwBang),
            ("(", T::OpLParen),
            (")", T::OpRParen),
            ("&&", T::OpDAmp),
            ("||", T::OpDPipe),
            ("\n", T::OpNewline),
            ("-z", T::BoolUnaryZ),
            ("-n", T::BoolUnaryN),
            ("-e", T::BoolUnaryE),
            ("-f", T::BoolUnaryF),
            ("-d", T::BoolUnaryD),
            ("-r", T::BoolUnaryR),
            ("-w", T::BoolUnaryW),
            ("-x", T::BoolUnaryX),
            ("-s", T::BoolUnaryS),
            ("-L", T::BoolUnaryL),
            ("-h", T::BoolUnaryH),
            ("-t", T::BoolUnaryT),
            ("-o", T::BoolUnaryO),
            ("-v", T::BoolUnaryV),
            ("=", T::BoolBinaryEqual),
            ("==", T::BoolBinaryDEqual),
            ("!=", T::BoolBinaryNEqual),
            ("=~", T::BoolBinaryEqualTilde),
            ("<", T::BoolBinaryStrLess),
            (">", T::BoolBinaryStrGreat),
            ("-eq", T::BoolBinaryEq),
            ("-ne", T::BoolBinaryNe),
            ("-lt", T::BoolBinaryLt),
            ("-le", T::BoolBinaryLe),
            ("-gt", T::BoolBinaryGt),
            ("-ge", T::BoolBinaryGe),
            ("-nt", T::BoolBinaryNt),
            ("-ot", T::BoolBinaryOt),
            ("-ef", T::BoolBinaryEf),
        ]))
        .rules_from(unquoted_word())
        .rule(plus(BLANK), T::WsSpace)
        .rule(class(NOT_NUL), T::LitOther)
}

fn single_quoted() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rule(plus(ByteSet::none_of(b"'\0")), T::LitChars)
        .rule(lit("'"), T::RightSingleQuote)
}

fn double_quoted() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rules_from(dq_backslash())
        .rules_from(dq_left_subs())
        .rules_from(vars())
        .rule(plus(ByteSet::none_of(b"$`\"\\\0")), T::LitChars)
        .rule(lit("\""), T::RightDoubleQuote)
        .rule(class(NOT_NUL), T::LitOther)
}

fn dollar_single_quoted() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rule(
            seq([byte(b'\\'), class(ByteSet::from_bytes(b"abeEfnrtv\\'\"?"))]),
            T::CharOneChar,
        )
        .rule(lit("\\c"), T::CharStop)
        .rule(
            seq([lit("\\x"), repeat(class(HEX), 1, Some(2))]),
            T::CharHex,
        )
        .rule(
            seq([byte(b'\\'), repeat(class(OCTAL), 1, Some(3))]),
            T::CharOctal,
        )
        .rule(
            seq([lit("\\u"), repeat(class(HEX), 1, Some(4))]),
            T::CharUnicode4,
        )
        .rule(
            seq([lit("\\U"), repeat(class(HEX), 1, Some(8))]),
            T::CharUnicode8,
        )
        .rule(plus(ByteSet::none_of(b"'\\\0")), T::LitChars)
        .rule(lit("'"), T::RightSingleQuote)
        .rule(seq([byte(b'\\'), class(NOT_NUL)]), T::UnknownBackslash)
        .rule(byte(b'\\'), T::UnknownBackslash)
}

fn arith() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rule(plus(ByteSet::from_bytes(b" \t\r\n")), T::IgnoredSpace)
        .rule(lit("\\\n"), T::IgnoredLineCont)
        .rule(name(), T::LitArithVarLike)
        // Decimal, hex (0x1F) and based (16#ff) literals are one token each.
        .rule(seq([class(DIGIT), star(NAME_CONT)]), T::LitDigits)
        .rule(
            seq([plus(DIGIT), lit("#"), plus(NAME_CONT.with(b'@'))]),
            T::LitDigits,
        )
        .rules_from(fixed(&[
            ("@", T::LitAt),
            ("#", T::LitPound),
            ("+", T::ArithPlus),
            ("-", T::ArithMinus),
            ("*", T::ArithStar),
            ("/", T::ArithSlash),
            ("%", T::ArithPercent),
            ("**", T::ArithDStar),
            ("++", T::ArithDPlus),
            ("--", T::ArithDMinus),
            ("<", T::ArithLess),
            (">", T::ArithGreat),
            ("<=", T::ArithLessEqual),
            (">=", T::ArithGreatEqual),
            ("==", T::ArithDEqual),
            ("!=", T::ArithNEqual),
            ("&&", T::ArithDAmp),
            ("||", T::ArithDPipe),
            ("!", T::ArithBang),
            ("&", T::ArithAmp),
            ("|", T::ArithPipe),
            ("^", T::ArithCaret),
            ("~", T::ArithTilde),
            ("<<", T::ArithDLess),
            (">>", T::ArithDGreat),
            ("=", T::ArithEqual),
            ("+=", T::ArithPlusEqual),
            ("-=", T::ArithMinusEqual),
            ("*=", T::ArithStarEqual),
            ("/=", T::ArithSlashEqual),
            ("%=", T::ArithPercentEqual),
            ("<<=", T::ArithDLessEqual),
            (">>=", T::ArithDGreatEqual),
            ("&=", T::ArithAmpEqual),
            ("|=", T::ArithPipeEqual),
            ("^=", T::ArithCaretEqual),
            ("?", T::ArithQMark),
            (":", T::ArithColon),
            (",", T::ArithComma),
            (";", T::ArithSemi),
            ("(", T::ArithLParen),
            (")", T::ArithRParen),
            ("[", T::ArithLBracket),
            ("]", T::ArithRBracket),
            ("}", T::ArithRBrace),
            ("\"", T::LeftDoubleQuote),
        ]))
        .rules_from(left_subs())
        .rules_from(vars())
        .rule(class(NOT_NUL), T::UnknownTok)
}

fn ext_glob() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rules_from(unquoted_word())
        .rule(lit("|"), T::OpPipe)
        .rule(lit(")"), T::OpRParen)
        .rule(class(NOT_NUL), T::LitOther)
}

fn vsub_name() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rule(name(), T::VSubName)
        .rule(plus(DIGIT), T::VSubNumber)
        .rules_from(fixed(&[
            ("!", T::VSubBang),
            ("@", T::VSubAt),
            ("#", T::VSubPound),
            ("$", T::VSubDollar),
            ("*", T::VSubStar),
            ("-", T::VSubHyphen),
            ("?", T::VSubQMark),
            ("}", T::RightVarSub),
            ("\\\n", T::IgnoredLineCont),
        ]))
        .rule(class(NOT_NUL), T::UnknownTok)
}

fn vsub_op() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rules_from(fixed(&[
            (":-", T::VTestColonHyphen),
            ("-", T::VTestHyphen),
            (":=", T::VTestColonEquals),
            ("=", T::VTestEquals),
            (":?", T::VTestColonQMark),
            ("?", T::VTestQMark),
            (":+", T::VTestColonPlus),
            ("+", T::VTestPlus),
            ("%", T::VOp1Percent),
            ("%%", T::VOp1DPercent),
            ("#", T::VOp1Pound),
            ("##", T::VOp1DPound),
            ("/", T::VOp2Slash),
            (":", T::VOp2Colon),
            ("[", T::VOp2LBracket),
            ("}", T::RightVarSub),
            ("\\\n", T::IgnoredLineCont),
        ]))
        .rule(class(NOT_NUL), T::UnknownTok)
}

fn vsub_arg_unquoted() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rules_from(unquoted_backslash())
        .rules_from(left_subs())
        .rules_from(left_quotes())
        .rules_from(vars())
        .rule(plus(ByteSet::none_of(b"\\$`\"'}/<>\0")), T::LitChars)
        .rule(lit("/"), T::LitSlash)
        .rule(lit("}"), T::RightVarSub)
        .rule(class(NOT_NUL), T::LitOther)
}

fn vsub_arg_dq() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rules_from(dq_backslash())
        .rules_from(dq_left_subs())
        .rules_from(vars())
        .rule(plus(ByteSet::none_of(b"\\$`\"}/\0")), T::LitChars)
        .rule(lit("/"), T::LitSlash)
        .rule(lit("}"), T::RightVarSub)
        // Quotes nest: "${x:-"default"}"
        .rule(lit("\""), T::LeftDoubleQuote)
        .rule(class(NOT_NUL), T::LitOther)
}

fn bash_regex() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rules_from(word_parts())
        .rule(plus(BLANK), T::WsSpace)
        .rule(lit("\n"), T::OpNewline)
        .rule(class(NOT_NUL), T::LitOther)
}

/// Unquoted here-document bodies: like double quotes, except that `"` is
/// an ordinary character and cannot be escaped.
fn here_doc() -> ModeTable {
    ModeTable::new(T::EolTok)
        .rule(
            seq([byte(b'\\'), class(ByteSet::from_bytes(b"$`\\"))]),
            T::LitEscapedChar,
        )
        .rule(lit("\\\n"), T::IgnoredLineCont)
        .rules_from(dq_left_subs())
        .rules_from(vars())
        .rule(plus(ByteSet::none_of(b"$`\\\0")), T::LitChars)
        .rule(class(NOT_NUL), T::LitOther)
}

impl RuleTables {
    /// The shell grammar's tables, one per [`LexMode`].
    ///
    /// Build once at startup and share by reference; construction compiles
    /// every pattern and computes each rule's first-byte filter.
    pub fn osh() -> Self {
        let tables = [
            (LexMode::ShCommand, sh_command()),
            (LexMode::Comment, comment()),
            (LexMode::Backtick, backtick()),
            (LexMode::DBracket, dbracket()),
            (LexMode::SQ, single_quoted()),
            (LexMode::DQ, double_quoted()),
            (LexMode::DollarSQ, dollar_single_quoted()),
            (LexMode::Arith, arith()),
            (LexMode::ExtGlob, ext_glob()),
            (LexMode::VSub1, vsub_name()),
            (LexMode::VSub2, vsub_op()),
            (LexMode::VSubArgUnquoted, vsub_arg_unquoted()),
            (LexMode::VSubArgDQ, vsub_arg_dq()),
            (LexMode::BashRegex, bash_regex()),
            (LexMode::HereDoc, here_doc()),
        ];
        let builder = tables
            .into_iter()
            .fold(RuleTables::builder(), |b, (mode, table)| b.mode(mode, table));
        match builder.build() {
            Ok(tables) => tables,
            // The shell tables register every mode once and contain no
            // empty-only rules; a failure here is a bug in this file.
            Err(err) => unreachable!("shell rule tables are malformed: {err}"),
        }
    }
}
