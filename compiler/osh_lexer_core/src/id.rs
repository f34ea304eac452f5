//! Token ids and their lexical kinds.
//!
//! `TokenId` is the closed set of tokens the rule tables can produce. Every id
//! belongs to exactly one [`Kind`]; parsers dispatch on the kind first (is
//! this a keyword, a redirect, a left substitution?) and on the id second.
//!
//! Names follow the `Kind_Name` convention (`Lit_Chars`, `Op_Newline`) so
//! that driver output and test failures read the same as the grammar notes.

use std::fmt;

/// Generates [`Kind`] and [`TokenId`] together so that every id is listed
/// exactly once, under the kind it belongs to.
macro_rules! define_token_ids {
    ($(
        $(#[$kind_meta:meta])*
        $kind:ident = $kind_name:literal {
            $( $id:ident => $name:literal ),+ $(,)?
        }
    )+) => {
        /// Lexical category of a [`TokenId`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Kind {
            $( $(#[$kind_meta])* $kind, )+
        }

        impl Kind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [Kind] = &[ $( Kind::$kind, )+ ];

            pub const fn name(self) -> &'static str {
                match self {
                    $( Kind::$kind => $kind_name, )+
                }
            }
        }

        /// A token produced by the rule tables.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum TokenId {
            $( $( $id, )+ )+
        }

        impl TokenId {
            /// Every id, grouped by kind.
            pub const ALL: &'static [TokenId] = &[ $( $( TokenId::$id, )+ )+ ];

            /// The lexical kind of this id.
            pub const fn kind(self) -> Kind {
                match self {
                    $( $( TokenId::$id )|+ => Kind::$kind, )+
                }
            }

            /// `Kind_Name` spelling, e.g. `Lit_Chars`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $( TokenId::$id => $name, )+ )+
                }
            }
        }
    };
}

define_token_ids! {
    /// Never produced by a table; a placeholder for "no token yet".
    Undefined = "Undefined" {
        UndefinedTok => "Undefined_Tok",
    }
    /// Bytes no rule in the mode accepts, consumed one at a time.
    Unknown = "Unknown" {
        UnknownTok => "Unknown_Tok",
        UnknownBackslash => "Unknown_Backslash",
    }
    /// End of the line (or a NUL byte, which ends the scannable content).
    Eol = "Eol" {
        EolTok => "Eol_Tok",
    }
    /// Trivia the parser skips.
    Ignored = "Ignored" {
        IgnoredLineCont => "Ignored_LineCont",
        IgnoredSpace => "Ignored_Space",
        IgnoredComment => "Ignored_Comment",
    }
    /// Significant whitespace: it separates words in command mode.
    Ws = "WS" {
        WsSpace => "WS_Space",
    }
    Lit = "Lit" {
        LitChars => "Lit_Chars",
        LitVarLike => "Lit_VarLike",
        LitArrayLhsOpen => "Lit_ArrayLhsOpen",
        LitOther => "Lit_Other",
        LitEscapedChar => "Lit_EscapedChar",
        LitLBrace => "Lit_LBrace",
        LitRBrace => "Lit_RBrace",
        LitComma => "Lit_Comma",
        LitTildeLike => "Lit_TildeLike",
        LitPound => "Lit_Pound",
        LitDigits => "Lit_Digits",
        LitAt => "Lit_At",
        LitArithVarLike => "Lit_ArithVarLike",
        LitDRightBracket => "Lit_DRightBracket",
        LitSlash => "Lit_Slash",
    }
    Op = "Op" {
        OpNewline => "Op_Newline",
        OpAmp => "Op_Amp",
        OpPipe => "Op_Pipe",
        OpPipeAmp => "Op_PipeAmp",
        OpDAmp => "Op_DAmp",
        OpDPipe => "Op_DPipe",
        OpSemi => "Op_Semi",
        OpDSemi => "Op_DSemi",
        OpLParen => "Op_LParen",
        OpRParen => "Op_RParen",
        OpDLeftParen => "Op_DLeftParen",
    }
    Redir = "Redir" {
        RedirLess => "Redir_Less",
        RedirGreat => "Redir_Great",
        RedirDLess => "Redir_DLess",
        RedirTLess => "Redir_TLess",
        RedirDGreat => "Redir_DGreat",
        RedirGreatAnd => "Redir_GreatAnd",
        RedirLessAnd => "Redir_LessAnd",
        RedirDLessDash => "Redir_DLessDash",
        RedirLessGreat => "Redir_LessGreat",
        RedirClobber => "Redir_Clobber",
        RedirAndGreat => "Redir_AndGreat",
        RedirAndDGreat => "Redir_AndDGreat",
    }
    /// Openers that push a new lexing context. The `Dq` variants are the
    /// same substitutions opened inside double quotes or a here-document,
    /// where their result is not subject to word splitting.
    Left = "Left" {
        LeftDoubleQuote => "Left_DoubleQuote",
        LeftSingleQuote => "Left_SingleQuote",
        LeftDollarDoubleQuote => "Left_DollarDoubleQuote",
        LeftDollarSingleQuote => "Left_DollarSingleQuote",
        LeftBacktick => "Left_Backtick",
        LeftCommandSub => "Left_CommandSub",
        LeftVarSub => "Left_VarSub",
        LeftArithSub => "Left_ArithSub",
        LeftArithSub2 => "Left_ArithSub2",
        LeftProcSubIn => "Left_ProcSubIn",
        LeftProcSubOut => "Left_ProcSubOut",
        LeftDqBacktick => "Left_DqBacktick",
        LeftDqCommandSub => "Left_DqCommandSub",
        LeftDqVarSub => "Left_DqVarSub",
        LeftDqArithSub => "Left_DqArithSub",
        LeftDqArithSub2 => "Left_DqArithSub2",
    }
    /// Closers that pop a lexing context.
    Right = "Right" {
        RightDoubleQuote => "Right_DoubleQuote",
        RightSingleQuote => "Right_SingleQuote",
        RightVarSub => "Right_VarSub",
    }
    Backtick = "Backtick" {
        BacktickRight => "Backtick_Right",
        BacktickQuoted => "Backtick_Quoted",
        BacktickOther => "Backtick_Other",
    }
    VSub = "VSub" {
        VSubDollarName => "VSub_DollarName",
        VSubName => "VSub_Name",
        VSubNumber => "VSub_Number",
        VSubBang => "VSub_Bang",
        VSubAt => "VSub_At",
        VSubPound => "VSub_Pound",
        VSubDollar => "VSub_Dollar",
        VSubStar => "VSub_Star",
        VSubHyphen => "VSub_Hyphen",
        VSubQMark => "VSub_QMark",
    }
    VTest = "VTest" {
        VTestColonHyphen => "VTest_ColonHyphen",
        VTestHyphen => "VTest_Hyphen",
        VTestColonEquals => "VTest_ColonEquals",
        VTestEquals => "VTest_Equals",
        VTestColonQMark => "VTest_ColonQMark",
        VTestQMark => "VTest_QMark",
        VTestColonPlus => "VTest_ColonPlus",
        VTestPlus => "VTest_Plus",
    }
    VOp1 = "VOp1" {
        VOp1Percent => "VOp1_Percent",
        VOp1DPercent => "VOp1_DPercent",
        VOp1Pound => "VOp1_Pound",
        VOp1DPound => "VOp1_DPound",
    }
    VOp2 = "VOp2" {
        VOp2Slash => "VOp2_Slash",
        VOp2Colon => "VOp2_Colon",
        VOp2LBracket => "VOp2_LBracket",
    }
    Arith = "Arith" {
        ArithPlus => "Arith_Plus",
        ArithMinus => "Arith_Minus",
        ArithStar => "Arith_Star",
        ArithSlash => "Arith_Slash",
        ArithPercent => "Arith_Percent",
        ArithDStar => "Arith_DStar",
        ArithDPlus => "Arith_DPlus",
        ArithDMinus => "Arith_DMinus",
        ArithLess => "Arith_Less",
        ArithGreat => "Arith_Great",
        ArithLessEqual => "Arith_LessEqual",
        ArithGreatEqual => "Arith_GreatEqual",
        ArithDEqual => "Arith_DEqual",
        ArithNEqual => "Arith_NEqual",
        ArithDAmp => "Arith_DAmp",
        ArithDPipe => "Arith_DPipe",
        ArithBang => "Arith_Bang",
        ArithAmp => "Arith_Amp",
        ArithPipe => "Arith_Pipe",
        ArithCaret => "Arith_Caret",
        ArithTilde => "Arith_Tilde",
        ArithDLess => "Arith_DLess",
        ArithDGreat => "Arith_DGreat",
        ArithEqual => "Arith_Equal",
        ArithPlusEqual => "Arith_PlusEqual",
        ArithMinusEqual => "Arith_MinusEqual",
        ArithStarEqual => "Arith_StarEqual",
        ArithSlashEqual => "Arith_SlashEqual",
        ArithPercentEqual => "Arith_PercentEqual",
        ArithDLessEqual => "Arith_DLessEqual",
        ArithDGreatEqual => "Arith_DGreatEqual",
        ArithAmpEqual => "Arith_AmpEqual",
        ArithPipeEqual => "Arith_PipeEqual",
        ArithCaretEqual => "Arith_CaretEqual",
        ArithQMark => "Arith_QMark",
        ArithColon => "Arith_Colon",
        ArithComma => "Arith_Comma",
        ArithSemi => "Arith_Semi",
        ArithLParen => "Arith_LParen",
        ArithRParen => "Arith_RParen",
        ArithLBracket => "Arith_LBracket",
        ArithRBracket => "Arith_RBracket",
        ArithRBrace => "Arith_RBrace",
    }
    /// Reserved words. Only recognized where a whole word matches exactly.
    Kw = "KW" {
        KwDLeftBracket => "KW_DLeftBracket",
        KwBang => "KW_Bang",
        KwFor => "KW_For",
        KwWhile => "KW_While",
        KwUntil => "KW_Until",
        KwDo => "KW_Do",
        KwDone => "KW_Done",
        KwIn => "KW_In",
        KwCase => "KW_Case",
        KwEsac => "KW_Esac",
        KwIf => "KW_If",
        KwFi => "KW_Fi",
        KwThen => "KW_Then",
        KwElse => "KW_Else",
        KwElif => "KW_Elif",
        KwFunction => "KW_Function",
        KwTime => "KW_Time",
    }
    /// Builtins that take assignment words as arguments.
    Assign = "Assign" {
        AssignDeclare => "Assign_Declare",
        AssignTypeset => "Assign_Typeset",
        AssignLocal => "Assign_Local",
        AssignReadonly => "Assign_Readonly",
        AssignExport => "Assign_Export",
    }
    ControlFlow = "ControlFlow" {
        ControlFlowBreak => "ControlFlow_Break",
        ControlFlowContinue => "ControlFlow_Continue",
        ControlFlowReturn => "ControlFlow_Return",
        ControlFlowExit => "ControlFlow_Exit",
    }
    ExtGlob = "ExtGlob" {
        ExtGlobAt => "ExtGlob_At",
        ExtGlobStar => "ExtGlob_Star",
        ExtGlobPlus => "ExtGlob_Plus",
        ExtGlobQMark => "ExtGlob_QMark",
        ExtGlobBang => "ExtGlob_Bang",
    }
    BoolUnary = "BoolUnary" {
        BoolUnaryZ => "BoolUnary_z",
        BoolUnaryN => "BoolUnary_n",
        BoolUnaryE => "BoolUnary_e",
        BoolUnaryF => "BoolUnary_f",
        BoolUnaryD => "BoolUnary_d",
        BoolUnaryR => "BoolUnary_r",
        BoolUnaryW => "BoolUnary_w",
        BoolUnaryX => "BoolUnary_x",
        BoolUnaryS => "BoolUnary_s",
        BoolUnaryL => "BoolUnary_L",
        BoolUnaryH => "BoolUnary_h",
        BoolUnaryT => "BoolUnary_t",
        BoolUnaryO => "BoolUnary_o",
        BoolUnaryV => "BoolUnary_v",
    }
    BoolBinary = "BoolBinary" {
        BoolBinaryEqual => "BoolBinary_Equal",
        BoolBinaryDEqual => "BoolBinary_DEqual",
        BoolBinaryNEqual => "BoolBinary_NEqual",
        BoolBinaryEqualTilde => "BoolBinary_EqualTilde",
        BoolBinaryStrLess => "BoolBinary_StrLess",
        BoolBinaryStrGreat => "BoolBinary_StrGreat",
        BoolBinaryEq => "BoolBinary_eq",
        BoolBinaryNe => "BoolBinary_ne",
        BoolBinaryLt => "BoolBinary_lt",
        BoolBinaryLe => "BoolBinary_le",
        BoolBinaryGt => "BoolBinary_gt",
        BoolBinaryGe => "BoolBinary_ge",
        BoolBinaryNt => "BoolBinary_nt",
        BoolBinaryOt => "BoolBinary_ot",
        BoolBinaryEf => "BoolBinary_ef",
    }
    /// Escapes inside `$'...'` strings.
    Char = "Char" {
        CharOneChar => "Char_OneChar",
        CharStop => "Char_Stop",
        CharHex => "Char_Hex",
        CharOctal => "Char_Octal",
        CharUnicode4 => "Char_Unicode4",
        CharUnicode8 => "Char_Unicode8",
    }
}

const _: () = assert!(std::mem::size_of::<TokenId>() == 2);

impl TokenId {
    /// Reserved words and the builtins a parser treats like them.
    pub const fn is_keyword_like(self) -> bool {
        matches!(self.kind(), Kind::Kw | Kind::Assign | Kind::ControlFlow)
    }

    /// Substitutions opened in a double-quoted context.
    pub const fn is_quoted_sub(self) -> bool {
        matches!(
            self,
            TokenId::LeftDqBacktick
                | TokenId::LeftDqCommandSub
                | TokenId::LeftDqVarSub
                | TokenId::LeftDqArithSub
                | TokenId::LeftDqArithSub2
        )
    }

    /// Trivia the parser can skip without changing meaning.
    pub const fn is_ignored(self) -> bool {
        matches!(self.kind(), Kind::Ignored)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
