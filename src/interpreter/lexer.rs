use logos::{FilterResult, Logos};

/// Represents a lexical token in the source input.
///
/// Keywords are lexed one word at a time; multi-word keywords such as
/// `I HAS A` or `IM OUTTA YR` are recognised by the parser from consecutive
/// word tokens. Every keyword word is reserved and cannot be used as an
/// identifier.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Float literal tokens, such as `3.14`, `-2.0` or `.5`.
    #[regex(r"-?[0-9]*\.[0-9]+", parse_float)]
    NumbarLit(f64),
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", parse_integer)]
    NumbrLit(i64),
    /// String literal tokens. The quotes are stripped; `:` sequences are
    /// kept verbatim, and `:"` does not end the literal.
    #[regex(r#""([^"\n:]|:[^\n])*""#, parse_string)]
    YarnLit(String),
    /// `WIN` or `FAIL`.
    #[token("WIN", |_| true)]
    #[token("FAIL", |_| false)]
    TroofLit(bool),
    /// `HAI`
    #[token("HAI")]
    Hai,
    /// `KTHXBYE`
    #[token("KTHXBYE")]
    Kthxbye,
    /// `I`
    #[token("I", priority = 3)]
    I,
    /// `HAS`
    #[token("HAS")]
    Has,
    /// `A`
    #[token("A", priority = 3)]
    A,
    /// `ITZ`
    #[token("ITZ")]
    Itz,
    /// `R`
    #[token("R", priority = 3)]
    R,
    /// `IS`
    #[token("IS")]
    Is,
    /// `NOW`
    #[token("NOW")]
    Now,
    /// `IM`
    #[token("IM")]
    Im,
    /// `IN`
    #[token("IN")]
    In,
    /// `OUTTA`
    #[token("OUTTA")]
    Outta,
    /// `YR`
    #[token("YR")]
    Yr,
    /// `GTFO`
    #[token("GTFO")]
    Gtfo,
    /// `FOUND`
    #[token("FOUND")]
    Found,
    /// `HOW`
    #[token("HOW")]
    How,
    /// `IZ`
    #[token("IZ")]
    Iz,
    /// `IF`
    #[token("IF")]
    If,
    /// `U`
    #[token("U", priority = 3)]
    U,
    /// `SAY`
    #[token("SAY")]
    Say,
    /// `SO`
    #[token("SO")]
    So,
    /// `MKAY`
    #[token("MKAY")]
    Mkay,
    /// `AN`
    #[token("AN")]
    An,
    /// `O`
    #[token("O", priority = 3)]
    O,
    /// `RLY`
    #[token("RLY")]
    Rly,
    /// `YA`
    #[token("YA")]
    Ya,
    /// `NO`
    #[token("NO")]
    No,
    /// `WAI`
    #[token("WAI")]
    Wai,
    /// `MEBBE`
    #[token("MEBBE")]
    Mebbe,
    /// `OIC`
    #[token("OIC")]
    Oic,
    /// `VISIBLE`
    #[token("VISIBLE")]
    Visible,
    /// `GIMMEH`
    #[token("GIMMEH")]
    Gimmeh,
    /// `SUM`
    #[token("SUM")]
    Sum,
    /// `DIFF`
    #[token("DIFF")]
    Diff,
    /// `PRODUKT`
    #[token("PRODUKT")]
    Produkt,
    /// `QUOSHUNT`
    #[token("QUOSHUNT")]
    Quoshunt,
    /// `MOD`
    #[token("MOD")]
    Mod,
    /// `BIGGR`
    #[token("BIGGR")]
    Biggr,
    /// `SMALLR`
    #[token("SMALLR")]
    Smallr,
    /// `OF`
    #[token("OF")]
    Of,
    /// `BOTH`
    #[token("BOTH")]
    Both,
    /// `SAEM`
    #[token("SAEM")]
    Saem,
    /// `EITHER`
    #[token("EITHER")]
    Either,
    /// `WON`
    #[token("WON")]
    Won,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// `ALL`
    #[token("ALL")]
    All,
    /// `ANY`
    #[token("ANY")]
    Any,
    /// `DIFFRINT`
    #[token("DIFFRINT")]
    Diffrint,
    /// `SMOOSH`
    #[token("SMOOSH")]
    Smoosh,
    /// `MAEK`
    #[token("MAEK")]
    Maek,
    /// `IT`
    #[token("IT")]
    It,
    /// `NOOB`, both the literal and the type name.
    #[token("NOOB")]
    Noob,
    /// `TROOF`
    #[token("TROOF")]
    Troof,
    /// `NUMBR`
    #[token("NUMBR")]
    Numbr,
    /// `NUMBAR`
    #[token("NUMBAR")]
    Numbar,
    /// `YARN`
    #[token("YARN")]
    Yarn,
    /// Identifier tokens; variable, function or loop label names.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `?`
    #[token("?")]
    Question,
    /// `!`
    #[token("!")]
    Bang,
    /// `,`, a statement separator equivalent to a line break.
    #[token(",")]
    Comma,
    /// `BTW` comments run to the end of the line.
    #[regex(r"BTW([ \t][^\n]*)?", logos::skip)]
    Comment,
    /// `OBTW ... TLDR` comments may span several lines.
    #[token("OBTW", skip_block_comment)]
    BlockComment,
    /// `...` at the end of a line joins it with the next one.
    #[regex(r"\.\.\.[ \t]*\r?\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Continuation,
    /// Line breaks separate statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for tokens that end a statement.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::NewLine | Self::Comma)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// Literals that do not fit in an `i64` are rejected as invalid tokens.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Skips an `OBTW` comment up to and including the closing `TLDR`.
///
/// Newlines inside the comment still advance the line counter. A comment
/// without `TLDR` is a lexing error.
fn skip_block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), ()> {
    const TERMINATOR: &str = "TLDR";

    let remainder = lex.remainder();
    let Some(end) = remainder.find(TERMINATOR) else {
        return FilterResult::Error(());
    };
    let newlines = remainder[..end].matches('\n').count();

    lex.bump(end + TERMINATOR.len());
    lex.extras.line += newlines;
    FilterResult::Skip
}
