use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{
                END_OF_INPUT, describe, expect_statement_end, peek_is, peek_sequence,
                skip_separators,
            },
        },
    },
};

/// The construct a block belongs to, which decides where it stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEnd {
    /// The top level, closed by `KTHXBYE`.
    Program,
    /// A function body, closed by `IF U SAY SO`.
    Function,
    /// A loop body, closed by `IM OUTTA YR`.
    Cycle,
    /// A conditional branch, closed by `MEBBE`, `NO WAI` or `OIC`.
    Branch,
}

impl BlockEnd {
    /// The closing keyword, as shown in error messages.
    const fn keyword(self) -> &'static str {
        match self {
            Self::Program => "KTHXBYE",
            Self::Function => "IF U SAY SO",
            Self::Cycle => "IM OUTTA YR",
            Self::Branch => "OIC",
        }
    }
}

/// Parses statements until the closing keyword of `end` is reached.
///
/// The closing keyword itself is not consumed. Every statement must be
/// followed by a line break, a comma or the end of input; empty lines are
/// skipped.
///
/// Grammar: `block := (separator* statement separator)* separator*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the block.
/// - `end`: The construct being parsed.
///
/// # Returns
/// The statements of the block, in source order.
///
/// # Errors
/// - `ExpectedKeyword` if the input ends before the closing keyword.
/// - Propagates any errors from statement parsing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, end: BlockEnd) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);

        if tokens.peek().is_none() {
            return Err(ParseError::ExpectedKeyword { expected: end.keyword(),
                                                     found:    describe(None),
                                                     line:     END_OF_INPUT, });
        }
        if at_block_end(tokens, end) {
            break;
        }
        if let Some((Token::Kthxbye, line)) = tokens.peek() {
            return Err(ParseError::ExpectedKeyword { expected: end.keyword(),
                                                     found:    "KTHXBYE".to_string(),
                                                     line:     *line, });
        }

        statements.push(parse_statement(tokens)?);
        expect_statement_end(tokens)?;
    }

    Ok(statements)
}

fn at_block_end<'a, I>(tokens: &mut Peekable<I>, end: BlockEnd) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match end {
        BlockEnd::Program => peek_is(tokens, &Token::Kthxbye),
        BlockEnd::Function => peek_sequence(tokens, &[Token::If, Token::U, Token::Say, Token::So]),
        BlockEnd::Cycle => peek_sequence(tokens, &[Token::Im, Token::Outta, Token::Yr]),
        BlockEnd::Branch => {
            peek_is(tokens, &Token::Mebbe)
            || peek_is(tokens, &Token::Oic)
            || peek_sequence(tokens, &[Token::No, Token::Wai])
        },
    }
}
