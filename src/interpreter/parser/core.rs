use std::iter::Peekable;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::{BlockEnd, parse_block},
            utils::{expect_keyword, expect_statement_end, skip_separators},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// Syntax:
/// ```text
///     HAI [version]
///     <statements>
///     KTHXBYE
/// ```
/// Line breaks and commas may surround the program. Nothing but separators
/// may follow `KTHXBYE`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// - `ExpectedKeyword` if `HAI` or `KTHXBYE` is missing.
/// - `UnexpectedTrailingTokens` if tokens follow `KTHXBYE`.
/// - Propagates any errors from statement parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    skip_separators(tokens);
    expect_keyword(tokens, &Token::Hai, "HAI")?;

    let version = match tokens.peek() {
        Some((Token::NumbarLit(v), _)) => Some(v.to_string()),
        Some((Token::NumbrLit(v), _)) => Some(v.to_string()),
        _ => None,
    };
    if version.is_some() {
        tokens.next();
    }
    expect_statement_end(tokens)?;

    let statements = parse_block(tokens, BlockEnd::Program)?;
    expect_keyword(tokens, &Token::Kthxbye, "KTHXBYE")?;

    skip_separators(tokens);
    if let Some((tok, line)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                          line:  *line, });
    }

    Ok(Program { version, statements })
}
