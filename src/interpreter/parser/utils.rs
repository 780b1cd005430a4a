use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult, value::types::Type},
};

/// Line attached to errors raised at the end of input. [`crate::parse`]
/// replaces it with the last line of the source.
pub(in crate::interpreter::parser) const END_OF_INPUT: usize = 0;

/// Describes the next token for error messages, or `end of input`.
pub(in crate::interpreter::parser) fn describe(next: Option<&(Token, usize)>) -> String {
    next.map_or_else(|| "end of input".to_string(), |(tok, _)| format!("{tok:?}"))
}

/// Returns the line of the next token, or [`END_OF_INPUT`].
pub(in crate::interpreter::parser) fn current_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(END_OF_INPUT, |(_, l)| *l)
}

/// Returns `true` if the next token equals `expected`. Nothing is consumed.
pub(in crate::interpreter::parser) fn peek_is<'a, I>(tokens: &mut Peekable<I>,
                                                     expected: &Token)
                                                     -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    matches!(tokens.peek(), Some((tok, _)) if tok == expected)
}

/// Returns `true` if the upcoming tokens spell out `sequence`, for example
/// `IM OUTTA YR`. Nothing is consumed.
pub(in crate::interpreter::parser) fn peek_sequence<'a, I>(tokens: &Peekable<I>,
                                                           sequence: &[Token])
                                                           -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    sequence.iter()
            .all(|expected| matches!(lookahead.next(), Some((tok, _)) if tok == expected))
}

/// Consumes a single keyword token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the keyword.
/// - `expected`: The token that must come next.
/// - `keyword`: How the keyword is spelled, for the error message.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns `ParseError::ExpectedKeyword` if a different token or the end of
/// input is found.
pub(in crate::interpreter::parser) fn expect_keyword<'a, I>(tokens: &mut Peekable<I>,
                                                            expected: &Token,
                                                            keyword: &'static str)
                                                            -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        next => Err(ParseError::ExpectedKeyword { expected: keyword,
                                                  found:    describe(next),
                                                  line:     next.map_or(END_OF_INPUT, |(_, l)| *l), }),
    }
}

/// Consumes a multi-word keyword such as `IF U SAY SO`.
///
/// # Returns
/// The line of the first word.
///
/// # Errors
/// Returns `ParseError::ExpectedKeyword` naming the whole keyword if any word
/// is missing.
pub(in crate::interpreter::parser) fn expect_keywords<'a, I>(tokens: &mut Peekable<I>,
                                                             sequence: &[Token],
                                                             keyword: &'static str)
                                                             -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = current_line(tokens);
    for expected in sequence {
        expect_keyword(tokens, expected, keyword)?;
    }
    Ok(line)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Keywords are lexed as their
/// own tokens and are therefore rejected here.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: END_OF_INPUT }),
    }
}

/// Parses a type keyword: `NOOB`, `TROOF`, `NUMBR`, `NUMBAR` or `YARN`.
///
/// # Errors
/// Returns a `ParseError` if the next token does not name a type.
pub(in crate::interpreter::parser) fn parse_type<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<Type>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Noob, _)) => Ok(Type::Noob),
        Some((Token::Troof, _)) => Ok(Type::Troof),
        Some((Token::Numbr, _)) => Ok(Type::Numbr),
        Some((Token::Numbar, _)) => Ok(Type::Numbar),
        Some((Token::Yarn, _)) => Ok(Type::Yarn),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a type, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: END_OF_INPUT }),
    }
}

/// Returns `true` at a line break, a comma or the end of input.
pub(in crate::interpreter::parser) fn at_statement_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().is_none_or(|(tok, _)| tok.is_separator())
}

/// Consumes the separator that ends a statement.
///
/// # Errors
/// Returns `ParseError::UnexpectedTrailingTokens` if anything else follows
/// the statement on the same line.
pub(in crate::interpreter::parser) fn expect_statement_end<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        None => Ok(()),
        Some((tok, _)) if tok.is_separator() => Ok(()),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                        line:  *line, }),
    }
}

/// Skips any run of line breaks and commas.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while tokens.next_if(|(tok, _)| tok.is_separator()).is_some() {}
}
