use std::iter::Peekable;

use crate::{
    ast::{Conditional, Cycle, ElseIf, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::{BlockEnd, parse_block},
            core::ParseResult,
            expression::parse_expression,
            utils::{
                END_OF_INPUT, at_statement_end, expect_keyword, expect_keywords,
                expect_statement_end, parse_identifier, parse_type, peek_is, peek_sequence,
                skip_separators,
            },
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a single statement.
///
/// The first word decides the construct:
/// - `I HAS A` declares a variable.
/// - `<name> R` assigns, `<name> IS NOW A` casts in place.
/// - `VISIBLE` prints and `GIMMEH` reads.
/// - `O RLY?`, `IM IN YR` and `HOW IZ I` open a conditional, a loop and a
///   function definition.
/// - `FOUND YR` and `GTFO` return.
///
/// Anything else is parsed as a bare expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node. The separator after it is not consumed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    ensure_sufficient_stack(|| parse_statement_inner(tokens))
}

fn parse_statement_inner<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(&next) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: END_OF_INPUT });
    };
    let (token, line) = (&next.0, next.1);

    match token {
        Token::I if peek_sequence(tokens, &[Token::I, Token::Has, Token::A]) => {
            parse_variable_declaration(tokens, line)
        },
        Token::Identifier(_) => parse_identifier_statement(tokens, line),
        Token::Visible => parse_print(tokens, line),
        Token::Gimmeh => {
            tokens.next();
            let name = parse_identifier(tokens)?;
            Ok(Statement::Read { name, line })
        },
        Token::O => parse_conditional(tokens, line),
        Token::Im => parse_cycle(tokens, line),
        Token::How => parse_function_definition(tokens, line),
        Token::Found => {
            expect_keywords(tokens, &[Token::Found, Token::Yr], "FOUND YR")?;
            let value = parse_expression(tokens)?;
            Ok(Statement::Return { value: Some(value),
                                   line })
        },
        Token::Gtfo => {
            tokens.next();
            Ok(Statement::Return { value: None, line })
        },
        _ => {
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses `I HAS A <name> [ITZ <expr>]`.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_keywords(tokens, &[Token::I, Token::Has, Token::A], "I HAS A")?;
    let name = parse_identifier(tokens)?;

    let value = if peek_is(tokens, &Token::Itz) {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    Ok(Statement::VariableDeclaration { name, value, line })
}

/// Parses a statement that starts with a variable name.
///
/// `<name> R <expr>` is an assignment and `<name> IS NOW A <type>` an in-place
/// cast. Otherwise the name starts a bare expression statement.
fn parse_identifier_statement<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();

    match lookahead.peek() {
        Some((Token::R, _)) => {
            let name = parse_identifier(tokens)?;
            tokens.next();
            let value = parse_expression(tokens)?;
            Ok(Statement::Assignment { name, value, line })
        },
        Some((Token::Is, _)) => {
            let name = parse_identifier(tokens)?;
            expect_keywords(tokens, &[Token::Is, Token::Now, Token::A], "IS NOW A")?;
            let target = parse_type(tokens)?;
            Ok(Statement::Cast { name, target, line })
        },
        _ => {
            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses `VISIBLE <expr> [<expr> ...] [!]`.
///
/// Arguments run until the end of the line. A trailing `!` suppresses the
/// line break. At least one argument is required.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let mut arguments = Vec::new();
    while !at_statement_end(tokens) && !peek_is(tokens, &Token::Bang) {
        arguments.push(parse_expression(tokens)?);
    }

    if arguments.is_empty() {
        return Err(ParseError::UnexpectedToken { token: "Expected an expression after VISIBLE".to_string(),
                                                 line });
    }

    let newline = if peek_is(tokens, &Token::Bang) {
        tokens.next();
        false
    } else {
        true
    };

    Ok(Statement::Print { arguments,
                          newline,
                          line })
}

/// Parses an `O RLY?` conditional.
///
/// Syntax:
/// ```text
///     O RLY?
///       YA RLY
///         <statements>
///       MEBBE <expr>
///         <statements>
///       NO WAI
///         <statements>
///     OIC
/// ```
/// Any number of `MEBBE` clauses may appear; `NO WAI` is optional and must
/// come last.
///
/// # Errors
/// - `ExpectedKeyword` if `YA RLY` or `OIC` is missing.
/// - Propagates any errors from block parsing.
fn parse_conditional<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_keywords(tokens, &[Token::O, Token::Rly, Token::Question], "O RLY?")?;
    expect_statement_end(tokens)?;
    skip_separators(tokens);

    expect_keywords(tokens, &[Token::Ya, Token::Rly], "YA RLY")?;
    let then_branch = parse_block(tokens, BlockEnd::Branch)?;

    let mut else_ifs = Vec::new();
    while let Some((Token::Mebbe, mebbe_line)) = tokens.peek() {
        let mebbe_line = *mebbe_line;
        tokens.next();

        let condition = parse_expression(tokens)?;
        let body = parse_block(tokens, BlockEnd::Branch)?;
        else_ifs.push(ElseIf { condition,
                               body,
                               line: mebbe_line });
    }

    let else_branch = if peek_sequence(tokens, &[Token::No, Token::Wai]) {
        tokens.next();
        tokens.next();
        Some(parse_block(tokens, BlockEnd::Branch)?)
    } else {
        None
    };

    expect_keyword(tokens, &Token::Oic, "OIC")?;

    Ok(Statement::Conditional(Conditional { then_branch,
                                            else_ifs,
                                            else_branch,
                                            line }))
}

/// Parses `IM IN YR <label> ... IM OUTTA YR <label>`.
///
/// The two labels are kept as written; whether they match is checked when
/// the loop runs.
fn parse_cycle<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_keywords(tokens, &[Token::Im, Token::In, Token::Yr], "IM IN YR")?;
    let label = parse_identifier(tokens)?;

    let body = parse_block(tokens, BlockEnd::Cycle)?;

    expect_keywords(tokens, &[Token::Im, Token::Outta, Token::Yr], "IM OUTTA YR")?;
    let end_label = parse_identifier(tokens)?;

    Ok(Statement::Cycle(Cycle { label,
                                end_label,
                                body,
                                line }))
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     HOW IZ I <name> [YR <param> (AN YR <param>)*]
///       <statements>
///     IF U SAY SO
/// ```
///
/// # Returns
/// A `Statement::Function` holding the definition. Registration happens
/// when the statement is executed.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    line: usize)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_keywords(tokens, &[Token::How, Token::Iz, Token::I], "HOW IZ I")?;
    let name = parse_identifier(tokens)?;

    let mut params = Vec::new();
    if peek_is(tokens, &Token::Yr) {
        tokens.next();
        params.push(parse_identifier(tokens)?);

        while peek_sequence(tokens, &[Token::An, Token::Yr]) {
            tokens.next();
            tokens.next();
            params.push(parse_identifier(tokens)?);
        }
    }

    let body = parse_block(tokens, BlockEnd::Function)?;
    expect_keywords(tokens,
                    &[Token::If, Token::U, Token::Say, Token::So],
                    "IF U SAY SO")?;

    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         body,
                                         line }))
}
