use std::iter::Peekable;

use crate::{
    ast::{
        ArithmeticOperator, ComparisonOperator, Expr, LiteralValue, LogicalOperator,
        VariadicOperator,
    },
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{
                END_OF_INPUT, at_statement_end, expect_keyword, parse_identifier, parse_type,
                peek_is, peek_sequence,
            },
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a full expression.
///
/// Every operator is a prefix keyword, so the first token alone decides the
/// form:
///
/// ```text
///     expression := literal | identifier | IT
///                 | SUM OF <expr> [AN] <expr>          (and the other arithmetic ops)
///                 | BOTH SAEM <expr> [AN] <expr> | DIFFRINT <expr> [AN] <expr>
///                 | BOTH OF | EITHER OF | WON OF <expr> [AN] <expr>
///                 | NOT <expr>
///                 | ALL OF | ANY OF | SMOOSH <expr> ([AN] <expr>)* [MKAY]
///                 | MAEK <expr> [A] <type>
///                 | I IZ <name> [YR <expr> (AN YR <expr>)*] MKAY
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedToken` if the next token cannot start an expression.
/// - `UnexpectedEndOfInput` if the input ends.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    ensure_sufficient_stack(|| parse_expression_inner(tokens))
}

fn parse_expression_inner<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: END_OF_INPUT });
    };
    let line = *line;

    let literal = |value: LiteralValue| -> ParseResult<Expr> { Ok(Expr::Literal { value, line }) };

    match token {
        Token::NumbrLit(n) => literal(LiteralValue::Numbr(*n)),
        Token::NumbarLit(f) => literal(LiteralValue::Numbar(*f)),
        Token::YarnLit(s) => literal(LiteralValue::from(s.as_str())),
        Token::TroofLit(b) => literal(LiteralValue::Troof(*b)),
        Token::Noob => literal(LiteralValue::Noob),
        Token::It => Ok(Expr::It { line }),
        Token::Identifier(name) => Ok(Expr::Variable { name: name.clone(),
                                                       line }),

        Token::Sum => parse_arithmetic(tokens, ArithmeticOperator::Sum, line),
        Token::Diff => parse_arithmetic(tokens, ArithmeticOperator::Diff, line),
        Token::Produkt => parse_arithmetic(tokens, ArithmeticOperator::Produkt, line),
        Token::Quoshunt => parse_arithmetic(tokens, ArithmeticOperator::Quoshunt, line),
        Token::Mod => parse_arithmetic(tokens, ArithmeticOperator::Mod, line),
        Token::Biggr => parse_arithmetic(tokens, ArithmeticOperator::Biggr, line),
        Token::Smallr => parse_arithmetic(tokens, ArithmeticOperator::Smallr, line),

        Token::Both if peek_is(tokens, &Token::Saem) => {
            tokens.next();
            parse_comparison(tokens, ComparisonOperator::BothSaem, line)
        },
        Token::Both => parse_logical(tokens, LogicalOperator::BothOf, line),
        Token::Diffrint => parse_comparison(tokens, ComparisonOperator::Diffrint, line),
        Token::Either => parse_logical(tokens, LogicalOperator::EitherOf, line),
        Token::Won => parse_logical(tokens, LogicalOperator::WonOf, line),
        Token::Not => {
            let expr = parse_expression(tokens)?;
            Ok(Expr::Not { expr: Box::new(expr),
                           line })
        },

        Token::All => parse_variadic(tokens, VariadicOperator::AllOf, line),
        Token::Any => parse_variadic(tokens, VariadicOperator::AnyOf, line),
        Token::Smoosh => {
            let operands = parse_operand_list(tokens)?;
            Ok(Expr::Smoosh { operands, line })
        },

        Token::Maek => {
            let expr = parse_expression(tokens)?;
            if peek_is(tokens, &Token::A) {
                tokens.next();
            }
            let target = parse_type(tokens)?;
            Ok(Expr::Cast { expr: Box::new(expr),
                            target,
                            line })
        },

        Token::I => parse_function_call(tokens, line),

        tok => Err(ParseError::UnexpectedToken { token: format!("Expected an expression, found {tok:?}"),
                                                 line }),
    }
}

/// Parses `<op> OF <expr> [AN] <expr>` after the operator word.
fn parse_arithmetic<'a, I>(tokens: &mut Peekable<I>,
                           op: ArithmeticOperator,
                           line: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_keyword(tokens, &Token::Of, "OF")?;
    let (left, right) = parse_binary_operands(tokens)?;

    Ok(Expr::Arithmetic { op,
                          left: Box::new(left),
                          right: Box::new(right),
                          line })
}

/// Parses the operands of `BOTH SAEM` or `DIFFRINT`. The operator words have
/// already been consumed.
fn parse_comparison<'a, I>(tokens: &mut Peekable<I>,
                           op: ComparisonOperator,
                           line: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (left, right) = parse_binary_operands(tokens)?;

    Ok(Expr::Comparison { op,
                          left: Box::new(left),
                          right: Box::new(right),
                          line })
}

/// Parses `OF <expr> [AN] <expr>` after `BOTH`, `EITHER` or `WON`.
fn parse_logical<'a, I>(tokens: &mut Peekable<I>,
                        op: LogicalOperator,
                        line: usize)
                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_keyword(tokens, &Token::Of, "OF")?;
    let (left, right) = parse_binary_operands(tokens)?;

    Ok(Expr::Logical { op,
                       left: Box::new(left),
                       right: Box::new(right),
                       line })
}

/// Parses `OF <expr> ... [MKAY]` after `ALL` or `ANY`.
fn parse_variadic<'a, I>(tokens: &mut Peekable<I>,
                         op: VariadicOperator,
                         line: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_keyword(tokens, &Token::Of, "OF")?;
    let operands = parse_operand_list(tokens)?;

    Ok(Expr::Variadic { op, operands, line })
}

/// Parses `I IZ <name> [YR <expr> (AN YR <expr>)*] MKAY` after the `I`.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_keyword(tokens, &Token::Iz, "IZ")?;
    let name = parse_identifier(tokens)?;

    let mut arguments = Vec::new();
    if peek_is(tokens, &Token::Yr) {
        tokens.next();
        arguments.push(parse_expression(tokens)?);

        while peek_sequence(tokens, &[Token::An, Token::Yr]) {
            tokens.next();
            tokens.next();
            arguments.push(parse_expression(tokens)?);
        }
    }

    expect_keyword(tokens, &Token::Mkay, "MKAY")?;

    Ok(Expr::FunctionCall { name,
                            arguments,
                            line })
}

/// Parses two operands separated by an optional `AN`.
fn parse_binary_operands<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(Expr, Expr)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_expression(tokens)?;
    skip_an(tokens);
    let right = parse_expression(tokens)?;

    Ok((left, right))
}

/// Parses the operands of a variadic form.
///
/// Operands are separated by an optional `AN`. The list ends at `MKAY`,
/// which is consumed, or at the end of the line or a `!`, which are not. At
/// least one operand is required.
fn parse_operand_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut operands = vec![parse_expression(tokens)?];

    loop {
        skip_an(tokens);

        if peek_is(tokens, &Token::Mkay) {
            tokens.next();
            break;
        }
        if at_statement_end(tokens) || peek_is(tokens, &Token::Bang) {
            break;
        }

        operands.push(parse_expression(tokens)?);
    }

    Ok(operands)
}

/// Consumes an `AN` between operands. `AN YR` is left alone, since it
/// separates the arguments of an enclosing function call.
fn skip_an<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if peek_is(tokens, &Token::An) && !peek_sequence(tokens, &[Token::An, Token::Yr]) {
        tokens.next();
    }
}
