//! # lolcode
//!
//! lolcode is a tree-walking interpreter for a small LOLCODE dialect written
//! in Rust. It lexes, parses and executes programs with five value kinds,
//! block-scoped variables, user-defined functions, a single loop construct
//! and templated output.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use logos::Logos;
use tracing::debug;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::core::parse_program,
    },
};
pub use crate::{
    error::Error,
    interpreter::evaluator::core::{DEFAULT_MAX_CALL_DEPTH, Options},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent a program as a tree. The AST is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches the source line to every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or running a program. Every error carries the line it occurred on and
/// renders as `Error on line N: ...`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value model
/// to provide a complete runtime for source programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities: numeric parsing and formatting, stack growth.
pub mod util;

/// Splits source code into tokens, each paired with its line number.
///
/// # Errors
/// Returns `ParseError::InvalidToken` for text that is not a valid token,
/// such as an unterminated string or an `OBTW` without `TLDR`.
///
/// ## Example
/// ```
/// use lolcode::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("HAI 1.2\nKTHXBYE").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Hai, 1),
///                 (Token::NumbarLit(1.2), 1),
///                 (Token::NewLine, 2),
///                 (Token::Kthxbye, 2)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::InvalidToken { token: lexer.slice().to_string(),
                                                  line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses source code into a [`Program`].
///
/// # Errors
/// Returns a `ParseError` if the source cannot be tokenized or does not
/// follow the grammar.
///
/// ## Example
/// ```
/// use lolcode::parse;
///
/// let program = parse("HAI 1.2\nVISIBLE \"HAI WORLD\"\nKTHXBYE").unwrap();
/// assert_eq!(program.version.as_deref(), Some("1.2"));
/// assert_eq!(program.statements.len(), 1);
///
/// assert!(parse("VISIBLE 1").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "tokenized source");

    let end_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter).map_err(|e| e.with_end_line(end_line))
}

/// Parses and runs a program.
///
/// `VISIBLE` writes to `output` and `GIMMEH` reads from `input`. The output
/// is flushed before returning, whether or not the program failed, so
/// everything printed before an error is preserved.
///
/// # Errors
/// Returns an error if parsing fails, if a runtime error occurs, or if the
/// output cannot be flushed.
///
/// # Examples
/// ```
/// use lolcode::{Options, run};
///
/// let source = "HAI 1.2\nI HAS A x ITZ SUM OF \"5\" AN 3\nVISIBLE x\nKTHXBYE";
/// let mut output = Vec::new();
/// run(source, &Options::default(), &mut "".as_bytes(), &mut output).unwrap();
/// assert_eq!(output, b"8\n");
///
/// // Example with an intentional error (undeclared variable).
/// let source = "HAI 1.2\ny R 1\nKTHXBYE";
/// let res = run(source, &Options::default(), &mut "".as_bytes(), &mut Vec::new());
/// assert!(res.is_err());
/// ```
pub fn run(source: &str,
           options: &Options,
           input: &mut dyn BufRead,
           output: &mut dyn Write)
           -> Result<(), Error> {
    let program = parse(source)?;

    let mut context = Context::new(*options, input, output);
    let outcome = context.run_program(&program);
    let flushed = context.flush_output();

    outcome?;
    flushed?;
    Ok(())
}
