/// The evaluator module executes the statement tree.
///
/// The evaluator walks the statements of a program against a chain of
/// scope frames, evaluates expressions, writes output and reads input. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements and reports control flow (`GTFO`, `FOUND YR`).
/// - Manages variables, user functions and the `IT` register.
/// - Reports runtime errors such as failed casts or undeclared variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line it appeared on. Keywords are emitted one word at a
/// time; comments and line continuations are dropped here.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles numeric and string literals, identifiers and keywords.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the [`Program`](crate::ast::Program) that the evaluator runs. Multi-word
/// keywords are assembled here from single-word tokens.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates the grammar, reporting errors with line numbers.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the five value kinds (`NOOB`, TROOF, NUMBR, NUMBAR
/// and YARN) together with their implicit and explicit conversions.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Type` tags.
/// - Implements implicit conversions, which fail loudly, and explicit
///   casts.
/// - Provides numeric promotion for arithmetic.
pub mod value;
