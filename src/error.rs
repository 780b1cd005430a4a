/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, invalid
/// literals, and missing block terminators detected before execution starts.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a program executes:
/// conversion failures, undeclared variables, undefined functions, arity
/// mismatches, illegal control flow and malformed output templates.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure reported by [`crate::run`].
///
/// Every variant is fatal: once one is produced no further statements are
/// executed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program text could not be turned into a statement tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The output could not be flushed after the program ended.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
