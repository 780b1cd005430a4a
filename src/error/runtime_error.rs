use thiserror::Error;

use crate::interpreter::value::types::Type;

#[derive(Debug, Error)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Tried to read a variable that no frame in the chain declares.
    #[error("Error on line {line}: Unreferenced variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a variable that was never declared.
    #[error("Error on line {line}: Cannot assign to undeclared variable '{name}'.")]
    AssignmentToUndeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never declared.
    #[error("Error on line {line}: Undefined function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to declare a function that already exists.
    #[error("Error on line {line}: Function '{name}' is already defined.")]
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a function anywhere but in the main program flow.
    #[error("Error on line {line}: Function '{name}' may only be declared in the main program.")]
    FunctionOutsideMain {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Function '{name}' expects {expected} argument(s) but {found} were given.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The declared number of parameters.
        expected: usize,
        /// The number of arguments at the call site.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Nested function calls went deeper than the configured limit.
    #[error("Error on line {line}: Maximum call depth of {limit} exceeded.")]
    CallDepthExceeded {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `FOUND YR` or `GTFO` was used in the main program flow.
    #[error("Error on line {line}: Cannot return from the main program.")]
    ReturnFromMain {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `FOUND YR` surfaced from the body of a loop.
    #[error("Error on line {line}: Cannot return from inside loop '{label}'; use GTFO and return after the loop.")]
    ReturnInsideLoop {
        /// The label of the loop.
        label: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The closing label of a loop does not match its opening label.
    #[error("Error on line {line}: Loop label mismatch: opened '{start}' but closed '{end}'.")]
    LoopLabelMismatch {
        /// The label after `IM IN YR`.
        start: String,
        /// The label after `IM OUTTA YR`.
        end:   String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An implicit conversion between two types is not permitted.
    #[error("Error on line {line}: Cannot implicitly cast {from} to {to}.")]
    ImplicitCast {
        /// The type of the value being converted.
        from: Type,
        /// The requested type.
        to:   Type,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value could not be interpreted as a NUMBR or NUMBAR.
    #[error("Error on line {line}: Failed to cast value \"{value}\" to a numeric type.")]
    NotNumeric {
        /// The text form of the offending value.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An explicit cast could not convert its operand.
    #[error("Error on line {line}: Casting to {target} failed.")]
    CastFailed {
        /// The requested type.
        target: Type,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// `MOD OF` was applied to NUMBAR operands.
    #[error("Error on line {line}: MOD OF is not allowed for NUMBAR operands.")]
    FloatModulo {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `BOTH SAEM` or `DIFFRINT` was applied to incompatible operands.
    #[error("Error on line {line}: Cannot compare {left} with {right}.")]
    InvalidComparison {
        /// The type of the left operand.
        left:  Type,
        /// The type of the right operand.
        right: Type,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted integer division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A printed string contained a malformed `:` sequence.
    #[error("Error on line {line}: Malformed output template: {details}.")]
    Template {
        /// What went wrong while expanding the template.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reading from standard input or writing to standard output failed.
    #[error("Error on line {line}: I/O failure: {source}.")]
    Io {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}
