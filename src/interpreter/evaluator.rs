/// Core evaluation logic and context management.
///
/// Contains the runtime context, the per-call registers, control-flow
/// signals and the expression dispatcher.
pub mod core;

/// The scope chain.
///
/// Frames are kept in an arena and linked to their parents by index.
pub mod scope;

/// Statement execution.
///
/// Runs statement sequences and produces a control-flow signal for each.
pub mod statement;

/// Evaluation of `IM IN YR` loops.
pub mod cycle;

/// User-defined functions.
///
/// Handles function registration, argument checking, activation records
/// and return value selection.
pub mod function;

/// Arithmetic operators.
///
/// Numeric promotion and the `SUM OF` family.
pub mod arithmetic;

/// `BOTH SAEM` and `DIFFRINT`.
pub mod comparison;

/// Boolean operators, both binary and variadic.
pub mod logic;

/// String building: `SMOOSH` and the output template language.
pub mod text;

/// Standard input and output.
pub mod io;
