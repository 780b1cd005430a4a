/// Core parsing entry points.
///
/// Defines the parse result type and the program-level grammar that wraps
/// every source file in `HAI ... KTHXBYE`.
pub mod core;

/// Statement block parsing.
///
/// Collects statements until one of the closing keywords of the enclosing
/// construct is reached.
pub mod block;

/// Statement parsing.
///
/// Declarations, assignments, casts, output and input, conditionals, loops,
/// function definitions and returns.
pub mod statement;

/// Expression parsing.
///
/// All operators are prefix keywords, so expressions are parsed by
/// dispatching on their first word.
pub mod expression;

/// Utility functions for the parser.
///
/// Token lookahead, keyword matching and statement terminators.
pub mod utils;
