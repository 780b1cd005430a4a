use std::{fmt, rc::Rc};

use crate::interpreter::value::types::Type;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: `NOOB`, `WIN`/`FAIL`, integers, floats and quoted strings. String
/// literals keep their raw text; `:` escapes are only expanded when printed.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `NOOB` keyword.
    Noob,
    /// `WIN` or `FAIL`.
    Troof(bool),
    /// An integer literal such as `42` or `-7`.
    Numbr(i64),
    /// A float literal such as `3.14` or `.5`.
    Numbar(f64),
    /// The contents of a string literal, without the surrounding quotes.
    Yarn(Rc<str>),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Numbr(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Numbar(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Troof(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Yarn(Rc::from(value))
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are written in prefix form (`SUM OF a AN b`). Each variant
/// carries the line it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// The implicit `IT` variable holding the last bare expression result.
    It {
        /// Line number in the source code.
        line: usize,
    },
    /// `SUM OF`, `DIFF OF`, `PRODUKT OF`, `QUOSHUNT OF`, `MOD OF`, `BIGGR OF`
    /// and `SMALLR OF`.
    Arithmetic {
        /// The operator.
        op:    ArithmeticOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `BOTH SAEM` and `DIFFRINT`.
    Comparison {
        /// The operator.
        op:    ComparisonOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `BOTH OF`, `EITHER OF` and `WON OF`.
    Logical {
        /// The operator.
        op:    LogicalOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `NOT <expr>`.
    Not {
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `ALL OF ... MKAY` and `ANY OF ... MKAY`.
    Variadic {
        /// The operator.
        op:       VariadicOperator,
        /// The operands, evaluated left to right.
        operands: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `SMOOSH ... MKAY`, string concatenation.
    Smoosh {
        /// The operands, converted to YARN and joined.
        operands: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `MAEK <expr> A <type>`, an explicit cast.
    Cast {
        /// The value to convert.
        expr:   Box<Self>,
        /// The requested type.
        target: Type,
        /// Line number in the source code.
        line:   usize,
    },
    /// `I IZ <name> YR <arg> AN YR <arg> MKAY`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use lolcode::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::It { line }
            | Self::Arithmetic { line, .. }
            | Self::Comparison { line, .. }
            | Self::Logical { line, .. }
            | Self::Not { line, .. }
            | Self::Variadic { line, .. }
            | Self::Smoosh { line, .. }
            | Self::Cast { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function declaration.
///
/// `HOW IZ I <name> YR <param> AN YR <param> ... IF U SAY SO`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, bound positionally.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// One `MEBBE <expr>` clause of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIf {
    /// The guard, evaluated when all earlier branches were skipped.
    pub condition: Expr,
    /// The statements executed when the guard is true.
    pub body:      Vec<Statement>,
    /// Line number in the source code.
    pub line:      usize,
}

/// An `O RLY?` conditional.
///
/// The first branch is taken when `IT` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// The `YA RLY` branch.
    pub then_branch: Vec<Statement>,
    /// The `MEBBE` clauses, in source order.
    pub else_ifs:    Vec<ElseIf>,
    /// The `NO WAI` branch, if present.
    pub else_branch: Option<Vec<Statement>>,
    /// Line number in the source code.
    pub line:        usize,
}

/// An `IM IN YR <label> ... IM OUTTA YR <label>` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    /// The label after `IM IN YR`.
    pub label:     String,
    /// The label after `IM OUTTA YR`; must equal `label`.
    pub end_label: String,
    /// The loop body.
    pub body:      Vec<Statement>,
    /// Line number in the source code.
    pub line:      usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `I HAS A <name> [ITZ <expr>]`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initializer; `NOOB` when absent.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `<name> R <expr>`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `<name> IS NOW A <type>`.
    Cast {
        /// The name of the variable.
        name:   String,
        /// The requested type.
        target: Type,
        /// Line number in the source code.
        line:   usize,
    },
    /// A standalone expression whose result is stored in `IT`.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `VISIBLE <expr> ... [!]`.
    Print {
        /// The values to print, in order.
        arguments: Vec<Expr>,
        /// Whether a line break follows the output (`false` with a trailing
        /// `!`).
        newline:   bool,
        /// Line number in the source code.
        line:      usize,
    },
    /// `GIMMEH <name>`.
    Read {
        /// The variable receiving the input.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `O RLY? ... OIC`.
    Conditional(Conditional),
    /// `IM IN YR ... IM OUTTA YR`.
    Cycle(Cycle),
    /// `HOW IZ I ... IF U SAY SO`.
    Function(FunctionDef),
    /// `FOUND YR <expr>` or, without a value, `GTFO`.
    Return {
        /// The returned expression; `None` for `GTFO`.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VariableDeclaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Cast { line, .. }
            | Self::Expression { line, .. }
            | Self::Print { line, .. }
            | Self::Read { line, .. }
            | Self::Return { line, .. } => *line,
            Self::Conditional(conditional) => conditional.line,
            Self::Cycle(cycle) => cycle.line,
            Self::Function(def) => def.line,
        }
    }
}

/// A complete program: `HAI [version] ... KTHXBYE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The version written after `HAI`, if any.
    pub version:    Option<String>,
    /// The top-level statements.
    pub statements: Vec<Statement>,
}

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// `SUM OF`
    Sum,
    /// `DIFF OF`
    Diff,
    /// `PRODUKT OF`
    Produkt,
    /// `QUOSHUNT OF`
    Quoshunt,
    /// `MOD OF`
    Mod,
    /// `BIGGR OF`
    Biggr,
    /// `SMALLR OF`
    Smallr,
}

/// Represents an equality operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `BOTH SAEM`
    BothSaem,
    /// `DIFFRINT`
    Diffrint,
}

/// Represents a binary boolean operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `BOTH OF`
    BothOf,
    /// `EITHER OF`
    EitherOf,
    /// `WON OF`
    WonOf,
}

/// Represents a variadic boolean operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VariadicOperator {
    /// `ALL OF`
    AllOf,
    /// `ANY OF`
    AnyOf,
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Sum => "SUM OF",
            Self::Diff => "DIFF OF",
            Self::Produkt => "PRODUKT OF",
            Self::Quoshunt => "QUOSHUNT OF",
            Self::Mod => "MOD OF",
            Self::Biggr => "BIGGR OF",
            Self::Smallr => "SMALLR OF",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothSaem => write!(f, "BOTH SAEM"),
            Self::Diffrint => write!(f, "DIFFRINT"),
        }
    }
}
