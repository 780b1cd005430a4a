use std::{
    collections::HashMap,
    io::{BufRead, Write},
    rc::Rc,
};

use tracing::debug;

use crate::{
    ast::{Expr, FunctionDef, Program},
    error::RuntimeError,
    interpreter::{
        evaluator::scope::{FrameId, MAIN, Scopes},
        value::{cast::cast_value, core::Value},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2048;

/// Runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// How many user function calls may be active at once. A call beyond
    /// this depth fails with `RuntimeError::CallDepthExceeded`.
    pub max_call_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// The control-flow outcome of executing a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Carry on with the next statement.
    Continue,
    /// `GTFO`: leave the innermost loop or function.
    Break,
    /// `FOUND YR`: leave the current function with a value.
    Return,
}

/// The registers owned by one function call, or by the main program.
///
/// A call starts with a fresh activation and restores the caller's when it
/// returns, so a callee can never disturb the `IT` its caller is about to
/// test. Loops share the activation of the code around them.
#[derive(Debug, Default)]
pub struct Activation {
    /// The result of the most recent bare expression statement.
    pub it:          Value,
    /// The value of the most recent `FOUND YR`.
    pub last_return: Value,
}

/// Stores the runtime evaluation context.
///
/// Holds the scope chain, the function table, the registers of the running
/// activation and the streams that `VISIBLE` and `GIMMEH` use.
///
/// ## Usage
///
/// A `Context` is created once per program run. [`Context::run_program`]
/// executes the top-level statements against the main frame; everything
/// else is reached from there.
pub struct Context<'io> {
    /// Every live frame, main frame first.
    pub scopes:     Scopes,
    /// Functions registered so far, by name.
    pub functions:  HashMap<String, Rc<FunctionDef>>,
    /// Registers of the running function call or of the main program.
    pub activation: Activation,
    /// Number of user function calls currently active.
    pub call_depth: usize,
    /// Runtime configuration.
    pub options:    Options,
    pub(crate) input:  &'io mut dyn BufRead,
    pub(crate) output: &'io mut dyn Write,
}

impl<'io> Context<'io> {
    /// Creates a context with an empty main frame and no functions.
    ///
    /// # Parameters
    /// - `options`: Runtime configuration.
    /// - `input`: Where `GIMMEH` reads from.
    /// - `output`: Where `VISIBLE` writes to.
    pub fn new(options: Options,
               input: &'io mut dyn BufRead,
               output: &'io mut dyn Write)
               -> Self {
        Self { scopes: Scopes::new(),
               functions: HashMap::new(),
               activation: Activation::default(),
               call_depth: 0,
               options,
               input,
               output }
    }

    /// Executes a parsed program against the main frame.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised; nothing after it runs.
    pub fn run_program(&mut self, program: &Program) -> EvalResult<()> {
        debug!(version = ?program.version,
               statements = program.statements.len(),
               "running program");

        let signal = self.exec_block(&program.statements, MAIN)?;

        debug!(?signal, "program finished");
        Ok(())
    }

    /// Flushes everything written so far to the output stream.
    pub fn flush_output(&mut self) -> std::io::Result<()> {
        self.output.flush()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, variables, `IT`,
    /// operators, casts and function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `frame`: The frame variables are resolved from.
    ///
    /// # Returns
    /// The value of the expression. Expression evaluation never changes a
    /// variable; only function calls can write output or read input.
    pub fn eval(&mut self, expr: &Expr, frame: FrameId) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_inner(expr, frame))
    }

    fn eval_inner(&mut self, expr: &Expr, frame: FrameId) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.scopes.get(frame, name, *line).cloned(),
            Expr::It { .. } => Ok(self.activation.it.clone()),
            Expr::Arithmetic { op,
                               left,
                               right,
                               line, } => {
                let left = self.eval(left, frame)?;
                let right = self.eval(right, frame)?;
                Self::eval_arithmetic(*op, &left, &right, *line)
            },
            Expr::Comparison { op,
                               left,
                               right,
                               line, } => {
                let left = self.eval(left, frame)?;
                let right = self.eval(right, frame)?;
                Self::eval_comparison(*op, &left, &right, *line)
            },
            Expr::Logical { op, left, right, .. } => self.eval_logical(*op, left, right, frame),
            Expr::Not { expr, .. } => Ok(Value::Troof(!self.eval(expr, frame)?.to_troof())),
            Expr::Variadic { op, operands, .. } => self.eval_variadic(*op, operands, frame),
            Expr::Smoosh { operands, line } => self.eval_smoosh(operands, frame, *line),
            Expr::Cast { expr, target, line } => {
                let value = self.eval(expr, frame)?;
                cast_value(*target, &value, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, frame, *line),
        }
    }
}
