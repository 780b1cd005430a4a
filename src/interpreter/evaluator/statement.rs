use crate::{
    ast::{Conditional, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Signal},
            scope::{FrameId, FrameKind},
        },
        value::{cast::cast_value, core::Value},
    },
    util::stack::ensure_sufficient_stack,
};

impl Context<'_> {
    /// Executes a sequence of statements in order.
    ///
    /// Stops at the first statement that signals `Break` or `Return` and
    /// hands that signal to the caller.
    ///
    /// # Parameters
    /// - `statements`: The statements to run.
    /// - `frame`: The frame they run in.
    ///
    /// # Returns
    /// `Signal::Continue` if every statement completed normally.
    pub fn exec_block(&mut self, statements: &[Statement], frame: FrameId) -> EvalResult<Signal> {
        for statement in statements {
            let signal = self.exec_statement(statement, frame)?;
            if signal != Signal::Continue {
                return Ok(signal);
            }
        }

        Ok(Signal::Continue)
    }

    /// Executes a single statement.
    ///
    /// Declarations, assignments and casts change variables in the scope
    /// chain; bare expressions update `IT`; conditionals, loops and returns
    /// steer control flow.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `frame`: The frame the statement runs in.
    ///
    /// # Returns
    /// The control-flow signal produced by the statement.
    pub fn exec_statement(&mut self, statement: &Statement, frame: FrameId) -> EvalResult<Signal> {
        ensure_sufficient_stack(|| self.exec_statement_inner(statement, frame))
    }

    fn exec_statement_inner(&mut self,
                            statement: &Statement,
                            frame: FrameId)
                            -> EvalResult<Signal> {
        match statement {
            Statement::VariableDeclaration { name, value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr, frame)?,
                    None => Value::Noob,
                };

                self.scopes.declare(frame, name, value);
                Ok(Signal::Continue)
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value, frame)?;

                self.scopes.set(frame, name, value, *line)?;
                Ok(Signal::Continue)
            },
            Statement::Cast { name, target, line } => {
                let cast = cast_value(*target, self.scopes.get(frame, name, *line)?, *line)?;

                self.scopes.set(frame, name, cast, *line)?;
                Ok(Signal::Continue)
            },
            Statement::Expression { expr, .. } => {
                self.activation.it = self.eval(expr, frame)?;
                Ok(Signal::Continue)
            },
            Statement::Print { arguments,
                               newline,
                               line, } => self.exec_print(arguments, *newline, frame, *line),
            Statement::Read { name, line } => self.exec_read(name, frame, *line),
            Statement::Conditional(conditional) => self.exec_conditional(conditional, frame),
            Statement::Cycle(cycle) => self.exec_cycle(cycle, frame),
            Statement::Function(def) => self.declare_function(def, frame),
            Statement::Return { value, line } => self.exec_return(value.as_ref(), frame, *line),
        }
    }

    /// Runs one branch of an `O RLY?` conditional.
    ///
    /// The `YA RLY` branch is taken when `IT` is true. Otherwise each `MEBBE`
    /// guard is evaluated in order and the first true one wins; `NO WAI`
    /// runs if none did. Branches share the frame of the conditional.
    fn exec_conditional(&mut self,
                        conditional: &Conditional,
                        frame: FrameId)
                        -> EvalResult<Signal> {
        if self.activation.it.to_troof() {
            return self.exec_block(&conditional.then_branch, frame);
        }

        for else_if in &conditional.else_ifs {
            if self.eval(&else_if.condition, frame)?.to_troof() {
                return self.exec_block(&else_if.body, frame);
            }
        }

        match &conditional.else_branch {
            Some(body) => self.exec_block(body, frame),
            None => Ok(Signal::Continue),
        }
    }

    /// Executes `FOUND YR <expr>` (`value` is `Some`) or `GTFO` (`None`).
    ///
    /// Both are rejected in the main frame. The return value is stored only
    /// when the statement runs directly in a function frame; a `FOUND YR`
    /// inside a loop still signals `Return`, which the loop turns into an
    /// error.
    fn exec_return(&mut self,
                   value: Option<&Expr>,
                   frame: FrameId,
                   line: usize)
                   -> EvalResult<Signal> {
        let kind = self.scopes.kind(frame);
        if kind == FrameKind::Main {
            return Err(RuntimeError::ReturnFromMain { line });
        }

        let Some(expr) = value else {
            if kind == FrameKind::Function {
                self.activation.last_return = Value::Noob;
            }
            return Ok(Signal::Break);
        };

        let value = self.eval(expr, frame)?;
        if kind == FrameKind::Function {
            self.activation.last_return = value;
        }

        Ok(Signal::Return)
    }
}
