use std::{mem, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Activation, Context, EvalResult, Signal},
            scope::{FrameId, FrameKind, MAIN},
        },
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

impl Context<'_> {
    /// Registers a user-defined function.
    ///
    /// Functions are registered when their definition is executed, so a call
    /// that runs before the definition fails.
    ///
    /// # Errors
    /// - `FunctionOutsideMain` if the definition runs anywhere but in the
    ///   main frame.
    /// - `FunctionAlreadyDefined` if the name is taken.
    pub(crate) fn declare_function(&mut self,
                                   def: &FunctionDef,
                                   frame: FrameId)
                                   -> EvalResult<Signal> {
        if frame != MAIN {
            return Err(RuntimeError::FunctionOutsideMain { name: def.name.clone(),
                                                           line: def.line, });
        }
        if self.functions.contains_key(&def.name) {
            return Err(RuntimeError::FunctionAlreadyDefined { name: def.name.clone(),
                                                              line: def.line, });
        }

        debug!(name = %def.name, params = def.params.len(), line = def.line, "registered function");
        self.functions.insert(def.name.clone(), Rc::new(def.clone()));

        Ok(Signal::Continue)
    }

    /// Calls a user-defined function.
    ///
    /// The arguments are evaluated left to right in the caller's frame. The
    /// body then runs in a fresh frame without a parent, holding only the
    /// parameters, and with a fresh [`Activation`].
    ///
    /// The result depends on how the body finished:
    /// - `FOUND YR`: the returned value.
    /// - `GTFO`: `NOOB`.
    /// - falling off the end: the callee's `IT`, or `NOOB` if it never set
    ///   one.
    ///
    /// # Parameters
    /// - `name`: Name of the function.
    /// - `arguments`: Argument expressions at the call site.
    /// - `frame`: The caller's frame.
    /// - `line`: Line of the call.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function has that name.
    /// - `ArgumentCountMismatch` if the number of arguments differs from the
    ///   number of parameters.
    /// - `CallDepthExceeded` if the call would nest deeper than
    ///   `Options::max_call_depth`.
    /// - Propagates any error raised by the arguments or the body.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     frame: FrameId,
                                     line: usize)
                                     -> EvalResult<Value> {
        let def = self.functions
                      .get(name)
                      .cloned()
                      .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                     line })?;

        if def.params.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: def.params.len(),
                                                             found: arguments.len(),
                                                             line });
        }
        if self.call_depth >= self.options.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.options.max_call_depth,
                                                         line });
        }

        let values = arguments.iter()
                              .map(|arg| self.eval(arg, frame))
                              .collect::<EvalResult<Vec<_>>>()?;

        let function_frame = self.scopes.push(FrameKind::Function, None);
        for (param, value) in def.params.iter().zip(values) {
            self.scopes.declare(function_frame, param, value);
        }

        let caller = mem::take(&mut self.activation);
        self.call_depth += 1;
        trace!(name, depth = self.call_depth, frames = self.scopes.depth(), "calling function");

        let outcome = ensure_sufficient_stack(|| self.exec_block(&def.body, function_frame));

        self.call_depth -= 1;
        let callee: Activation = mem::replace(&mut self.activation, caller);
        self.scopes.pop(function_frame);

        Ok(match outcome? {
            Signal::Return => callee.last_return,
            Signal::Break => Value::Noob,
            Signal::Continue => callee.it,
        })
    }
}
