use tracing::trace;

use crate::{
    ast::Cycle,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Context, EvalResult, Signal},
        scope::{FrameId, FrameKind},
    },
};

impl Context<'_> {
    /// Executes an `IM IN YR` loop.
    ///
    /// The opening and closing labels must match; this is checked before the
    /// body runs even once. The body runs in a single child frame that is kept
    /// across iterations, so variables declared in one iteration are still
    /// visible in the next. The loop only ends through `GTFO`.
    ///
    /// # Parameters
    /// - `cycle`: The loop node.
    /// - `frame`: The frame enclosing the loop.
    ///
    /// # Returns
    /// `Signal::Continue` once the body breaks out.
    ///
    /// # Errors
    /// - `LoopLabelMismatch` if the labels differ.
    /// - `ReturnInsideLoop` if the body executes `FOUND YR`.
    /// - Propagates any error raised by the body.
    pub(crate) fn exec_cycle(&mut self, cycle: &Cycle, frame: FrameId) -> EvalResult<Signal> {
        if cycle.label != cycle.end_label {
            return Err(RuntimeError::LoopLabelMismatch { start: cycle.label.clone(),
                                                         end:   cycle.end_label.clone(),
                                                         line:  cycle.line, });
        }

        trace!(label = %cycle.label, line = cycle.line, "entering loop");

        let loop_frame = self.scopes.push(FrameKind::Loop, Some(frame));
        let result = self.run_cycle(cycle, loop_frame);
        self.scopes.pop(loop_frame);

        trace!(label = %cycle.label, ok = result.is_ok(), "left loop");
        result
    }

    fn run_cycle(&mut self, cycle: &Cycle, frame: FrameId) -> EvalResult<Signal> {
        loop {
            match self.exec_block(&cycle.body, frame)? {
                Signal::Continue => {},
                Signal::Break => return Ok(Signal::Continue),
                Signal::Return => {
                    return Err(RuntimeError::ReturnInsideLoop { label: cycle.label.clone(),
                                                                line:  cycle.line, });
                },
            }
        }
    }
}
