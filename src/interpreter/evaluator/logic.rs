use crate::{
    ast::{Expr, LogicalOperator, VariadicOperator},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            scope::FrameId,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `BOTH OF`, `EITHER OF` or `WON OF`.
    ///
    /// Both operands are always evaluated, left first, and converted with
    /// [`Value::to_troof`].
    pub(crate) fn eval_logical(&mut self,
                               op: LogicalOperator,
                               left: &Expr,
                               right: &Expr,
                               frame: FrameId)
                               -> EvalResult<Value> {
        let left = self.eval(left, frame)?.to_troof();
        let right = self.eval(right, frame)?.to_troof();

        Ok(Value::Troof(match op {
            LogicalOperator::BothOf => left && right,
            LogicalOperator::EitherOf => left || right,
            LogicalOperator::WonOf => left != right,
        }))
    }

    /// Evaluates `ALL OF` or `ANY OF`.
    ///
    /// Operands are evaluated left to right and evaluation stops as soon as
    /// the result is known: at the first false operand for `ALL OF`, at the
    /// first true one for `ANY OF`.
    pub(crate) fn eval_variadic(&mut self,
                                op: VariadicOperator,
                                operands: &[Expr],
                                frame: FrameId)
                                -> EvalResult<Value> {
        let decisive = op == VariadicOperator::AnyOf;

        for operand in operands {
            if self.eval(operand, frame)?.to_troof() == decisive {
                return Ok(Value::Troof(decisive));
            }
        }

        Ok(Value::Troof(!decisive))
    }
}
