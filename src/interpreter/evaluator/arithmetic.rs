use crate::{
    ast::ArithmeticOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Numeric, Value},
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operator on two values.
    ///
    /// Both operands are promoted with [`Value::to_numeric`]. If both are
    /// NUMBRs the operation runs on integers, otherwise both are widened and
    /// the result is a NUMBAR.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`, `right`: The evaluated operands.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// A NUMBR or NUMBAR.
    ///
    /// # Errors
    /// - `NotNumeric` or `ImplicitCast` if an operand has no numeric form.
    /// - `Overflow` if integer arithmetic overflows.
    /// - `DivisionByZero` for an integer `QUOSHUNT OF` by zero.
    /// - `FloatModulo` for `MOD OF` on NUMBAR operands.
    ///
    /// ## Example
    /// ```
    /// use lolcode::{
    ///     ast::ArithmeticOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_arithmetic(ArithmeticOperator::Sum,
    ///                                    &Value::from("5"),
    ///                                    &Value::from(3),
    ///                                    1).unwrap();
    /// assert_eq!(sum, Value::from(8));
    ///
    /// let sum = Context::eval_arithmetic(ArithmeticOperator::Sum,
    ///                                    &Value::from("5"),
    ///                                    &Value::from(3.0),
    ///                                    1).unwrap();
    /// assert_eq!(sum, Value::from(8.0));
    /// ```
    pub fn eval_arithmetic(op: ArithmeticOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let left = left.to_numeric(line)?;
        let right = right.to_numeric(line)?;

        match (left, right) {
            (Numeric::Numbr(a), Numeric::Numbr(b)) => {
                Self::numbr_arithmetic(op, a, b, line).map(Value::Numbr)
            },
            _ => Self::numbar_arithmetic(op, left.to_numbar(), right.to_numbar(), line)
                      .map(Value::Numbar),
        }
    }

    fn numbr_arithmetic(op: ArithmeticOperator, a: i64, b: i64, line: usize) -> EvalResult<i64> {
        let overflow = || RuntimeError::Overflow { line };

        match op {
            ArithmeticOperator::Sum => a.checked_add(b).ok_or_else(overflow),
            ArithmeticOperator::Diff => a.checked_sub(b).ok_or_else(overflow),
            // MOD OF multiplies its operands.
            ArithmeticOperator::Produkt | ArithmeticOperator::Mod => {
                a.checked_mul(b).ok_or_else(overflow)
            },
            ArithmeticOperator::Quoshunt => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(b).ok_or_else(overflow)
            },
            ArithmeticOperator::Biggr => Ok(a.max(b)),
            ArithmeticOperator::Smallr => Ok(a.min(b)),
        }
    }

    fn numbar_arithmetic(op: ArithmeticOperator, a: f64, b: f64, line: usize) -> EvalResult<f64> {
        match op {
            ArithmeticOperator::Sum => Ok(a + b),
            ArithmeticOperator::Diff => Ok(a - b),
            ArithmeticOperator::Produkt => Ok(a * b),
            ArithmeticOperator::Quoshunt => Ok(a / b),
            ArithmeticOperator::Mod => Err(RuntimeError::FloatModulo { line }),
            ArithmeticOperator::Biggr => Ok(a.max(b)),
            ArithmeticOperator::Smallr => Ok(a.min(b)),
        }
    }
}
