use crate::{
    ast::ComparisonOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::approx_eq,
};

impl Context<'_> {
    /// Evaluates `BOTH SAEM` or `DIFFRINT`.
    ///
    /// Only like kinds can be compared: two YARNs by their text, two TROOFs,
    /// or two numbers. Numbers of mixed kind are compared as NUMBARs within
    /// the NUMBAR epsilon.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidComparison` for any other pairing,
    /// including any comparison with `NOOB`.
    ///
    /// ## Example
    /// ```
    /// use lolcode::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let same = |l: Value, r: Value| {
    ///     Context::eval_comparison(ComparisonOperator::BothSaem, &l, &r, 1).unwrap()
    /// };
    ///
    /// assert_eq!(same(Value::from(5), Value::from(5.0)), Value::from(true));
    /// assert_eq!(same(Value::from(5), Value::from(5.1)), Value::from(false));
    /// assert_eq!(same(Value::from("a"), Value::from("a")), Value::from(true));
    /// assert!(Context::eval_comparison(ComparisonOperator::Diffrint,
    ///                                  &Value::from("1"),
    ///                                  &Value::from(1),
    ///                                  1).is_err());
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let equal = Self::values_equal(left, right, line)?;

        Ok(Value::Troof(match op {
            ComparisonOperator::BothSaem => equal,
            ComparisonOperator::Diffrint => !equal,
        }))
    }

    fn values_equal(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
        match (left, right) {
            (Value::Yarn(a), Value::Yarn(b)) => Ok(a == b),
            (Value::Troof(a), Value::Troof(b)) => Ok(a == b),
            (Value::Numbr(a), Value::Numbr(b)) => Ok(a == b),
            _ if left.type_of().is_numeric() && right.type_of().is_numeric() => {
                Ok(approx_eq(left.to_numbar(line)?, right.to_numbar(line)?))
            },
            _ => Err(RuntimeError::InvalidComparison { left: left.type_of(),
                                                       right: right.type_of(),
                                                       line }),
        }
    }
}
