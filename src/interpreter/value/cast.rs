use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, types::Type},
    },
};

/// Explicitly casts a value to `target`.
///
/// Used by the `MAEK` expression and the `IS NOW A` statement. Casting to
/// `NOOB`, `TROOF` or `YARN` always succeeds. Casting to `NUMBR` or `NUMBAR`
/// fails only when a YARN does not parse as the requested number.
///
/// # Parameters
/// - `target`: The requested type.
/// - `value`: The value to convert.
/// - `line`: Source code line number for error reporting.
///
/// # Returns
/// - `Ok(Value)`: The converted value.
/// - `Err(RuntimeError::CastFailed)`: If a numeric parse failed.
///
/// ## Example
/// ```
/// use lolcode::interpreter::value::{cast::cast_value, core::Value, types::Type};
///
/// assert_eq!(cast_value(Type::Numbr, &Value::from("42"), 1).unwrap(), Value::from(42));
/// assert_eq!(cast_value(Type::Yarn, &Value::Noob, 1).unwrap(), Value::from(""));
/// assert_eq!(cast_value(Type::Noob, &Value::from(7), 1).unwrap(), Value::Noob);
/// assert!(cast_value(Type::Numbar, &Value::from("abc"), 1).is_err());
/// ```
pub fn cast_value(target: Type, value: &Value, line: usize) -> EvalResult<Value> {
    let cast = match target {
        Type::Noob => Some(Value::Noob),
        Type::Troof => Some(Value::Troof(value.to_troof())),
        Type::Numbr => value.to_numbr_explicit().map(Value::Numbr),
        Type::Numbar => value.to_numbar_explicit().map(Value::Numbar),
        Type::Yarn => Some(Value::from(value.to_yarn_explicit())),
    };

    cast.ok_or(RuntimeError::CastFailed { target, line })
}
