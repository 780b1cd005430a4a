use std::{fmt, rc::Rc};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::types::Type},
    util::num::{
        NUMBAR_EPSILON, format_numbar, numbar_to_numbr, numbr_to_numbar, parse_numbar, parse_numbr,
    },
};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable once created. YARNs share their text through an
/// `Rc<str>`, so cloning a value never copies string data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The untyped value `NOOB`.
    #[default]
    Noob,
    /// A boolean: `WIN` or `FAIL`.
    Troof(bool),
    /// A 64-bit signed integer.
    Numbr(i64),
    /// A 64-bit floating-point number.
    Numbar(f64),
    /// An immutable string.
    Yarn(Rc<str>),
}

/// A value after numeric promotion.
///
/// Produced by [`Value::to_numeric`] for arithmetic operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// The operand is an integer.
    Numbr(i64),
    /// The operand is a float.
    Numbar(f64),
}

impl Numeric {
    /// Elevates the operand to a NUMBAR.
    #[must_use]
    pub const fn to_numbar(self) -> f64 {
        match self {
            Self::Numbr(n) => numbr_to_numbar(n),
            Self::Numbar(f) => f,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Troof(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Numbr(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Numbar(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Yarn(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Yarn(Rc::from(v))
    }
}

impl From<Numeric> for Value {
    fn from(v: Numeric) -> Self {
        match v {
            Numeric::Numbr(n) => Self::Numbr(n),
            Numeric::Numbar(f) => Self::Numbar(f),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Noob => Self::Noob,
            LiteralValue::Troof(b) => Self::Troof(*b),
            LiteralValue::Numbr(n) => Self::Numbr(*n),
            LiteralValue::Numbar(f) => Self::Numbar(*f),
            LiteralValue::Yarn(s) => Self::Yarn(Rc::clone(s)),
        }
    }
}

impl Value {
    /// Returns the type tag of the value.
    ///
    /// ## Example
    /// ```
    /// use lolcode::interpreter::value::{core::Value, types::Type};
    ///
    /// assert_eq!(Value::from(3).type_of(), Type::Numbr);
    /// assert_eq!(Value::Noob.type_of(), Type::Noob);
    /// ```
    #[must_use]
    pub const fn type_of(&self) -> Type {
        match self {
            Self::Noob => Type::Noob,
            Self::Troof(_) => Type::Troof,
            Self::Numbr(_) => Type::Numbr,
            Self::Numbar(_) => Type::Numbar,
            Self::Yarn(_) => Type::Yarn,
        }
    }

    /// Converts the value to a TROOF.
    ///
    /// NUMBRs are true when non-zero, NUMBARs when their magnitude exceeds
    /// the comparison epsilon, YARNs when non-empty. `NOOB` is always false.
    /// This conversion never fails.
    ///
    /// ## Example
    /// ```
    /// use lolcode::interpreter::value::core::Value;
    ///
    /// assert!(Value::from(2).to_troof());
    /// assert!(!Value::from(0.0).to_troof());
    /// assert!(!Value::from("").to_troof());
    /// assert!(!Value::Noob.to_troof());
    /// ```
    #[must_use]
    pub fn to_troof(&self) -> bool {
        match self {
            Self::Noob => false,
            Self::Troof(b) => *b,
            Self::Numbr(n) => *n != 0,
            Self::Numbar(f) => f.abs() > NUMBAR_EPSILON,
            Self::Yarn(s) => !s.is_empty(),
        }
    }

    /// Implicitly converts the value to a YARN.
    ///
    /// Every type except `NOOB` has a text form: TROOFs print as `WIN` or
    /// `FAIL`, NUMBARs with six decimals.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(String)`: The text form.
    /// - `Err(RuntimeError::ImplicitCast)`: If the value is `NOOB`.
    ///
    /// ## Example
    /// ```
    /// use lolcode::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(true).to_yarn(1).unwrap(), "WIN");
    /// assert_eq!(Value::from(2.5).to_yarn(1).unwrap(), "2.500000");
    /// assert!(Value::Noob.to_yarn(1).is_err());
    /// ```
    pub fn to_yarn(&self, line: usize) -> EvalResult<String> {
        match self {
            Self::Noob => Err(RuntimeError::ImplicitCast { from: Type::Noob,
                                                           to: Type::Yarn,
                                                           line }),
            _ => Ok(self.to_yarn_explicit()),
        }
    }

    /// Explicitly converts the value to a YARN. `NOOB` becomes the empty
    /// string.
    #[must_use]
    pub fn to_yarn_explicit(&self) -> String {
        match self {
            Self::Noob => String::new(),
            Self::Troof(b) => String::from(if *b { "WIN" } else { "FAIL" }),
            Self::Numbr(n) => n.to_string(),
            Self::Numbar(f) => format_numbar(*f),
            Self::Yarn(s) => s.to_string(),
        }
    }

    /// Implicitly converts the value to a NUMBR.
    ///
    /// NUMBARs truncate toward zero, YARNs must parse as an integer in full.
    /// TROOF and `NOOB` cannot be widened to a number implicitly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(RuntimeError)`: If no implicit conversion exists or the YARN is
    ///   not an integer.
    pub fn to_numbr(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Numbr(n) => Ok(*n),
            Self::Numbar(f) => Ok(numbar_to_numbr(*f)),
            Self::Yarn(s) => parse_numbr(s).ok_or_else(|| RuntimeError::NotNumeric { value:
                                                                                        s.to_string(),
                                                                                    line }),
            Self::Noob | Self::Troof(_) => Err(RuntimeError::ImplicitCast { from: self.type_of(),
                                                                            to: Type::Numbr,
                                                                            line }),
        }
    }

    /// Explicitly converts the value to a NUMBR.
    ///
    /// Returns `None` only when a YARN does not parse as an integer.
    ///
    /// ## Example
    /// ```
    /// use lolcode::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Noob.to_numbr_explicit(), Some(0));
    /// assert_eq!(Value::from(true).to_numbr_explicit(), Some(1));
    /// assert_eq!(Value::from(-2.7).to_numbr_explicit(), Some(-2));
    /// assert_eq!(Value::from("12").to_numbr_explicit(), Some(12));
    /// assert_eq!(Value::from("1.5").to_numbr_explicit(), None);
    /// ```
    #[must_use]
    pub fn to_numbr_explicit(&self) -> Option<i64> {
        match self {
            Self::Noob => Some(0),
            Self::Troof(b) => Some(i64::from(*b)),
            Self::Numbr(n) => Some(*n),
            Self::Numbar(f) => Some(numbar_to_numbr(*f)),
            Self::Yarn(s) => parse_numbr(s),
        }
    }

    /// Implicitly converts the value to a NUMBAR.
    ///
    /// NUMBRs widen, YARNs must parse as a number in full. TROOF and `NOOB`
    /// cannot be widened to a number implicitly.
    pub fn to_numbar(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Numbr(n) => Ok(numbr_to_numbar(*n)),
            Self::Numbar(f) => Ok(*f),
            Self::Yarn(s) => parse_numbar(s).ok_or_else(|| RuntimeError::NotNumeric { value:
                                                                                         s.to_string(),
                                                                                     line }),
            Self::Noob | Self::Troof(_) => Err(RuntimeError::ImplicitCast { from: self.type_of(),
                                                                            to: Type::Numbar,
                                                                            line }),
        }
    }

    /// Explicitly converts the value to a NUMBAR.
    ///
    /// Returns `None` only when a YARN does not parse as a number.
    #[must_use]
    pub fn to_numbar_explicit(&self) -> Option<f64> {
        match self {
            Self::Noob => Some(0.0),
            Self::Troof(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Numbr(n) => Some(numbr_to_numbar(*n)),
            Self::Numbar(f) => Some(*f),
            Self::Yarn(s) => parse_numbar(s),
        }
    }

    /// Promotes the value to an arithmetic operand.
    ///
    /// NUMBRs and NUMBARs keep their category. A YARN is parsed as a NUMBR
    /// first and as a NUMBAR if that fails. Anything else is an error.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Numeric)`: The promoted operand.
    /// - `Err(RuntimeError)`: If the value has no numeric interpretation.
    ///
    /// ## Example
    /// ```
    /// use lolcode::interpreter::value::core::{Numeric, Value};
    ///
    /// assert_eq!(Value::from("5").to_numeric(1).unwrap(), Numeric::Numbr(5));
    /// assert_eq!(Value::from("5.5").to_numeric(1).unwrap(), Numeric::Numbar(5.5));
    /// assert_eq!(Value::from(3.0).to_numeric(1).unwrap(), Numeric::Numbar(3.0));
    /// assert!(Value::from("five").to_numeric(1).is_err());
    /// assert!(Value::from(true).to_numeric(1).is_err());
    /// ```
    pub fn to_numeric(&self, line: usize) -> EvalResult<Numeric> {
        match self {
            Self::Numbr(n) => Ok(Numeric::Numbr(*n)),
            Self::Numbar(f) => Ok(Numeric::Numbar(*f)),
            Self::Yarn(s) => parse_numbr(s).map(Numeric::Numbr)
                                           .or_else(|| parse_numbar(s).map(Numeric::Numbar))
                                           .ok_or_else(|| RuntimeError::NotNumeric { value:
                                                                                        s.to_string(),
                                                                                    line }),
            Self::Noob | Self::Troof(_) => Err(RuntimeError::ImplicitCast { from: self.type_of(),
                                                                            to: Type::Numbr,
                                                                            line }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noob => f.write_str("NOOB"),
            _ => f.write_str(&self.to_yarn_explicit()),
        }
    }
}
