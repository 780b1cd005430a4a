/// Numeric parsing, conversion and formatting helpers.
///
/// This module provides the strict, full-string number parsers used when a
/// YARN is interpreted as a NUMBR or NUMBAR, together with the conversions
/// between `i64` and `f64` and the canonical text form of a NUMBAR.
///
/// Parsers return `Option`, leaving it to the caller to decide whether a
/// failure is a fatal implicit-conversion error or a failed explicit cast.
pub mod num;
/// Native stack growth for deep recursion.
pub mod stack;
