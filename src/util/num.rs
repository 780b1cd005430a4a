/// Tolerance used when comparing or truth-testing NUMBAR values.
///
/// Equal to the single-precision machine epsilon so that values which differ
/// only by accumulated rounding still compare equal.
pub const NUMBAR_EPSILON: f64 = f32::EPSILON as f64;

/// Number of digits printed after the decimal point of a NUMBAR.
pub const NUMBAR_PRECISION: usize = 6;

/// Parses a YARN as a NUMBR.
///
/// The whole string must be a decimal integer with an optional leading sign.
/// Surrounding whitespace and trailing characters make the parse fail.
///
/// ## Example
/// ```
/// use lolcode::util::num::parse_numbr;
///
/// assert_eq!(parse_numbr("42"), Some(42));
/// assert_eq!(parse_numbr("-7"), Some(-7));
/// assert_eq!(parse_numbr("5.0"), None);
/// assert_eq!(parse_numbr(" 5"), None);
/// ```
#[must_use]
pub fn parse_numbr(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// Parses a YARN as a NUMBAR.
///
/// Accepts an optional sign, digits with an optional fractional part and an
/// optional exponent. Words such as `inf` or `NaN` and out-of-range values
/// are rejected.
///
/// ## Example
/// ```
/// use lolcode::util::num::parse_numbar;
///
/// assert_eq!(parse_numbar("3.25"), Some(3.25));
/// assert_eq!(parse_numbar("5"), Some(5.0));
/// assert_eq!(parse_numbar("1e3"), Some(1000.0));
/// assert_eq!(parse_numbar("inf"), None);
/// assert_eq!(parse_numbar("2.5x"), None);
/// ```
#[must_use]
pub fn parse_numbar(text: &str) -> Option<f64> {
    let well_formed = !text.is_empty()
                      && text.chars()
                             .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !well_formed {
        return None;
    }

    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formats a NUMBAR the way `VISIBLE` prints it: fixed point with six
/// decimals.
///
/// ## Example
/// ```
/// use lolcode::util::num::format_numbar;
///
/// assert_eq!(format_numbar(8.0), "8.000000");
/// assert_eq!(format_numbar(-0.5), "-0.500000");
/// ```
#[must_use]
pub fn format_numbar(value: f64) -> String {
    format!("{value:.prec$}", prec = NUMBAR_PRECISION)
}

/// Widens a NUMBR to a NUMBAR.
///
/// Large magnitudes round to the nearest representable `f64`, which matches
/// how mixed arithmetic is expected to behave.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn numbr_to_numbar(value: i64) -> f64 {
    value as f64
}

/// Truncates a NUMBAR toward zero.
///
/// Values outside the `i64` range saturate and `NaN` becomes `0`.
///
/// ## Example
/// ```
/// use lolcode::util::num::numbar_to_numbr;
///
/// assert_eq!(numbar_to_numbr(3.9), 3);
/// assert_eq!(numbar_to_numbr(-3.9), -3);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn numbar_to_numbr(value: f64) -> i64 {
    value as i64
}

/// Returns `true` if two NUMBARs are equal within [`NUMBAR_EPSILON`].
///
/// ## Example
/// ```
/// use lolcode::util::num::approx_eq;
///
/// assert!(approx_eq(5.0, 5.0));
/// assert!(!approx_eq(5.0, 5.1));
/// ```
#[must_use]
pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < NUMBAR_EPSILON
}
