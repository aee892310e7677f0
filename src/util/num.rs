/// The value a comparison yields when it holds.
pub const TRUE: f64 = 1.0;
/// The value a comparison yields when it does not hold.
pub const FALSE: f64 = 0.0;

/// Converts a truth value into the language's numeric representation.
///
/// ## Example
/// ```
/// use emojilang::util::num::bool_to_number;
///
/// assert_eq!(bool_to_number(true), 1.0);
/// assert_eq!(bool_to_number(false), 0.0);
/// ```
#[must_use]
pub const fn bool_to_number(value: bool) -> f64 {
    if value { TRUE } else { FALSE }
}

/// Returns `true` for every value except zero.
///
/// NaN is not equal to zero and therefore counts as true.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_truthy(value: f64) -> bool {
    value != FALSE
}

/// Formats a number the way print statements display it.
///
/// Finite values use the shortest decimal form that reads back as the same
/// `f64` and always shows a fractional part or an exponent. Magnitudes from
/// `1e-4` up to, but excluding, `1e16` are written out in full; others use
/// a lower-case `e` exponent. Infinities print as `Infinity` and
/// `-Infinity`, NaN as `NaN`.
///
/// ## Example
/// ```
/// use emojilang::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5.0");
/// assert_eq!(format_number(0.1), "0.1");
/// assert_eq!(format_number(1e7), "10000000.0");
/// assert_eq!(format_number(1e16), "1e16");
/// assert_eq!(format_number(1.2345678901234569e23), "1.2345678901234569e23");
/// assert_eq!(format_number(0.0001), "0.0001");
/// assert_eq!(format_number(1e-7), "1e-7");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        format!("{value:?}")
    }
}
