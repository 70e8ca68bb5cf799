//! Decimal rounding and integer truncation for presentation values.

/// Round `value` to `places` decimal places.
///
/// Rounding works on the exact decimal expansion of `value`: a float stored
/// just below a half rounds down and exact halves go to the even digit.
///
/// # Examples
/// ```
/// use uhi_core::rounding::round_to;
///
/// assert_eq!(round_to(0.068_571, 3), 0.069);
/// assert_eq!(round_to(2.999, 2), 3.0);
/// assert_eq!(round_to(0.0625, 3), 0.062);
/// ```
#[must_use]
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Truncate a non-negative amount towards zero.
///
/// Negative and NaN inputs map to `0`; values beyond `u64::MAX` saturate.
///
/// # Examples
/// ```
/// use uhi_core::rounding::truncate;
///
/// assert_eq!(truncate(66.67), 66);
/// assert_eq!(truncate(-1.0), 0);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "saturating float-to-integer truncation is the intended behaviour"
)]
pub fn truncate(value: f64) -> u64 {
    value.trunc() as u64
}
