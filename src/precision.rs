//! Rounding and precision helpers
//!
//! All rounding in the crate goes through [`round_half_away_from_zero`], which
//! rounds in decimal space so that ties like `1.25` are resolved the same way a
//! person writing the number down would resolve them.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{MAX_COUNTED_DIGITS, MAX_FLOAT_DIGITS};

/// Rounds `value` to `digits` decimal places, breaking ties away from zero.
///
/// Non-finite values are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use goniometry::precision::round_half_away_from_zero;
///
/// assert_eq!(round_half_away_from_zero(2.5, 0), 3.0);
/// assert_eq!(round_half_away_from_zero(-2.5, 0), -3.0);
/// assert_eq!(round_half_away_from_zero(1.25, 1), 1.3);
/// ```
pub fn round_half_away_from_zero(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Smallest number of decimal places that reproduces `value` when rounded.
///
/// Values that need more than 17 places report 17.
pub fn count_decimal_places(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    (0..MAX_COUNTED_DIGITS)
        .find(|&digits| round_half_away_from_zero(value, digits) == value)
        .unwrap_or(MAX_COUNTED_DIGITS)
}

/// Limits a requested precision to the digits an f64 can meaningfully hold.
pub fn clamp_precision(requested: u32) -> u32 {
    requested.min(MAX_FLOAT_DIGITS)
}
