//! # Angle Representation Module
//!
//! This module provides a bounded planar angle (−360°…+360°) that preserves
//! the precision and format it was originally given in.
//!
//! ## Design Philosophy
//!
//! An `Angle` is stored in sexagesimal form (degrees, minutes, seconds) with
//! the sign held separately as a [`Direction`]. Alongside the canonical
//! fields it keeps provenance: the decimal or radian value it was built from
//! and the number of digits that value carried. Conversions back to the
//! original format return the original value exactly instead of recomputing
//! it from the sexagesimal fields.
//!
//! ## Construction
//!
//! Angles are only created by a builder (see [`crate::builders`]). Every
//! builder validates its input completely before the angle exists, so a
//! partially constructed angle is never observable. Once built an angle is
//! immutable; [`Angle::toggle_direction`] and the sums return new angles.
//!
//! ## Examples
//!
//! ```rust
//! use goniometry::{Angle, Direction};
//!
//! let angle = Angle::from_decimal(-12.5)?;
//! assert_eq!(angle.get_degrees(), (-12, 30, 0.0));
//! assert_eq!(angle.to_decimal(None), -12.5);
//! assert_eq!(angle.to_string(), "-12° 30' 0\"");
//!
//! let right = Angle::from_values(90, 0, 0.0, Direction::CounterClockwise)?;
//! assert!(right.is_greater_than(&angle, None)?);
//! # Ok::<(), goniometry::AngleError>(())
//! ```

mod compare;
mod direction;

pub use self::compare::Operand;
pub use self::direction::Direction;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::builders::{AngleBuilder, AngleData, FromDecimal, FromRadian, FromString, FromValues};
use crate::constants::{DECIMAL_PRECISION_OFFSET, DEG2RAD, MAX_DEGREES, MAX_MINUTES, MAX_SECONDS};
use crate::errors::{AngleError, Result};
use crate::operations::Sum;
use crate::precision::{clamp_precision, count_decimal_places, round_half_away_from_zero};

/// Sexagesimal fields with the sign folded into `degrees`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignedDegrees {
    pub degrees: i32,
    pub minutes: u32,
    pub seconds: f64,
}

/// A planar angle between −360° and +360°
///
/// # Invariants
///
/// - `degrees ≤ 360`, `minutes < 60`, `0 ≤ seconds < 60`; 360° only with
///   zero minutes and seconds
/// - a null angle (0° 0' 0") is always counterclockwise
/// - the decimal magnitude never exceeds 360 and the radian magnitude never
///   exceeds 2π
#[derive(Debug, Clone, PartialEq)]
pub struct Angle {
    degrees: u32,
    minutes: u32,
    seconds: f64,
    direction: Direction,
    suggested_decimal_precision: u32,
    original_seconds_precision: u32,
    original_decimal: Option<f64>,
    original_radian: Option<f64>,
    original_radian_precision: Option<u32>,
}

impl Angle {
    /// Creates an angle from any builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use goniometry::builders::FromDecimal;
    /// use goniometry::Angle;
    ///
    /// let angle = Angle::build(FromDecimal::new(45.25)?)?;
    /// assert_eq!(angle.minutes(), 15);
    /// # Ok::<(), goniometry::AngleError>(())
    /// ```
    pub fn build<B: AngleBuilder>(builder: B) -> Result<Self> {
        Ok(Self::from_data(builder.fetch_data()?))
    }

    /// Fills in the provenance the builder left unset.
    pub(crate) fn from_data(data: AngleData) -> Self {
        let original_seconds_precision = data
            .original_seconds_precision
            .unwrap_or_else(|| count_decimal_places(data.seconds));
        let suggested_decimal_precision = data
            .suggested_decimal_precision
            .unwrap_or_else(|| clamp_precision(original_seconds_precision + DECIMAL_PRECISION_OFFSET));
        Angle {
            degrees: data.degrees,
            minutes: data.minutes,
            seconds: data.seconds,
            direction: data.direction,
            suggested_decimal_precision,
            original_seconds_precision,
            original_decimal: data.original_decimal,
            original_radian: data.original_radian,
            original_radian_precision: data.original_radian_precision,
        }
    }

    /// Creates an angle from degrees, minutes, seconds and direction.
    ///
    /// Magnitudes are taken as absolute values; seconds are rounded to one
    /// decimal place.
    pub fn from_values(
        degrees: i32,
        minutes: i32,
        seconds: f64,
        direction: impl Into<Direction>,
    ) -> Result<Self> {
        Self::build(FromValues::new(degrees, minutes, seconds, direction)?)
    }

    /// Creates an angle from decimal degrees in `[-360, 360]`.
    pub fn from_decimal(decimal: f64) -> Result<Self> {
        Self::build(FromDecimal::new(decimal)?)
    }

    /// Creates an angle from radians in `[-2π, 2π]`.
    pub fn from_radian(radian: f64) -> Result<Self> {
        Self::build(FromRadian::new(radian)?)
    }

    /// Creates an angle from its textual form, e.g. `-12° 30' 15.5"`.
    pub fn from_string(measure: &str) -> Result<Self> {
        Self::build(FromString::new(measure)?)
    }

    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Decimal places used by [`to_decimal`](Self::to_decimal) when no precision is given
    pub fn suggested_decimal_precision(&self) -> u32 {
        self.suggested_decimal_precision
    }

    /// Decimal places the seconds were specified or derived with
    pub fn original_seconds_precision(&self) -> u32 {
        self.original_seconds_precision
    }

    /// The decimal value this angle was built from, if any
    pub fn original_decimal(&self) -> Option<f64> {
        self.original_decimal
    }

    /// The radian value this angle was built from, if any
    pub fn original_radian(&self) -> Option<f64> {
        self.original_radian
    }

    /// Decimal places of the original radian value
    pub fn original_radian_precision(&self) -> Option<u32> {
        self.original_radian_precision
    }

    /// Returns `(degrees, minutes, seconds)` with the sign folded into degrees.
    ///
    /// A clockwise angle below one degree cannot show its sign here
    /// (`-0` is `0`); use [`is_clockwise`](Self::is_clockwise) for that.
    pub fn get_degrees(&self) -> (i32, u32, f64) {
        (
            i32::from(self.direction) * self.degrees as i32,
            self.minutes,
            self.seconds,
        )
    }

    /// Named form of [`get_degrees`](Self::get_degrees).
    pub fn get_degrees_named(&self) -> SignedDegrees {
        let (degrees, minutes, seconds) = self.get_degrees();
        SignedDegrees {
            degrees,
            minutes,
            seconds,
        }
    }

    pub fn is_clockwise(&self) -> bool {
        self.direction == Direction::Clockwise
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.direction == Direction::CounterClockwise
    }

    /// True for 0° 0' 0"
    pub fn is_null_angle(&self) -> bool {
        self.degrees == 0 && self.minutes == 0 && self.seconds == 0.0
    }

    /// True for exactly 360° 0' 0" in either direction
    pub fn is_full_angle(&self) -> bool {
        self.degrees == MAX_DEGREES && self.minutes == 0 && self.seconds == 0.0
    }

    /// Returns a copy rotating the other way.
    ///
    /// The receiver is left untouched. A null angle stays counterclockwise.
    pub fn toggle_direction(&self) -> Angle {
        if self.is_null_angle() {
            return self.clone();
        }
        Angle {
            direction: self.direction.toggled(),
            original_decimal: self.original_decimal.map(|d| -d),
            original_radian: self.original_radian.map(|r| -r),
            ..self.clone()
        }
    }

    /// Decimal degrees of this angle.
    ///
    /// With `None`, an angle built from a decimal (or from a sum) returns that
    /// value verbatim; any other angle is rounded to its suggested precision.
    /// An explicit precision always recomputes from the sexagesimal fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use goniometry::Angle;
    ///
    /// let angle = Angle::from_string("10° 20' 30\"")?;
    /// assert_eq!(angle.to_decimal(Some(2)), 10.34);
    /// assert_eq!(angle.to_decimal(Some(0)), 10.0);
    /// # Ok::<(), goniometry::AngleError>(())
    /// ```
    pub fn to_decimal(&self, precision: Option<u32>) -> f64 {
        if let (None, Some(decimal)) = (precision, self.original_decimal) {
            return decimal;
        }
        let digits = self.resolve_precision(precision);
        let magnitude = f64::from(self.degrees)
            + f64::from(self.minutes) / f64::from(MAX_MINUTES)
            + self.seconds / f64::from(MAX_MINUTES * MAX_SECONDS);
        self.direction.sign() * round_half_away_from_zero(magnitude, digits)
    }

    /// Radians of this angle.
    ///
    /// Prefers the original radian, then the original decimal, then the
    /// computed decimal. Rounding happens only when a precision is given.
    pub fn to_radian(&self, precision: Option<u32>) -> f64 {
        let radian = self
            .original_radian
            .unwrap_or_else(|| self.to_decimal(None) * DEG2RAD);
        match precision {
            Some(digits) => round_half_away_from_zero(radian, clamp_precision(digits)),
            None => radian,
        }
    }

    /// Total seconds of the magnitude, `degrees×3600 + minutes×60 + seconds`, rounded.
    pub fn to_total_seconds(angle: &Angle, precision: u32) -> f64 {
        round_half_away_from_zero(
            f64::from(angle.degrees) * f64::from(MAX_MINUTES * MAX_SECONDS)
                + f64::from(angle.minutes) * f64::from(MAX_SECONDS)
                + angle.seconds,
            clamp_precision(precision),
        )
    }

    /// Sum whose sign follows the algebraic result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use goniometry::{Angle, Direction};
    ///
    /// let a = Angle::from_values(270, 0, 0.0, Direction::CounterClockwise)?;
    /// let b = Angle::from_values(180, 0, 0.0, Direction::CounterClockwise)?;
    /// assert_eq!(a.relative_sum(&b).degrees(), 90);
    /// # Ok::<(), goniometry::AngleError>(())
    /// ```
    pub fn relative_sum(&self, other: &Angle) -> Sum {
        Sum::relative(self, other)
    }

    /// Sum of both magnitudes, always counterclockwise.
    pub fn absolute_sum(&self, other: &Angle) -> Sum {
        Sum::absolute(self, other)
    }

    pub(crate) fn resolve_precision(&self, precision: Option<u32>) -> u32 {
        clamp_precision(precision.unwrap_or(self.suggested_decimal_precision))
    }
}

/// Renders `{sign}{degrees}° {minutes}' {seconds}"`.
///
/// Whole seconds print as an integer; otherwise they print with
/// `original_seconds_precision` decimals.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_clockwise() { "-" } else { "" };
        write!(f, "{sign}{}° {}' ", self.degrees, self.minutes)?;
        if self.seconds.fract() == 0.0 {
            write!(f, "{}\"", self.seconds as u32)
        } else {
            write!(
                f,
                "{:.*}\"",
                self.original_seconds_precision as usize, self.seconds
            )
        }
    }
}

impl FromStr for Angle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self> {
        Angle::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ASEC360, MAX_FLOAT_DIGITS, MAX_RADIAN};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn values(degrees: i32, minutes: i32, seconds: f64, direction: Direction) -> Angle {
        Angle::from_values(degrees, minutes, seconds, direction).unwrap()
    }

    #[test]
    fn test_get_degrees_folds_sign_into_degrees() {
        let angle = values(10, 20, 30.5, Direction::Clockwise);
        assert_eq!(angle.get_degrees(), (-10, 20, 30.5));
        assert_eq!(
            angle.get_degrees_named(),
            SignedDegrees {
                degrees: -10,
                minutes: 20,
                seconds: 30.5
            }
        );
    }

    #[test]
    fn test_signed_degrees_serialize() {
        let named = values(1, 2, 3.5, Direction::Clockwise).get_degrees_named();
        let json = serde_json::to_value(named).unwrap();
        assert_eq!(json["degrees"], -1);
        assert_eq!(json["minutes"], 2);
        assert_eq!(json["seconds"], 3.5);
    }

    #[test]
    fn test_direction_predicates() {
        let angle = values(10, 0, 0.0, Direction::Clockwise);
        assert!(angle.is_clockwise());
        assert!(!angle.is_counter_clockwise());
        assert!(values(10, 0, 0.0, Direction::CounterClockwise).is_counter_clockwise());
    }

    #[test]
    fn test_full_and_null_predicates() {
        assert!(values(360, 0, 0.0, Direction::Clockwise).is_full_angle());
        assert!(!values(359, 59, 59.9, Direction::CounterClockwise).is_full_angle());
        assert!(values(0, 0, 0.0, Direction::Clockwise).is_null_angle());
        assert!(!values(0, 0, 0.1, Direction::Clockwise).is_null_angle());
    }

    #[test]
    fn test_just_below_a_full_turn_is_not_full() {
        let angle = Angle::from_decimal(359.99999999).unwrap();
        assert_eq!((angle.degrees(), angle.minutes()), (359, 59));
        assert!(!angle.is_full_angle());
        assert_eq!(Angle::to_total_seconds(&angle, 1), ASEC360);

        let sum = angle.relative_sum(&angle);
        assert!(!sum.is_full_angle());
        assert_eq!(sum.degrees(), 359);
        assert_abs_diff_eq!(sum.to_decimal(None), 359.99999998, epsilon = 1e-9);
    }

    #[test]
    fn test_toggle_direction_returns_new_angle() {
        let angle = Angle::from_decimal(20.5).unwrap();
        let toggled = angle.toggle_direction();
        assert!(angle.is_counter_clockwise());
        assert!(toggled.is_clockwise());
        assert_eq!(toggled.to_decimal(None), -20.5);
        assert_eq!(toggled.toggle_direction(), angle);
    }

    #[test]
    fn test_toggle_direction_of_null_angle() {
        let angle = values(0, 0, 0.0, Direction::CounterClockwise);
        assert!(angle.toggle_direction().is_counter_clockwise());
    }

    #[test]
    fn test_to_decimal_returns_original_when_unprompted() {
        let angle = Angle::from_decimal(123.456789012345).unwrap();
        assert_eq!(angle.to_decimal(None), 123.456789012345);
        assert_eq!(angle.to_decimal(Some(2)), 123.46);
    }

    #[test]
    fn test_to_decimal_uses_suggested_precision() {
        let angle = values(10, 20, 30.0, Direction::Clockwise);
        assert_eq!(angle.suggested_decimal_precision(), 6);
        assert_eq!(angle.to_decimal(None), -10.341667);
        assert_eq!(angle.suggested_decimal_precision(), 6);
    }

    #[test]
    fn test_to_decimal_precision_is_clamped() {
        let angle = values(10, 20, 30.0, Direction::CounterClockwise);
        let clamped = angle.to_decimal(Some(MAX_FLOAT_DIGITS));
        assert_eq!(angle.to_decimal(Some(40)), clamped);
    }

    #[test]
    fn test_to_radian_prefers_original_radian() {
        let angle = Angle::from_radian(PI / 3.0).unwrap();
        assert_eq!(angle.to_radian(None), PI / 3.0);
        assert_eq!(angle.to_radian(Some(3)), 1.047);
    }

    #[test]
    fn test_to_radian_from_decimal() {
        let angle = Angle::from_decimal(180.0).unwrap();
        assert_eq!(angle.to_radian(None), 180.0 * DEG2RAD);

        let angle = values(90, 0, 0.0, Direction::Clockwise);
        assert_abs_diff_eq!(angle.to_radian(None), -PI / 2.0, epsilon = 1e-15);
        assert_eq!(angle.to_radian(Some(2)), -1.57);
    }

    #[test]
    fn test_full_turn_radian() {
        let angle = values(360, 0, 0.0, Direction::CounterClockwise);
        assert_abs_diff_eq!(angle.to_radian(None), MAX_RADIAN, epsilon = 1e-12);
    }

    #[test]
    fn test_to_total_seconds() {
        let angle = values(1, 1, 1.5, Direction::Clockwise);
        assert_eq!(Angle::to_total_seconds(&angle, 1), 3661.5);
        assert_eq!(Angle::to_total_seconds(&angle, 0), 3662.0);
    }

    #[test]
    fn test_seconds_precision_defaults_to_counted_places() {
        assert_eq!(values(1, 0, 0.0, 1.into()).original_seconds_precision(), 0);
        assert_eq!(values(1, 0, 2.5, 1.into()).original_seconds_precision(), 1);
        assert_eq!(values(1, 0, 2.5, 1.into()).suggested_decimal_precision(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(values(10, 20, 30.0, Direction::CounterClockwise).to_string(), "10° 20' 30\"");
        assert_eq!(values(10, 20, 30.5, Direction::Clockwise).to_string(), "-10° 20' 30.5\"");
        assert_eq!(values(0, 0, 0.0, Direction::Clockwise).to_string(), "0° 0' 0\"");
        assert_eq!(values(360, 0, 0.0, Direction::Clockwise).to_string(), "-360° 0' 0\"");
    }

    #[test]
    fn test_display_uses_seconds_precision() {
        // 0.0001° = 0.36", shown with the decimal builder's 10-digit seconds precision
        let angle = Angle::from_decimal(0.0001).unwrap();
        assert_eq!(angle.original_seconds_precision(), 10);
        assert_eq!(angle.to_string(), "0° 0' 0.3600000000\"");
    }

    #[test]
    fn test_from_str() {
        let angle: Angle = "-45° 30' 0\"".parse().unwrap();
        assert_eq!(angle.get_degrees(), (-45, 30, 0.0));
        assert!("nonsense".parse::<Angle>().is_err());
    }
}
