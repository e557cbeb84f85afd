//! Angle builders
//!
//! Each builder takes one kind of input, validates it on construction and
//! turns it into the canonical [`AngleData`] tuple an [`Angle`](crate::Angle)
//! is made from. A builder is consumed by [`AngleBuilder::fetch_data`], so it
//! cannot be reused once it has produced its data.
//!
//! # Main Components
//!
//! - `from_values`: discrete degrees, minutes, seconds and direction
//! - `from_decimal`: decimal degrees
//! - `from_radian`: radians, delegating to `from_decimal`
//! - `from_string`: the textual form, through [`crate::parser`]
//! - `sum`: relative and absolute sums of two angles

pub mod from_decimal;
pub mod from_radian;
pub mod from_string;
pub mod from_values;
pub mod sum;

pub use self::from_decimal::FromDecimal;
pub use self::from_radian::FromRadian;
pub use self::from_string::FromString;
pub use self::from_values::FromValues;
pub use self::sum::{AbsoluteSum, RelativeSum, SumBuilder};

use crate::angle::Direction;
use crate::constants::{DEFAULT_SECONDS_PRECISION, MAX_DEGREES, MAX_MINUTES, MAX_SECONDS};
use crate::errors::{AngleError, AngleField, Result};

/// How an angle is constructed from one kind of input
pub trait AngleBuilder {
    /// Validates the builder's inputs against the angle bounds.
    fn check_overflow(&self) -> Result<()>;

    /// Consumes the builder and produces the canonical angle data.
    fn fetch_data(self) -> Result<AngleData>;
}

/// The canonical tuple every builder normalizes its input into
///
/// Magnitudes are unsigned; the sign lives in `direction`. Provenance fields
/// left as `None` are derived when the angle is created.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleData {
    pub(crate) degrees: u32,
    pub(crate) minutes: u32,
    pub(crate) seconds: f64,
    pub(crate) direction: Direction,
    pub(crate) suggested_decimal_precision: Option<u32>,
    pub(crate) original_decimal: Option<f64>,
    pub(crate) original_seconds_precision: Option<u32>,
    pub(crate) original_radian: Option<f64>,
    pub(crate) original_radian_precision: Option<u32>,
}

impl AngleData {
    /// Sexagesimal data with no provenance; a null magnitude is always counterclockwise.
    pub(crate) fn sexagesimal(degrees: u32, minutes: u32, seconds: f64, direction: Direction) -> Self {
        let direction = if degrees == 0 && minutes == 0 && seconds == 0.0 {
            Direction::CounterClockwise
        } else {
            direction
        };
        AngleData {
            degrees,
            minutes,
            seconds,
            direction,
            suggested_decimal_precision: None,
            original_decimal: None,
            original_seconds_precision: None,
            original_radian: None,
            original_radian_precision: None,
        }
    }

    pub(crate) fn with_suggested_decimal_precision(mut self, precision: u32) -> Self {
        self.suggested_decimal_precision = Some(precision);
        self
    }

    pub(crate) fn with_original_decimal(mut self, decimal: f64) -> Self {
        self.original_decimal = Some(decimal);
        self
    }

    pub(crate) fn with_seconds_precision(mut self, precision: u32) -> Self {
        self.original_seconds_precision = Some(precision);
        self
    }

    pub(crate) fn with_original_radian(mut self, radian: f64, precision: u32) -> Self {
        self.original_radian = Some(radian);
        self.original_radian_precision = Some(precision);
        self
    }

    /// Degrees magnitude
    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    /// Minutes magnitude
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds magnitude
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Rotation direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Suggested decimal precision, if the builder supplied one
    pub fn suggested_decimal_precision(&self) -> Option<u32> {
        self.suggested_decimal_precision
    }

    /// Decimal value the builder started from or computed
    pub fn original_decimal(&self) -> Option<f64> {
        self.original_decimal
    }

    /// Seconds precision, if the builder supplied one
    pub fn original_seconds_precision(&self) -> Option<u32> {
        self.original_seconds_precision
    }

    /// Radian value the builder started from
    pub fn original_radian(&self) -> Option<f64> {
        self.original_radian
    }

    /// Decimal places of the original radian value
    pub fn original_radian_precision(&self) -> Option<u32> {
        self.original_radian_precision
    }
}

/// Bounds shared by the values and string builders.
///
/// `seconds` must already be rounded to the builder's seconds precision.
pub(crate) fn check_sexagesimal(degrees: u64, minutes: u64, seconds: f64, input: &str) -> Result<()> {
    if degrees > u64::from(MAX_DEGREES) {
        return Err(AngleError::overflow(
            AngleField::Degrees,
            degrees as f64,
            f64::from(MAX_DEGREES),
            input,
        ));
    }
    if minutes >= u64::from(MAX_MINUTES) {
        return Err(AngleError::overflow(
            AngleField::Minutes,
            minutes as f64,
            f64::from(MAX_MINUTES - 1),
            input,
        ));
    }
    if seconds.is_nan() || seconds >= f64::from(MAX_SECONDS) {
        return Err(AngleError::overflow(
            AngleField::Seconds,
            seconds,
            max_rounded_seconds(),
            input,
        ));
    }
    if degrees == u64::from(MAX_DEGREES) && (minutes > 0 || seconds > 0.0) {
        let total = degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0;
        return Err(AngleError::overflow(
            AngleField::Degrees,
            total,
            f64::from(MAX_DEGREES),
            input,
        ));
    }
    Ok(())
}

/// Largest seconds value representable at the default seconds precision (59.9).
fn max_rounded_seconds() -> f64 {
    f64::from(MAX_SECONDS) - 10f64.powi(-(DEFAULT_SECONDS_PRECISION as i32))
}
