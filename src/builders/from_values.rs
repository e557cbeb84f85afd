//! Builds an angle from degrees, minutes, seconds and a direction.

use log::trace;

use super::{check_sexagesimal, AngleBuilder, AngleData};
use crate::angle::Direction;
use crate::constants::DEFAULT_SECONDS_PRECISION;
use crate::errors::Result;
use crate::precision::round_half_away_from_zero;

/// Builder for an angle given in discrete sexagesimal values
///
/// Magnitudes are taken as absolute values, so the sign of an angle can only
/// come from `direction`. Seconds are rounded to one decimal place.
///
/// # Examples
///
/// ```rust
/// use goniometry::builders::FromValues;
/// use goniometry::{Angle, Direction};
///
/// let angle = Angle::build(FromValues::new(12, 30, 15.25, Direction::Clockwise)?)?;
/// assert_eq!(angle.get_degrees(), (-12, 30, 15.3));
/// # Ok::<(), goniometry::AngleError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FromValues {
    degrees: u32,
    minutes: u32,
    seconds: f64,
    direction: Direction,
}

impl FromValues {
    /// Creates a validated builder.
    ///
    /// Fails with an overflow error when degrees exceed 360, minutes exceed 59,
    /// seconds round to 60 or more, or a 360° angle carries minutes or seconds.
    pub fn new(degrees: i32, minutes: i32, seconds: f64, direction: impl Into<Direction>) -> Result<Self> {
        let builder = FromValues {
            degrees: degrees.unsigned_abs(),
            minutes: minutes.unsigned_abs(),
            seconds: round_half_away_from_zero(seconds.abs(), DEFAULT_SECONDS_PRECISION),
            direction: direction.into(),
        };
        builder.check_overflow()?;
        Ok(builder)
    }

    fn describe(&self) -> String {
        format!("{}° {}' {}\"", self.degrees, self.minutes, self.seconds)
    }
}

impl AngleBuilder for FromValues {
    fn check_overflow(&self) -> Result<()> {
        check_sexagesimal(
            u64::from(self.degrees),
            u64::from(self.minutes),
            self.seconds,
            &self.describe(),
        )
    }

    fn fetch_data(self) -> Result<AngleData> {
        trace!("building angle from values {}", self.describe());
        Ok(AngleData::sexagesimal(
            self.degrees,
            self.minutes,
            self.seconds,
            self.direction,
        ))
    }
}
