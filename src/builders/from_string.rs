//! Builds an angle from its textual representation.

use log::trace;

use super::{check_sexagesimal, AngleBuilder, AngleData};
use crate::angle::Direction;
use crate::constants::DEFAULT_SECONDS_PRECISION;
use crate::errors::Result;
use crate::parser::{self, ParsedAngle};
use crate::precision::round_half_away_from_zero;

/// Builder for an angle written as `[-]D° [M'] [S"]`
///
/// # Examples
///
/// ```rust
/// use goniometry::builders::FromString;
/// use goniometry::Angle;
///
/// let angle = Angle::build(FromString::new("-0° 30' 0\"")?)?;
/// assert!(angle.is_clockwise());
/// assert_eq!(angle.get_degrees(), (0, 30, 0.0));
/// # Ok::<(), goniometry::AngleError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FromString {
    measure: String,
    parsed: ParsedAngle,
}

impl FromString {
    /// Parses and validates `measure`.
    ///
    /// Fails with a no-match error when the degrees token is missing and with
    /// an overflow error naming `measure` when a field is out of range.
    pub fn new(measure: impl Into<String>) -> Result<Self> {
        let measure = measure.into();
        let mut parsed = parser::parse(&measure)?;
        parsed.seconds = round_half_away_from_zero(parsed.seconds, DEFAULT_SECONDS_PRECISION);
        let builder = FromString { measure, parsed };
        builder.check_overflow()?;
        Ok(builder)
    }
}

impl AngleBuilder for FromString {
    fn check_overflow(&self) -> Result<()> {
        check_sexagesimal(
            self.parsed.degrees,
            self.parsed.minutes,
            self.parsed.seconds,
            &self.measure,
        )
    }

    fn fetch_data(self) -> Result<AngleData> {
        trace!("building angle from string {:?}", self.measure);
        let direction = if self.parsed.negative {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        // Bounds were checked in `new`, so the narrowing casts are lossless
        Ok(AngleData::sexagesimal(
            self.parsed.degrees as u32,
            self.parsed.minutes as u32,
            self.parsed.seconds,
            direction,
        ))
    }
}
