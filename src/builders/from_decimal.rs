//! Builds an angle from decimal degrees.

use log::trace;

use super::{AngleBuilder, AngleData};
use crate::angle::Direction;
use crate::constants::{DECIMAL_PRECISION_OFFSET, MAX_DEGREES, MAX_MINUTES, MAX_SECONDS};
use crate::errors::{AngleError, AngleField, Result};
use crate::precision::{clamp_precision, count_decimal_places, round_half_away_from_zero};

/// Builder for an angle given in decimal degrees
///
/// The decimal value is kept verbatim, so `to_decimal(None)` on the resulting
/// angle returns exactly what was passed in.
#[derive(Debug, Clone, PartialEq)]
pub struct FromDecimal {
    decimal: f64,
    decimal_precision: u32,
}

impl FromDecimal {
    /// Creates a validated builder; `|decimal|` must not exceed 360.
    pub fn new(decimal: f64) -> Result<Self> {
        let builder = FromDecimal {
            decimal,
            decimal_precision: clamp_precision(count_decimal_places(decimal)),
        };
        builder.check_overflow()?;
        Ok(builder)
    }

    /// Decimal places the input was given with, clamped to the f64 limit
    pub fn decimal_precision(&self) -> u32 {
        self.decimal_precision
    }

    /// Decimal places the derived seconds are rounded to
    pub fn seconds_precision(&self) -> u32 {
        clamp_precision(self.decimal_precision + DECIMAL_PRECISION_OFFSET)
    }
}

impl AngleBuilder for FromDecimal {
    fn check_overflow(&self) -> Result<()> {
        let limit = f64::from(MAX_DEGREES);
        if self.decimal.is_nan() || self.decimal.abs() > limit {
            return Err(AngleError::overflow(
                AngleField::Decimal,
                self.decimal,
                limit,
                self.decimal.to_string(),
            ));
        }
        Ok(())
    }

    fn fetch_data(self) -> Result<AngleData> {
        let seconds_precision = self.seconds_precision();
        let (degrees, minutes, seconds) = decompose(self.decimal, seconds_precision);
        let direction = if self.decimal < 0.0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        Ok(AngleData::sexagesimal(degrees, minutes, seconds, direction)
            .with_suggested_decimal_precision(self.decimal_precision)
            .with_original_decimal(self.decimal)
            .with_seconds_precision(seconds_precision))
    }
}

/// Splits a decimal magnitude into degrees, minutes and seconds.
///
/// Degrees and minutes are truncated from the running remainder; seconds are
/// rounded to `seconds_precision` places, and a rounding that reaches 60 is
/// carried into the next field.
pub(crate) fn decompose(decimal: f64, seconds_precision: u32) -> (u32, u32, f64) {
    let magnitude = decimal.abs();
    let mut degrees = magnitude.trunc() as u32;
    let mut remainder = magnitude - f64::from(degrees);

    let mut minutes = (remainder * f64::from(MAX_MINUTES)).trunc() as u32;
    remainder = (remainder - f64::from(minutes) / f64::from(MAX_MINUTES)).abs();

    let full_minute = f64::from(MAX_SECONDS);
    let mut seconds = round_half_away_from_zero(
        remainder * f64::from(MAX_MINUTES * MAX_SECONDS),
        seconds_precision,
    );
    if seconds >= full_minute {
        seconds = round_half_away_from_zero(seconds - full_minute, seconds_precision);
        minutes += 1;
    }
    if minutes >= MAX_MINUTES {
        minutes -= MAX_MINUTES;
        degrees += 1;
    }

    trace!("decomposed {decimal} into {degrees}° {minutes}' {seconds}\"");
    (degrees, minutes, seconds)
}
