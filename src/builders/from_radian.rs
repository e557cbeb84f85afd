//! Builds an angle from radians.

use log::debug;

use super::{AngleBuilder, AngleData, FromDecimal};
use crate::constants::{MAX_DEGREES, MAX_RADIAN, RAD2DEG};
use crate::errors::{AngleError, AngleField, Result};
use crate::precision::{clamp_precision, count_decimal_places};

/// Builder for an angle given in radians
///
/// The radian is converted to degrees and decomposed by [`FromDecimal`]; the
/// original radian is then re-attached so `to_radian(None)` returns it without
/// a second conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct FromRadian {
    radian: f64,
}

impl FromRadian {
    /// Creates a validated builder; `|radian|` must not exceed 2π.
    pub fn new(radian: f64) -> Result<Self> {
        let builder = FromRadian { radian };
        builder.check_overflow()?;
        Ok(builder)
    }
}

impl AngleBuilder for FromRadian {
    fn check_overflow(&self) -> Result<()> {
        if self.radian.is_nan() || self.radian.abs() > MAX_RADIAN {
            return Err(AngleError::overflow(
                AngleField::Radian,
                self.radian,
                MAX_RADIAN,
                self.radian.to_string(),
            ));
        }
        Ok(())
    }

    fn fetch_data(self) -> Result<AngleData> {
        let limit = f64::from(MAX_DEGREES);
        let mut degrees = self.radian * RAD2DEG;
        if degrees.abs() > limit {
            // 2π converts to a hair above 360
            debug!("clamping {degrees}° converted from {} rad to a full turn", self.radian);
            degrees = limit.copysign(degrees);
        }
        let precision = clamp_precision(count_decimal_places(self.radian));
        Ok(FromDecimal::new(degrees)?
            .fetch_data()?
            .with_original_radian(self.radian, precision))
    }
}
