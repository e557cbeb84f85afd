//! Constants module for angular limits and conversions

use std::f64::consts::PI;

// Sexagesimal limits
/// The max degrees an angle can have (one full turn)
pub const MAX_DEGREES: u32 = 360;
/// Minutes in a degree; minutes must stay strictly below this
pub const MAX_MINUTES: u32 = 60;
/// Seconds in a minute; seconds must stay strictly below this
pub const MAX_SECONDS: u32 = 60;

// Angles
/// Arcseconds in a complete circle
pub const ASEC360: f64 = 1_296_000.0;
/// Radian measure of a round angle
pub const MAX_RADIAN: f64 = 2.0 * PI;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Precision
/// Max meaningful decimal digits of an f64
pub const MAX_FLOAT_DIGITS: u32 = f64::DIGITS;
/// Decimal places seconds are rounded to by the values and string builders
pub const DEFAULT_SECONDS_PRECISION: u32 = 1;
/// Extra decimal digits between degrees and seconds (1" ≈ 2.8e-4°, plus headroom)
pub const DECIMAL_PRECISION_OFFSET: u32 = 6;
/// Upper bound when counting decimal places of an f64
pub const MAX_COUNTED_DIGITS: u32 = 17;
