//! Builders summing two angles.
//!
//! Both operands are converted to decimal degrees at the larger of their
//! suggested precisions and added. A result past one full turn is brought
//! back by a single 360° correction: each operand is bounded by ±360°, so the
//! combined magnitude can never need more than one.

use log::debug;

use super::from_decimal::decompose;
use super::{AngleBuilder, AngleData};
use crate::angle::{Angle, Direction};
use crate::constants::{DECIMAL_PRECISION_OFFSET, MAX_DEGREES};
use crate::errors::Result;
use crate::precision::{clamp_precision, round_half_away_from_zero};

/// Marker for builders whose output is the sum of two angles
pub trait SumBuilder: AngleBuilder {}

/// Sum with displacement semantics: the result's sign follows the algebraic sum
#[derive(Debug, Clone, Copy)]
pub struct RelativeSum<'a> {
    first: &'a Angle,
    second: &'a Angle,
}

/// Sum with total-rotation semantics: both operands count as positive
#[derive(Debug, Clone, Copy)]
pub struct AbsoluteSum<'a> {
    first: &'a Angle,
    second: &'a Angle,
}

impl<'a> RelativeSum<'a> {
    pub fn new(first: &'a Angle, second: &'a Angle) -> Self {
        RelativeSum { first, second }
    }

    pub(crate) fn compute(self) -> AngleData {
        let precision = shared_precision(self.first, self.second);
        let full_positive = |a: &Angle| a.is_full_angle() && a.is_counter_clockwise();
        let full_negative = |a: &Angle| a.is_full_angle() && a.is_clockwise();

        if full_positive(self.first) && full_positive(self.second) {
            debug!("relative sum of two positive full turns");
            return full_turn(Direction::CounterClockwise, precision);
        }
        if full_negative(self.first) && full_negative(self.second) {
            debug!("relative sum of two negative full turns");
            return full_turn(Direction::Clockwise, precision);
        }
        if self.first.is_null_angle() && self.second.is_null_angle() {
            return null_turn(precision);
        }

        let sum = round_half_away_from_zero(
            self.first.to_decimal(Some(precision)) + self.second.to_decimal(Some(precision)),
            precision,
        );
        let direction = if sum >= 0.0 {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        };
        sum_data(wrap_once(sum.abs(), precision), direction, precision)
    }
}

impl<'a> AbsoluteSum<'a> {
    pub fn new(first: &'a Angle, second: &'a Angle) -> Self {
        AbsoluteSum { first, second }
    }

    pub(crate) fn compute(self) -> AngleData {
        let precision = shared_precision(self.first, self.second);

        if self.first.is_full_angle() && self.second.is_full_angle() {
            debug!("absolute sum of two full turns");
            return full_turn(Direction::CounterClockwise, precision);
        }
        if self.first.is_null_angle() && self.second.is_null_angle() {
            return null_turn(precision);
        }

        let sum = round_half_away_from_zero(
            self.first.to_decimal(Some(precision)).abs()
                + self.second.to_decimal(Some(precision)).abs(),
            precision,
        );
        sum_data(wrap_once(sum, precision), Direction::CounterClockwise, precision)
    }
}

impl AngleBuilder for RelativeSum<'_> {
    /// Operands are valid angles and excess is corrected, so a sum never overflows.
    fn check_overflow(&self) -> Result<()> {
        Ok(())
    }

    fn fetch_data(self) -> Result<AngleData> {
        Ok(self.compute())
    }
}

impl AngleBuilder for AbsoluteSum<'_> {
    fn check_overflow(&self) -> Result<()> {
        Ok(())
    }

    fn fetch_data(self) -> Result<AngleData> {
        Ok(self.compute())
    }
}

impl SumBuilder for RelativeSum<'_> {}
impl SumBuilder for AbsoluteSum<'_> {}

fn shared_precision(first: &Angle, second: &Angle) -> u32 {
    clamp_precision(
        first
            .suggested_decimal_precision()
            .max(second.suggested_decimal_precision()),
    )
}

fn wrap_once(magnitude: f64, precision: u32) -> f64 {
    let limit = f64::from(MAX_DEGREES);
    if magnitude > limit {
        let wrapped = round_half_away_from_zero(magnitude - limit, precision);
        debug!("sum of {magnitude}° exceeds a full turn, wrapped to {wrapped}°");
        wrapped
    } else {
        magnitude
    }
}

fn sum_data(magnitude: f64, direction: Direction, precision: u32) -> AngleData {
    let (degrees, minutes, seconds) =
        decompose(magnitude, clamp_precision(precision + DECIMAL_PRECISION_OFFSET));
    let data = AngleData::sexagesimal(degrees, minutes, seconds, direction);
    // A null result is counterclockwise and caches exactly zero
    let decimal = if degrees == 0 && minutes == 0 && seconds == 0.0 {
        0.0
    } else {
        data.direction.sign() * magnitude
    };
    data.with_suggested_decimal_precision(precision)
        .with_original_decimal(decimal)
}

fn full_turn(direction: Direction, precision: u32) -> AngleData {
    sum_data(f64::from(MAX_DEGREES), direction, precision)
}

fn null_turn(precision: u32) -> AngleData {
    sum_data(0.0, Direction::CounterClockwise, precision)
}
