//! Comparisons between an angle and an angle, a number or a string.
//!
//! Ordering always compares magnitudes, so direction never takes part. The
//! rules per operand kind:
//!
//! - `Angle`: equality compares degrees, minutes and seconds field by field;
//!   ordering compares `|to_decimal(precision)|` on both sides
//! - `Integer`: compared with `|to_decimal(Some(0))|`, so any sub-degree
//!   magnitude is ignored
//! - `Float`: rounded to the resolved precision, then compared with
//!   `|to_decimal|` at that precision
//! - `Text`: parsed into an angle, then compared by `|to_decimal(precision)|`

use std::cmp::Ordering;

use super::Angle;
use crate::errors::Result;
use crate::operations::Sum;
use crate::precision::round_half_away_from_zero;

/// Right-hand side of an angle comparison
///
/// Only the kinds listed here convert into an operand, so comparing with any
/// other type is rejected at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Angle(&'a Angle),
    Integer(i64),
    Float(f64),
    Text(&'a str),
}

impl<'a> From<&'a Angle> for Operand<'a> {
    fn from(angle: &'a Angle) -> Self {
        Operand::Angle(angle)
    }
}

impl<'a> From<&'a Sum> for Operand<'a> {
    fn from(sum: &'a Sum) -> Self {
        Operand::Angle(sum.as_angle())
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<u32> for Operand<'_> {
    fn from(value: u32) -> Self {
        Operand::Integer(i64::from(value))
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(text: &'a str) -> Self {
        Operand::Text(text)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(text: &'a String) -> Self {
        Operand::Text(text.as_str())
    }
}

impl Angle {
    /// Checks whether this angle equals `other`.
    ///
    /// Against another angle only the magnitude fields are compared, so
    /// +90° and −90° are equal.
    ///
    /// # Errors
    ///
    /// Fails only when a string operand cannot be parsed.
    pub fn is_equal<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        match other.into() {
            Operand::Angle(angle) => Ok(self.degrees == angle.degrees
                && self.minutes == angle.minutes
                && self.seconds == angle.seconds),
            operand => Ok(self.compare_magnitude(operand, precision)? == Some(Ordering::Equal)),
        }
    }

    /// Alias of [`is_equal`](Self::is_equal).
    #[allow(clippy::should_implement_trait)]
    pub fn eq<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        self.is_equal(other, precision)
    }

    /// Negation of [`is_equal`](Self::is_equal).
    pub fn is_different<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        Ok(!self.is_equal(other, precision)?)
    }

    /// Alias of [`is_different`](Self::is_different).
    #[allow(clippy::should_implement_trait)]
    pub fn not<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        self.is_different(other, precision)
    }

    /// Checks whether this angle's magnitude is greater than `other`'s.
    pub fn is_greater_than<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        Ok(self.compare_magnitude(other.into(), precision)? == Some(Ordering::Greater))
    }

    /// Alias of [`is_greater_than`](Self::is_greater_than).
    pub fn gt<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        self.is_greater_than(other, precision)
    }

    pub fn is_greater_than_or_equal<'a>(
        &self,
        other: impl Into<Operand<'a>>,
        precision: Option<u32>,
    ) -> Result<bool> {
        let operand = other.into();
        Ok(self.is_equal(operand, precision)? || self.is_greater_than(operand, precision)?)
    }

    /// Alias of [`is_greater_than_or_equal`](Self::is_greater_than_or_equal).
    pub fn gte<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        self.is_greater_than_or_equal(other, precision)
    }

    /// Checks whether this angle's magnitude is less than `other`'s.
    pub fn is_less_than<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        Ok(self.compare_magnitude(other.into(), precision)? == Some(Ordering::Less))
    }

    /// Alias of [`is_less_than`](Self::is_less_than).
    pub fn lt<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        self.is_less_than(other, precision)
    }

    pub fn is_less_than_or_equal<'a>(
        &self,
        other: impl Into<Operand<'a>>,
        precision: Option<u32>,
    ) -> Result<bool> {
        let operand = other.into();
        Ok(self.is_equal(operand, precision)? || self.is_less_than(operand, precision)?)
    }

    /// Alias of [`is_less_than_or_equal`](Self::is_less_than_or_equal).
    pub fn lte<'a>(&self, other: impl Into<Operand<'a>>, precision: Option<u32>) -> Result<bool> {
        self.is_less_than_or_equal(other, precision)
    }

    /// Orders `|self|` against `|operand|`; `None` when a side is NaN.
    fn compare_magnitude(&self, operand: Operand<'_>, precision: Option<u32>) -> Result<Option<Ordering>> {
        let (mine, theirs) = match operand {
            Operand::Angle(angle) => (self.to_decimal(precision), angle.to_decimal(precision)),
            Operand::Integer(value) => (self.to_decimal(Some(0)), value as f64),
            Operand::Float(value) => {
                let digits = self.resolve_precision(precision);
                (
                    self.to_decimal(Some(digits)),
                    round_half_away_from_zero(value, digits),
                )
            }
            Operand::Text(text) => {
                let angle = Angle::from_string(text)?;
                (self.to_decimal(precision), angle.to_decimal(precision))
            }
        };
        Ok(mine.abs().partial_cmp(&theirs.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Direction;
    use crate::errors::AngleError;
    use rstest::rstest;

    fn deg(degrees: i32) -> Angle {
        Angle::from_values(degrees.abs(), 0, 0.0, Direction::from(degrees)).unwrap()
    }

    #[test]
    fn test_angle_ordering() {
        assert!(deg(90).is_greater_than(&deg(45), None).unwrap());
        assert!(!deg(45).is_greater_than(&deg(90), None).unwrap());
        assert!(deg(45).is_less_than(&deg(90), None).unwrap());
        assert!(!deg(90).is_less_than(&deg(90), None).unwrap());
    }

    #[test]
    fn test_ordering_ignores_direction() {
        assert!(deg(-90).is_greater_than(&deg(45), None).unwrap());
        assert!(deg(45).is_less_than(&deg(-90), None).unwrap());
    }

    #[test]
    fn test_angle_equality_ignores_cached_precision() {
        let from_values = deg(90);
        let from_decimal = Angle::from_decimal(90.0).unwrap();
        assert_ne!(
            from_values.suggested_decimal_precision(),
            from_decimal.suggested_decimal_precision()
        );
        assert!(from_values.is_equal(&from_decimal, None).unwrap());
        assert!(deg(90).is_equal(&deg(90), None).unwrap());
    }

    #[test]
    fn test_angle_equality_ignores_direction() {
        assert!(deg(90).is_equal(&deg(-90), None).unwrap());
        assert!(deg(90).is_different(&deg(89), None).unwrap());
        assert!(deg(90).not(&deg(89), None).unwrap());
    }

    #[test]
    fn test_integer_operand_ignores_sub_degree_magnitude() {
        let angle = Angle::from_values(30, 20, 0.0, 1).unwrap();
        assert!(angle.is_equal(30, None).unwrap());
        assert!(angle.is_equal(-30, None).unwrap());
        assert!(angle.is_greater_than(29, None).unwrap());
        assert!(angle.is_less_than(31_i64, None).unwrap());
    }

    #[rstest]
    #[case(30.5, None, true)]
    #[case(30.46, Some(1), true)]
    #[case(30.25, Some(1), false)]
    #[case(30.54, Some(1), true)]
    #[case(30.54, Some(2), false)]
    fn test_float_operand_is_rounded(#[case] value: f64, #[case] precision: Option<u32>, #[case] equal: bool) {
        let angle = Angle::from_values(30, 30, 0.0, 1).unwrap();
        assert_eq!(angle.is_equal(value, precision).unwrap(), equal);
    }

    #[test]
    fn test_string_operand() {
        let angle = deg(45);
        assert!(angle.is_equal("45° 0' 0\"", None).unwrap());
        assert!(angle.is_equal("-45°", None).unwrap());
        assert!(angle.is_greater_than("44° 59' 59.9\"", None).unwrap());
        let owned = String::from("46°");
        assert!(angle.is_less_than(&owned, None).unwrap());
    }

    #[test]
    fn test_string_operand_parse_failure() {
        let err = deg(45).is_equal("up and to the left", None).unwrap_err();
        assert_eq!(err, AngleError::no_match("up and to the left"));
    }

    #[test]
    fn test_or_equal_variants() {
        assert!(deg(90).is_greater_than_or_equal(&deg(90), None).unwrap());
        assert!(deg(90).is_greater_than_or_equal(&deg(45), None).unwrap());
        assert!(!deg(45).is_greater_than_or_equal(&deg(90), None).unwrap());
        assert!(deg(45).is_less_than_or_equal(&deg(45), None).unwrap());
        assert!(deg(45).is_less_than_or_equal(90, None).unwrap());
        assert!(!deg(90).is_less_than_or_equal(45.0, None).unwrap());
    }

    #[test]
    fn test_aliases() {
        let (big, small) = (deg(90), deg(45));
        assert!(big.gt(&small, None).unwrap());
        assert!(big.gte(&small, None).unwrap());
        assert!(small.lt(&big, None).unwrap());
        assert!(small.lte(&big, None).unwrap());
        assert!(big.eq(&deg(90), None).unwrap());
    }

    #[test]
    fn test_explicit_precision_on_angle_ordering() {
        let a = Angle::from_decimal(10.04).unwrap();
        let b = Angle::from_decimal(10.01).unwrap();
        assert!(a.is_greater_than(&b, None).unwrap());
        assert!(!a.is_greater_than(&b, Some(1)).unwrap());
    }
}
