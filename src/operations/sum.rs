use std::fmt;
use std::ops::Deref;

use crate::angle::Angle;
use crate::builders::{AbsoluteSum, AngleBuilder, RelativeSum, SumBuilder};
use crate::errors::Result;

/// An angle obtained by summing two angles
///
/// Dereferences to [`Angle`], so every query and comparison is available on a
/// sum directly.
///
/// # Examples
///
/// ```rust
/// use goniometry::{Angle, Sum};
///
/// let a = Angle::from_decimal(-90.0)?;
/// let b = Angle::from_decimal(30.0)?;
/// let sum = Sum::relative(&a, &b);
/// assert_eq!(sum.to_decimal(None), -60.0);
/// assert!(sum.is_clockwise());
///
/// let sum = Sum::absolute(&a, &b);
/// assert_eq!(sum.to_decimal(None), 120.0);
/// # Ok::<(), goniometry::AngleError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sum(Angle);

impl Sum {
    /// Creates a sum from any sum builder.
    pub fn new<B: SumBuilder>(builder: B) -> Result<Sum> {
        builder.check_overflow()?;
        Angle::build(builder).map(Sum)
    }

    /// Algebraic sum of `first` and `second`; its direction follows the sign of the result.
    pub fn relative(first: &Angle, second: &Angle) -> Sum {
        Sum(Angle::from_data(RelativeSum::new(first, second).compute()))
    }

    /// Sum of the magnitudes of `first` and `second`, always counterclockwise.
    pub fn absolute(first: &Angle, second: &Angle) -> Sum {
        Sum(Angle::from_data(AbsoluteSum::new(first, second).compute()))
    }

    pub fn as_angle(&self) -> &Angle {
        &self.0
    }

    pub fn into_angle(self) -> Angle {
        self.0
    }
}

impl Deref for Sum {
    type Target = Angle;

    fn deref(&self) -> &Angle {
        &self.0
    }
}

impl AsRef<Angle> for Sum {
    fn as_ref(&self) -> &Angle {
        &self.0
    }
}

impl From<Sum> for Angle {
    fn from(sum: Sum) -> Self {
        sum.0
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
