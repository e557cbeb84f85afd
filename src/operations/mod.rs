//! Operations combining two angles into a new one.
//!
//! Sums are built (like every angle) by a builder, here one of
//! [`RelativeSum`](crate::builders::RelativeSum) or
//! [`AbsoluteSum`](crate::builders::AbsoluteSum), and wrapped in [`Sum`] so
//! the result still behaves as an [`Angle`](crate::Angle) while keeping its
//! own type.

pub mod sum;

pub use self::sum::Sum;
