//! Goniometry: bounded planar angles that remember how they were written
//!
//! This crate models an angle between −360° and +360° in sexagesimal form
//! (degrees, minutes, seconds and a rotation direction) and converts it to
//! and from decimal degrees, radians and its textual form without losing the
//! precision of the original input.

pub mod angle;
pub mod builders;
pub mod constants;
pub mod errors;
pub mod operations;
pub mod parser;
pub mod precision;

// Re-export commonly used types
pub use angle::{Angle, Direction, Operand, SignedDegrees};
pub use errors::{AngleError, AngleField, Result};
pub use operations::Sum;
