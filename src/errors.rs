//! Error types for angle construction
//!
//! Every builder either produces a complete angle or fails with one of
//! these errors before any angle exists.

use std::fmt;
use thiserror::Error;

/// The magnitude field an overflow was detected on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AngleField {
    Degrees,
    Minutes,
    Seconds,
    Decimal,
    Radian,
}

impl fmt::Display for AngleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AngleField::Degrees => "degrees",
            AngleField::Minutes => "minutes",
            AngleField::Seconds => "seconds",
            AngleField::Decimal => "decimal degrees",
            AngleField::Radian => "radian",
        };
        f.write_str(name)
    }
}

/// Main error type for angle construction and parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AngleError {
    /// A magnitude input exceeds its bound
    #[error("Angle overflow: {field} value {value} exceeds the limit of {limit} (input: {input})")]
    Overflow {
        /// The field whose bound was exceeded
        field: AngleField,
        /// The offending magnitude
        value: f64,
        /// The bound that was exceeded
        limit: f64,
        /// The caller's input as text
        input: String,
    },

    /// The degrees token could not be found in the input string
    #[error("{input} does not match an angle measure")]
    NoMatch {
        /// The string that failed to parse
        input: String,
    },

    /// The regular expression engine itself failed
    #[error("Angle parser engine failure: {0}")]
    ParserEngine(String),
}

/// Extension of the Result type for angle operations
pub type Result<T> = std::result::Result<T, AngleError>;

impl AngleError {
    /// Create an overflow error for `field`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use goniometry::errors::{AngleError, AngleField};
    /// let err = AngleError::overflow(AngleField::Minutes, 60.0, 59.0, "0° 60' 0\"");
    /// assert!(err.to_string().contains("minutes value 60"));
    /// ```
    pub fn overflow(field: AngleField, value: f64, limit: f64, input: impl Into<String>) -> Self {
        Self::Overflow {
            field,
            value,
            limit,
            input: input.into(),
        }
    }

    /// Create a no-match error for an unparseable string.
    pub fn no_match(input: impl Into<String>) -> Self {
        Self::NoMatch {
            input: input.into(),
        }
    }

    /// Create a parser engine error from the engine's own message.
    pub fn parser_engine(message: impl fmt::Display) -> Self {
        Self::ParserEngine(message.to_string())
    }

    /// Returns the overflowed field, if this is an overflow error.
    pub fn overflowed_field(&self) -> Option<AngleField> {
        match self {
            Self::Overflow { field, .. } => Some(*field),
            _ => None,
        }
    }
}
