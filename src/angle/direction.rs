use serde::{Deserialize, Serialize};

/// Rotation direction of an angle
///
/// The sign of an angle is carried here and nowhere else; magnitudes are
/// always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Negative rotation
    Clockwise = -1,
    /// Positive rotation
    #[default]
    CounterClockwise = 1,
}

impl Direction {
    /// `-1.0` for clockwise, `1.0` for counterclockwise
    pub fn sign(self) -> f64 {
        match self {
            Direction::Clockwise => -1.0,
            Direction::CounterClockwise => 1.0,
        }
    }

    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Any negative integer is clockwise, anything else counterclockwise.
impl From<i32> for Direction {
    fn from(value: i32) -> Self {
        if value < 0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }
}

impl From<Direction> for i32 {
    fn from(direction: Direction) -> Self {
        direction as i32
    }
}
