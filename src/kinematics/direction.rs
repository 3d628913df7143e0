use ufmt_macros::uDebug;

/// Describes the direction for an axis movement.
#[derive(Debug, uDebug, PartialEq, Clone, Copy)]
pub enum Direction {
    /// Positive direction is associated with a "high" direction signal.
    Positive,
    /// Negative direction is associated with a "low" direction signal.
    Negative,
}
impl Direction {
    /// Returns the opposite direction.
    pub fn reversed(&self) -> Direction {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }

    /// Returns `true` if the direction signal should be driven high.
    pub fn is_high(&self) -> bool {
        *self == Direction::Positive
    }
}
