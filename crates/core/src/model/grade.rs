use serde::{Deserialize, Serialize};

/// The learner's self-assessment of a revealed fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Retires the fact from the pool.
    Correct,
    /// Puts the fact back into the pool to be drawn again.
    Incorrect,
}

impl Grade {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Grade::Correct)
    }
}

/// Horizontal swipe direction reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl From<SwipeDirection> for Grade {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Grade::Correct,
            SwipeDirection::Right => Grade::Incorrect,
        }
    }
}
