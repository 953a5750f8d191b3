use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest factor in the drill table.
pub const TABLE_MAX: u8 = 12;

/// Number of distinct facts in a full `TABLE_MAX` x `TABLE_MAX` table.
pub const TOTAL_FACTS: usize = (TABLE_MAX as usize) * (TABLE_MAX as usize);

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactError {
    #[error("factors must be within 1..={max}, got {left} x {right}", max = TABLE_MAX)]
    OutOfRange { left: u8, right: u8 },
}

//
// ─── FACT ─────────────────────────────────────────────────────────────────────
//

/// A single multiplication question and its answer.
///
/// Facts are immutable once built. The question label is rendered as `"A x B"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFact")]
pub struct Fact {
    left: u8,
    right: u8,
}

/// Wire shape of a `Fact` before its factors are range-checked.
#[derive(Deserialize)]
struct RawFact {
    left: u8,
    right: u8,
}

impl TryFrom<RawFact> for Fact {
    type Error = FactError;

    fn try_from(raw: RawFact) -> Result<Self, Self::Error> {
        Self::new(raw.left, raw.right)
    }
}

impl Fact {
    /// Builds a fact for `left x right`.
    ///
    /// # Errors
    ///
    /// Returns `FactError::OutOfRange` if either factor is outside `1..=TABLE_MAX`.
    pub fn new(left: u8, right: u8) -> Result<Self, FactError> {
        let valid = 1..=TABLE_MAX;
        if !valid.contains(&left) || !valid.contains(&right) {
            return Err(FactError::OutOfRange { left, right });
        }
        Ok(Self { left, right })
    }

    #[must_use]
    pub fn left(&self) -> u8 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> u8 {
        self.right
    }

    /// The label shown to the learner, e.g. `"3 x 4"`.
    #[must_use]
    pub fn question(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn answer(&self) -> u32 {
        u32::from(self.left) * u32::from(self.right)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.left, self.right)
    }
}

/// Every fact of the table in row-major order, each exactly once.
#[must_use]
pub fn fact_table() -> Vec<Fact> {
    let mut facts = Vec::with_capacity(TOTAL_FACTS);
    for left in 1..=TABLE_MAX {
        for right in 1..=TABLE_MAX {
            facts.push(Fact { left, right });
        }
    }
    facts
}
