use rand::Rng;

use crate::metrics::SessionMetrics;
use crate::model::{Fact, Grade};
use crate::pool::FactPool;

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

/// Where the card in play is in its reveal/grade cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardState {
    /// Nothing drawn yet.
    #[default]
    NoCard,
    /// Question visible, answer hidden.
    CardShown(Fact),
    /// Answer visible; the only state that accepts a grade.
    AnswerRevealed(Fact),
    /// Pool exhausted.
    Finished,
}

impl CardState {
    #[must_use]
    pub fn fact(&self) -> Option<Fact> {
        match self {
            CardState::CardShown(fact) | CardState::AnswerRevealed(fact) => Some(*fact),
            CardState::NoCard | CardState::Finished => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Drawn(Fact),
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeOutcome {
    /// Grade arrived out of sequence and changed nothing.
    Ignored,
    /// Grade applied; the next fact is now shown.
    Next(Fact),
    /// Grade applied and the pool is empty.
    Exhausted,
}

//
// ─── MACHINE ──────────────────────────────────────────────────────────────────
//

/// Owns the card in play and guards the reveal/grade ordering.
///
/// A drawn fact lives here, outside the pool, until it is graded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardMachine {
    state: CardState,
}

impl CardMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    #[must_use]
    pub fn current_fact(&self) -> Option<Fact> {
        self.state.fact()
    }

    /// The answer, but only once it has been revealed.
    #[must_use]
    pub fn revealed_answer(&self) -> Option<u32> {
        match self.state {
            CardState::AnswerRevealed(fact) => Some(fact.answer()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, CardState::Finished)
    }

    /// Draws the next fact into play, or moves to `Finished` when the pool is empty.
    ///
    /// Valid from any state. Any fact already in play is dropped, not returned to the pool.
    pub fn load_next<R: Rng + ?Sized>(&mut self, pool: &mut FactPool, rng: &mut R) -> LoadOutcome {
        match pool.draw_random(rng) {
            Some(fact) => {
                self.state = CardState::CardShown(fact);
                LoadOutcome::Drawn(fact)
            }
            None => {
                self.state = CardState::Finished;
                LoadOutcome::Exhausted
            }
        }
    }

    /// Shows the answer. Returns `false` (and changes nothing) unless a hidden card is in play.
    pub fn reveal(&mut self) -> bool {
        match self.state {
            CardState::CardShown(fact) => {
                self.state = CardState::AnswerRevealed(fact);
                true
            }
            CardState::NoCard | CardState::AnswerRevealed(_) | CardState::Finished => false,
        }
    }

    /// Grades the revealed card, updates pool and metrics, then loads the next card.
    ///
    /// Ignored unless the answer is revealed.
    pub fn grade<R: Rng + ?Sized>(
        &mut self,
        grade: Grade,
        pool: &mut FactPool,
        metrics: &mut SessionMetrics,
        rng: &mut R,
    ) -> GradeOutcome {
        let CardState::AnswerRevealed(fact) = self.state else {
            return GradeOutcome::Ignored;
        };

        metrics.record_grade(grade.is_correct());
        if !grade.is_correct() {
            pool.reinsert(fact);
        }
        self.state = CardState::NoCard;

        match self.load_next(pool, rng) {
            LoadOutcome::Drawn(next) => GradeOutcome::Next(next),
            LoadOutcome::Exhausted => GradeOutcome::Exhausted,
        }
    }
}
