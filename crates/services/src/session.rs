use rand::rngs::StdRng;

use drill_core::model::{Fact, Grade, SessionReport, SwipeDirection, TOTAL_FACTS};
use drill_core::{CardMachine, CardState, FactPool, GradeOutcome, LoadOutcome, SessionMetrics};

use crate::Clock;
use crate::settings::DrillSettings;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One drill run over the full table.
///
/// Owns the pool, the card in play, and the counters. Starting again discards all of it.
/// The session ends by itself once the last fact is graded correct.
pub struct DrillSession {
    clock: Clock,
    rng: StdRng,
    pool: FactPool,
    card: CardMachine,
    metrics: SessionMetrics,
    report: Option<SessionReport>,
}

impl DrillSession {
    /// Begin a session: full pool, fresh counters, first card drawn.
    #[must_use]
    pub fn start(clock: Clock, rng: StdRng) -> Self {
        let mut session = Self {
            clock,
            rng,
            pool: FactPool::new(),
            card: CardMachine::new(),
            metrics: SessionMetrics::started(clock.now()),
            report: None,
        };
        session.restart();
        session
    }

    #[must_use]
    pub fn from_settings(settings: &DrillSettings, clock: Clock) -> Self {
        Self::start(clock, settings.rng())
    }

    /// Throw away the current run and start over. The random source carries on.
    pub fn restart(&mut self) {
        self.metrics.reset(self.clock.now());
        self.pool.initialize();
        self.card = CardMachine::new();
        self.report = None;
        tracing::info!(facts = self.pool.len(), "drill session started");
        self.load_next();
    }

    fn load_next(&mut self) {
        match self.card.load_next(&mut self.pool, &mut self.rng) {
            LoadOutcome::Drawn(fact) => {
                tracing::debug!(question = %fact, remaining = self.pool.len(), "card drawn");
            }
            LoadOutcome::Exhausted => self.end_session(),
        }
    }

    fn end_session(&mut self) {
        let report = self.metrics.finalize(self.clock.now());
        tracing::info!(
            total_graded = report.total_graded(),
            correct_graded = report.correct_graded(),
            time_taken_secs = report.time_taken_secs(),
            "drill session finished"
        );
        self.report = Some(report);
    }

    /// Show the answer for the card in play. Returns `false` if that was a no-op.
    pub fn reveal(&mut self) -> bool {
        let revealed = self.card.reveal();
        if !revealed {
            tracing::trace!(state = ?self.card.state(), "reveal ignored");
        }
        revealed
    }

    /// Grade by swipe direction: left is correct, right is incorrect.
    pub fn grade(&mut self, direction: SwipeDirection) -> GradeOutcome {
        self.grade_as(Grade::from(direction))
    }

    pub fn grade_as(&mut self, grade: Grade) -> GradeOutcome {
        let graded = self.card.current_fact();
        let outcome = self
            .card
            .grade(grade, &mut self.pool, &mut self.metrics, &mut self.rng);

        match outcome {
            GradeOutcome::Ignored => {
                tracing::trace!(state = ?self.card.state(), ?grade, "grade ignored");
            }
            GradeOutcome::Next(next) => {
                tracing::debug!(
                    question = ?graded.map(|f| f.question()),
                    ?grade,
                    next = %next,
                    remaining = self.pool.len(),
                    "card graded"
                );
            }
            GradeOutcome::Exhausted => self.end_session(),
        }
        outcome
    }

    #[must_use]
    pub fn state(&self) -> CardState {
        self.card.state()
    }

    #[must_use]
    pub fn current_fact(&self) -> Option<Fact> {
        self.card.current_fact()
    }

    #[must_use]
    pub fn current_question_label(&self) -> Option<String> {
        self.card.current_fact().map(|fact| fact.question())
    }

    #[must_use]
    pub fn revealed_answer(&self) -> Option<u32> {
        self.card.revealed_answer()
    }

    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn pool(&self) -> &FactPool {
        &self.pool
    }

    #[must_use]
    pub fn total_graded(&self) -> u32 {
        self.metrics.total_graded()
    }

    #[must_use]
    pub fn correct_graded(&self) -> u32 {
        self.metrics.correct_graded()
    }

    /// Share of the table retired so far, in `[0, 1]`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        let retired = TOTAL_FACTS.saturating_sub(self.pool.len());
        #[allow(clippy::cast_precision_loss)]
        let fraction = retired as f64 / TOTAL_FACTS as f64;
        fraction.clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.report.is_some()
    }

    /// Final statistics; `None` until the pool is exhausted.
    #[must_use]
    pub fn report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }

    /// Access to the clock, e.g. to step a fixed clock forward.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}
