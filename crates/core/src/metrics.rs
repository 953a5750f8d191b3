use chrono::{DateTime, Utc};

use crate::model::SessionReport;

/// Running counters for the session in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMetrics {
    started_at: DateTime<Utc>,
    total_graded: u32,
    correct_graded: u32,
}

impl SessionMetrics {
    #[must_use]
    pub fn started(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            total_graded: 0,
            correct_graded: 0,
        }
    }

    /// Zeroes the counters and restarts the session timer at `now`.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        *self = Self::started(now);
    }

    pub fn record_grade(&mut self, correct: bool) {
        self.total_graded = self.total_graded.saturating_add(1);
        if correct {
            self.correct_graded = self.correct_graded.saturating_add(1);
        }
    }

    /// Stops the timer at `now` and derives the session statistics.
    #[must_use]
    pub fn finalize(&self, now: DateTime<Utc>) -> SessionReport {
        SessionReport::from_counts(self.started_at, now, self.total_graded, self.correct_graded)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn total_graded(&self) -> u32 {
        self.total_graded
    }

    #[must_use]
    pub fn correct_graded(&self) -> u32 {
        self.correct_graded
    }
}
