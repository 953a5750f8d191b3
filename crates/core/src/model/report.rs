use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived statistics for a finished drill session.
///
/// `accuracy_percent` is `None` when nothing was graded: the ratio is not a number
/// and the presentation layer decides how to show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_graded: u32,
    correct_graded: u32,
    time_taken_secs: f64,
    accuracy_percent: Option<f64>,
    seconds_per_card: f64,
    cards_per_second: f64,
}

impl SessionReport {
    /// Compute the report from raw counters and the session time range.
    ///
    /// A `completed_at` earlier than `started_at` counts as zero elapsed time.
    #[must_use]
    pub fn from_counts(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total_graded: u32,
        correct_graded: u32,
    ) -> Self {
        let time_taken_secs = (completed_at - started_at)
            .to_std()
            .map_or(0.0, |elapsed| elapsed.as_secs_f64());
        let total = f64::from(total_graded);

        let accuracy_percent =
            (total_graded > 0).then(|| 100.0 * f64::from(correct_graded) / total);
        let seconds_per_card = if total_graded > 0 {
            time_taken_secs / total
        } else {
            0.0
        };
        let cards_per_second = if time_taken_secs > 0.0 {
            total / time_taken_secs
        } else {
            0.0
        };

        Self {
            started_at,
            completed_at,
            total_graded,
            correct_graded,
            time_taken_secs,
            accuracy_percent,
            seconds_per_card,
            cards_per_second,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total_graded(&self) -> u32 {
        self.total_graded
    }

    #[must_use]
    pub fn correct_graded(&self) -> u32 {
        self.correct_graded
    }

    #[must_use]
    pub fn time_taken_secs(&self) -> f64 {
        self.time_taken_secs
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> Option<f64> {
        self.accuracy_percent
    }

    #[must_use]
    pub fn seconds_per_card(&self) -> f64 {
        self.seconds_per_card
    }

    #[must_use]
    pub fn cards_per_second(&self) -> f64 {
        self.cards_per_second
    }
}
