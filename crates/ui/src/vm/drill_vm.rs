use drill_core::{GradeOutcome, SwipeDirection};
use services::{Clock, DrillSession, DrillSettings};

use super::gesture::{Gesture, SwipeTracker};
use super::report_vm::{ReportRowVm, map_report_rows};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillIntent {
    Start,
    Reveal,
    Grade(SwipeDirection),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillScreen {
    Start,
    Card,
    Results,
}

/// Screen-level state for the drill: no session yet, a session in progress, or a finished one.
pub struct DrillVm {
    settings: DrillSettings,
    clock: Clock,
    session: Option<DrillSession>,
    tracker: SwipeTracker,
}

impl DrillVm {
    #[must_use]
    pub fn new(settings: DrillSettings, clock: Clock) -> Self {
        Self {
            settings,
            clock,
            session: None,
            tracker: SwipeTracker::new(settings.swipe_threshold_px()),
        }
    }

    #[must_use]
    pub fn screen(&self) -> DrillScreen {
        match &self.session {
            None => DrillScreen::Start,
            Some(session) if session.is_finished() => DrillScreen::Results,
            Some(_) => DrillScreen::Card,
        }
    }

    pub fn dispatch(&mut self, intent: DrillIntent) {
        match intent {
            DrillIntent::Start => self.start(),
            DrillIntent::Reveal => {
                if let Some(session) = self.session.as_mut() {
                    session.reveal();
                }
            }
            DrillIntent::Grade(direction) => {
                if let Some(session) = self.session.as_mut()
                    && session.grade(direction) == GradeOutcome::Exhausted
                {
                    tracing::info!("drill complete, showing results");
                }
            }
        }
    }

    fn start(&mut self) {
        self.tracker.cancel();
        match self.session.as_mut() {
            Some(session) => session.restart(),
            None => self.session = Some(DrillSession::from_settings(&self.settings, self.clock)),
        }
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.tracker.begin(x);
    }

    pub fn pointer_cancel(&mut self) {
        self.tracker.cancel();
    }

    /// Completes a gesture and applies it. Returns the intent that was dispatched, if any.
    pub fn pointer_up(&mut self, x: f64) -> Option<DrillIntent> {
        let gesture = self.tracker.finish(x)?;
        tracing::trace!(?gesture, "gesture recognized");
        let intent = match gesture {
            Gesture::Tap => DrillIntent::Reveal,
            Gesture::Swipe(direction) => DrillIntent::Grade(direction),
        };
        self.dispatch(intent);
        Some(intent)
    }

    #[must_use]
    pub fn question_label(&self) -> Option<String> {
        self.session
            .as_ref()
            .and_then(DrillSession::current_question_label)
    }

    /// `None` while the answer is still hidden.
    #[must_use]
    pub fn answer_label(&self) -> Option<String> {
        self.session
            .as_ref()
            .and_then(DrillSession::revealed_answer)
            .map(|answer| answer.to_string())
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.session
            .as_ref()
            .map_or(0.0, |session| session.progress_fraction() * 100.0)
    }

    #[must_use]
    pub fn report_rows(&self) -> Option<Vec<ReportRowVm>> {
        self.session
            .as_ref()
            .and_then(DrillSession::report)
            .map(map_report_rows)
    }

    #[must_use]
    pub fn session(&self) -> Option<&DrillSession> {
        self.session.as_ref()
    }
}
