use drill_core::SwipeDirection;

/// What a completed pointer gesture means to the drill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Swipe(SwipeDirection),
}

/// Turns a pointer-down / pointer-up pair into a tap or a horizontal swipe.
///
/// Only horizontal travel is measured. Travel must strictly exceed the threshold
/// to count as a swipe; anything shorter is a tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// `None` when there was no matching `begin`.
    pub fn finish(&mut self, x: f64) -> Option<Gesture> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if delta.abs() > self.threshold_px {
            let direction = if delta < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            };
            Some(Gesture::Swipe(direction))
        } else {
            Some(Gesture::Tap)
        }
    }
}
