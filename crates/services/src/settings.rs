use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::SettingsError;

/// Minimum horizontal travel, in device-independent pixels, for a gesture to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Knobs for a drill run, resolved once by the composition root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrillSettings {
    seed: Option<u64>,
    swipe_threshold_px: f64,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            seed: None,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl DrillSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidSwipeThreshold` unless the threshold is finite and positive.
    pub fn new(seed: Option<u64>, swipe_threshold_px: f64) -> Result<Self, SettingsError> {
        if !swipe_threshold_px.is_finite() || swipe_threshold_px <= 0.0 {
            return Err(SettingsError::InvalidSwipeThreshold(swipe_threshold_px));
        }
        Ok(Self {
            seed,
            swipe_threshold_px,
        })
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn swipe_threshold_px(&self) -> f64 {
        self.swipe_threshold_px
    }

    /// Random source for fact draws: reproducible when a seed is set.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
