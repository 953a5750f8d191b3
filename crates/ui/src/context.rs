use std::sync::Arc;

use services::{Clock, DrillSettings};

pub trait UiApp: Send + Sync {
    fn settings(&self) -> DrillSettings;
    fn clock(&self) -> Clock;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppContext {
    settings: DrillSettings,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> DrillSettings {
        self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
