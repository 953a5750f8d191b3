#![forbid(unsafe_code)]

pub mod error;
pub mod session;
pub mod settings;

pub use drill_core::Clock;

pub use error::SettingsError;
pub use session::DrillSession;
pub use settings::{DEFAULT_SWIPE_THRESHOLD_PX, DrillSettings};
