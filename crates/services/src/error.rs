//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while validating `DrillSettings`.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("swipe threshold must be a positive number of pixels, got {0}")]
    InvalidSwipeThreshold(f64),
}
