//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::RiderId;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("invalid scenario: {rider}: {reason}")]
    InvalidScenario { rider: RiderId, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
