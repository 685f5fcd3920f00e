//! Provider error type.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tp_core::GeoPoint;

/// Why an environment lookup produced no value.
///
/// The simulation core treats every variant identically (substitute a
/// neutral sample); the distinction exists for provider logs and tests.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("no forecast coverage at {at} for {time}")]
    NoCoverage {
        at:   GeoPoint,
        time: DateTime<Utc>,
    },

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, EnvError>`.
pub type EnvResult<T> = Result<T, EnvError>;
