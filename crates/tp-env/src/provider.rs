//! The `EnvProvider` trait — the forecast-lookup extension point.

use chrono::{DateTime, Utc};
use tp_core::{CurrentSample, GeoPoint, WaveSample, WindSample};

use crate::EnvResult;

/// Pluggable wind / current / wave forecast source.
///
/// Implementations answer point lookups: "what are conditions at this
/// coordinate at this instant?"  The three lookups are independent — a
/// provider may serve one from a live feed and another from climatology.
///
/// # Failure contract
///
/// Returning `Err` means "no value available here/now"; the caller
/// substitutes a neutral sample.  Implementations should not fabricate data
/// to avoid erroring.
///
/// # Thread safety
///
/// The departure optimizer may evaluate independent candidates in parallel,
/// so implementations must be `Send + Sync`.  Mutable caches need their own
/// interior synchronization.
pub trait EnvProvider: Send + Sync {
    /// Wind conditions at `at` at instant `time`.
    fn wind(&self, at: GeoPoint, time: DateTime<Utc>) -> EnvResult<WindSample>;

    /// Surface current at `at` at instant `time`.
    fn current(&self, at: GeoPoint, time: DateTime<Utc>) -> EnvResult<CurrentSample>;

    /// Sea state at `at` at instant `time`.
    fn wave(&self, at: GeoPoint, time: DateTime<Utc>) -> EnvResult<WaveSample>;
}
