//! An always-neutral environment — no wind, slack water, flat sea.

use chrono::{DateTime, Utc};
use tp_core::{CurrentSample, GeoPoint, WaveSample, WindSample};

use crate::{EnvProvider, EnvResult};

/// An [`EnvProvider`] that reports neutral conditions everywhere, always.
///
/// Useful as a placeholder in tests and for pure dead-reckoning runs where
/// environmental effects should be switched off.
pub struct CalmEnvironment;

impl EnvProvider for CalmEnvironment {
    fn wind(&self, _at: GeoPoint, _time: DateTime<Utc>) -> EnvResult<WindSample> {
        Ok(WindSample::calm())
    }

    fn current(&self, _at: GeoPoint, _time: DateTime<Utc>) -> EnvResult<CurrentSample> {
        Ok(CurrentSample::slack())
    }

    fn wave(&self, _at: GeoPoint, _time: DateTime<Utc>) -> EnvResult<WaveSample> {
        Ok(WaveSample::flat())
    }
}
