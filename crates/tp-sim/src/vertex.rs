//! One simulated point along the track.

use chrono::{DateTime, Utc};
use tp_core::{CurrentSample, GeoPoint, RiskLevel, WaveSample, WindSample};

/// The simulation's output row: the vessel's predicted state at one
/// resampled track vertex.
///
/// Produced only by [`TatEngine`][crate::TatEngine]; a run's samples are
/// ordered with non-decreasing `time`.  The departure point itself is not
/// emitted — the first sample is the end of the first leg.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexSample {
    /// Where the vessel is.
    pub position: GeoPoint,

    /// Predicted instant of arrival at `position`.
    pub time: DateTime<Utc>,

    /// Speed over ground on the leg that ended here, knots.  Never below
    /// [`MIN_SOG_KN`][crate::MIN_SOG_KN].
    pub sog_kn: f64,

    /// Current at `position` at `time`.
    pub current: CurrentSample,

    /// Wind at `position` at `time`.
    pub wind: WindSample,

    /// Sea state at `position` at `time`.
    pub wave: WaveSample,

    /// Wind-against-current risk classification from `wind` and `current`.
    pub risk: RiskLevel,
}
