//! Slack-timing caution emitted for one gate.

use chrono::{DateTime, Utc};

/// A warning that the simulated transit of a gate falls outside its safe
/// slack window, with the departure-time correction that would fix it.
///
/// At most one per [`CriticalPass`][crate::CriticalPass] per evaluation.
/// Never persisted; rendered directly by report layers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassCaution {
    /// Name of the gate this caution refers to.
    pub pass_name: String,

    /// Human-readable summary of the problem and the fix.
    pub message: String,

    /// Signed departure adjustment in seconds that moves arrival to the
    /// nearer window boundary.  Negative = depart earlier.
    pub adjustment_secs: i64,

    /// Start of the safe transit window (inclusive).
    pub window_start: DateTime<Utc>,

    /// End of the safe transit window (inclusive).
    pub window_end: DateTime<Utc>,
}
