//! The slack solver: scans a simulated trace against configured gates.

use chrono::{FixedOffset, NaiveTime, Offset, TimeDelta, Utc};
use rstar::{Envelope, AABB};
use tp_sim::VertexSample;

use crate::{CriticalPass, PassCaution};

/// Evaluates a trace against a set of tidal gates.
///
/// Gates are independent: each is matched against the trace on its own and
/// produces at most one caution.  The solver holds no state across calls.
pub struct SlackSolver {
    passes: Vec<CriticalPass>,
    /// Offset defining "local" for the noon-based slack heuristic.
    local_offset: FixedOffset,
}

impl SlackSolver {
    /// Solver with "local noon" interpreted as UTC noon.
    pub fn new(passes: Vec<CriticalPass>) -> Self {
        Self {
            passes,
            local_offset: Utc.fix(),
        }
    }

    /// Use the passage area's UTC offset for the noon heuristic.
    pub fn with_local_offset(mut self, offset: FixedOffset) -> Self {
        self.local_offset = offset;
        self
    }

    #[inline]
    pub fn passes(&self) -> &[CriticalPass] {
        &self.passes
    }

    /// Scan `samples` (one TAT run, in track order) and return the timing
    /// cautions.  At most one caution per configured pass; order follows
    /// the pass configuration, not severity.
    pub fn evaluate(&self, samples: &[VertexSample]) -> Vec<PassCaution> {
        self.passes
            .iter()
            .filter_map(|pass| self.evaluate_pass(pass, samples))
            .collect()
    }

    fn evaluate_pass(&self, pass: &CriticalPass, samples: &[VertexSample]) -> Option<PassCaution> {
        if pass.boundary.is_empty() {
            log::debug!("pass {:?} has an empty boundary ring, skipping", pass.name);
            return None;
        }

        // First sample inside the envelope = arrival at the gate.
        let envelope: AABB<[f64; 2]> = pass.envelope();
        let arrival = samples
            .iter()
            .find(|s| envelope.contains_point(&[s.position.lat, s.position.lon]))?
            .time;

        // Slack heuristic: local noon of the arrival day, shifted by the
        // gate's offset.
        let local = arrival.with_timezone(&self.local_offset);
        let since_midnight = local.time().signed_duration_since(NaiveTime::MIN);
        let noon = local - since_midnight + TimeDelta::hours(12);
        let slack = (noon + TimeDelta::minutes(pass.slack_offset_min as i64)).with_timezone(&Utc);

        let half = TimeDelta::minutes(pass.safe_window_min as i64);
        let window_start = slack - half;
        let window_end = slack + half;

        if arrival >= window_start && arrival <= window_end {
            return None;
        }

        // Shift departure just far enough to put arrival on the nearer
        // boundary.  Early arrival wants a later departure (positive).
        let nearer = if arrival < window_start { window_start } else { window_end };
        let adjustment_secs = (nearer - arrival).num_seconds();

        let minutes = adjustment_secs as f64 / 60.0;
        let message = format!(
            "{}: ETA {} is outside the slack window {}–{}; shift departure by {:+.0} min",
            pass.name,
            arrival.format("%H:%M"),
            window_start.format("%H:%M"),
            window_end.format("%H:%M"),
            minutes,
        );
        log::debug!("{message}");

        Some(PassCaution {
            pass_name: pass.name.clone(),
            message,
            adjustment_secs,
            window_start,
            window_end,
        })
    }
}
