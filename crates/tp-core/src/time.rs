//! Fractional-hour ⇄ `TimeDelta` conversion.
//!
//! Segment transit times come out of the simulation as fractional hours
//! (`distance_nm / speed_kn`).  Converting through whole milliseconds keeps
//! the simulated clock exact enough for slack-window math (which compares
//! instants at one-second resolution) without accumulating float drift over
//! a long track.

use chrono::TimeDelta;

/// Convert fractional hours to a `TimeDelta`, rounded to the nearest
/// millisecond.
#[inline]
pub fn hours(h: f64) -> TimeDelta {
    TimeDelta::milliseconds((h * 3_600_000.0).round() as i64)
}

/// Fractional hours spanned by a `TimeDelta`.
#[inline]
pub fn duration_hours(d: TimeDelta) -> f64 {
    d.num_milliseconds() as f64 / 3_600_000.0
}
