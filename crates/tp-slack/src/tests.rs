//! Unit tests for the slack solver.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use tp_core::{CurrentSample, GeoPoint, RiskLevel, WaveSample, WindSample};
use tp_sim::VertexSample;

use crate::{CriticalPass, SlackSolver};

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// A gate around (49.0..49.1, -123.1..-123.0), slack at local noon.
fn gate(name: &str) -> CriticalPass {
    CriticalPass {
        name: name.to_string(),
        boundary: vec![
            GeoPoint::new(49.0, -123.1),
            GeoPoint::new(49.1, -123.1),
            GeoPoint::new(49.1, -123.0),
            GeoPoint::new(49.0, -123.0),
        ],
        station_id: "07786".to_string(),
        slack_offset_min: 0,
        safe_window_min: 15,
        ebb_heading_deg: 310.0,
        flood_heading_deg: 130.0,
    }
}

/// A sample at `position` at `time` with neutral conditions.
fn sample_at(position: GeoPoint, time: DateTime<Utc>) -> VertexSample {
    VertexSample {
        position,
        time,
        sog_kn: 8.0,
        current: CurrentSample::slack(),
        wind: WindSample::calm(),
        wave: WaveSample::flat(),
        risk: RiskLevel::Low,
    }
}

fn inside_gate() -> GeoPoint {
    GeoPoint::new(49.05, -123.05)
}

fn outside_gate() -> GeoPoint {
    GeoPoint::new(48.5, -123.05)
}

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

// ── Arrival detection ─────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival {
    use super::*;

    #[test]
    fn no_intersection_no_caution() {
        let solver = SlackSolver::new(vec![gate("Narrows")]);
        let samples = vec![
            sample_at(outside_gate(), at("2024-06-01T10:00:00Z")),
            sample_at(GeoPoint::new(48.6, -123.05), at("2024-06-01T11:00:00Z")),
        ];
        assert!(solver.evaluate(&samples).is_empty());
    }

    #[test]
    fn first_intersecting_sample_is_the_arrival() {
        // Two samples inside: the first one (15:00, 3 h late) sets the
        // adjustment, not the second.
        let solver = SlackSolver::new(vec![gate("Narrows")]);
        let samples = vec![
            sample_at(outside_gate(), at("2024-06-01T14:00:00Z")),
            sample_at(inside_gate(), at("2024-06-01T15:00:00Z")),
            sample_at(inside_gate(), at("2024-06-01T15:30:00Z")),
        ];
        let cautions = solver.evaluate(&samples);
        assert_eq!(cautions.len(), 1);
        // 15:00 back to the 12:15 window end = -2h45m.
        assert_eq!(cautions[0].adjustment_secs, -(2 * 3600 + 45 * 60));
    }

    #[test]
    fn boundary_ring_corner_points_count_as_inside() {
        // Envelope containment is closed: a sample exactly on the ring's
        // corner intersects.
        let solver = SlackSolver::new(vec![gate("Narrows")]);
        let samples = vec![sample_at(GeoPoint::new(49.0, -123.1), at("2024-06-01T15:00:00Z"))];
        assert_eq!(solver.evaluate(&samples).len(), 1);
    }

    #[test]
    fn empty_boundary_ring_is_skipped() {
        let mut broken = gate("Broken");
        broken.boundary.clear();
        let solver = SlackSolver::new(vec![broken, gate("Narrows")]);
        let samples = vec![sample_at(inside_gate(), at("2024-06-01T15:00:00Z"))];

        // The malformed pass is silently skipped; the valid one still fires.
        let cautions = solver.evaluate(&samples);
        assert_eq!(cautions.len(), 1);
        assert_eq!(cautions[0].pass_name, "Narrows");
    }

    #[test]
    fn one_caution_per_pass_at_most() {
        // Many samples inside the gate, badly mistimed: still one caution.
        let solver = SlackSolver::new(vec![gate("Narrows")]);
        let samples: Vec<_> = (0..10)
            .map(|i| {
                sample_at(
                    inside_gate(),
                    at("2024-06-01T16:00:00Z") + TimeDelta::minutes(i * 10),
                )
            })
            .collect();
        assert_eq!(solver.evaluate(&samples).len(), 1);
    }

    #[test]
    fn independent_passes_each_report() {
        let mut north = gate("North");
        north.boundary = vec![GeoPoint::new(50.0, -125.0), GeoPoint::new(50.1, -124.9)];
        let solver = SlackSolver::new(vec![gate("Narrows"), north]);
        let samples = vec![
            sample_at(inside_gate(), at("2024-06-01T15:00:00Z")),
            sample_at(GeoPoint::new(50.05, -124.95), at("2024-06-01T17:00:00Z")),
        ];
        let cautions = solver.evaluate(&samples);
        assert_eq!(cautions.len(), 2);
    }
}

// ── Window math ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod window {
    use super::*;

    #[test]
    fn arrival_at_noon_plus_twenty_wants_five_minutes_earlier() {
        // safe_window ±15 min, slack offset 0: window is 11:45–12:15.
        // Arriving 12:20 ⇒ shift departure -5 min to hit the window end.
        let solver = SlackSolver::new(vec![gate("Narrows")]);
        let samples = vec![sample_at(inside_gate(), at("2024-06-01T12:20:00Z"))];
        let cautions = solver.evaluate(&samples);
        assert_eq!(cautions.len(), 1);
        assert_eq!(cautions[0].adjustment_secs, -300);
        assert_eq!(cautions[0].window_start, at("2024-06-01T11:45:00Z"));
        assert_eq!(cautions[0].window_end, at("2024-06-01T12:15:00Z"));
    }

    #[test]
    fn early_arrival_wants_later_departure() {
        // Arriving 11:00, window opens 11:45 ⇒ +45 min.
        let solver = SlackSolver::new(vec![gate("Narrows")]);
        let samples = vec![sample_at(inside_gate(), at("2024-06-01T11:00:00Z"))];
        let cautions = solver.evaluate(&samples);
        assert_eq!(cautions[0].adjustment_secs, 45 * 60);
    }

    #[test]
    fn arrival_inside_window_is_fine() {
        let solver = SlackSolver::new(vec![gate("Narrows")]);
        for time in ["2024-06-01T11:46:00Z", "2024-06-01T12:00:00Z", "2024-06-01T12:14:00Z"] {
            let samples = vec![sample_at(inside_gate(), at(time))];
            assert!(solver.evaluate(&samples).is_empty(), "{time}");
        }
    }

    #[test]
    fn window_boundaries_are_closed() {
        let solver = SlackSolver::new(vec![gate("Narrows")]);
        for boundary in ["2024-06-01T11:45:00Z", "2024-06-01T12:15:00Z"] {
            let samples = vec![sample_at(inside_gate(), at(boundary))];
            assert!(solver.evaluate(&samples).is_empty(), "exact boundary {boundary}");
        }
    }

    #[test]
    fn one_second_past_the_boundary_is_one_second_of_adjustment() {
        let solver = SlackSolver::new(vec![gate("Narrows")]);

        let samples = vec![sample_at(inside_gate(), at("2024-06-01T12:15:01Z"))];
        assert_eq!(solver.evaluate(&samples)[0].adjustment_secs, -1);

        let samples = vec![sample_at(inside_gate(), at("2024-06-01T11:44:59Z"))];
        assert_eq!(solver.evaluate(&samples)[0].adjustment_secs, 1);
    }

    #[test]
    fn slack_offset_shifts_the_window() {
        let mut shifted = gate("Narrows");
        shifted.slack_offset_min = -40; // slack at 11:20 local
        let solver = SlackSolver::new(vec![shifted]);

        // 11:20 ± 15 min ⇒ 11:05–11:35.  Noon arrival is 25 min late.
        let samples = vec![sample_at(inside_gate(), at("2024-06-01T12:00:00Z"))];
        let cautions = solver.evaluate(&samples);
        assert_eq!(cautions[0].adjustment_secs, -25 * 60);
    }

    #[test]
    fn local_offset_moves_noon() {
        // Pacific daylight time: local noon = 19:00 UTC.
        let pdt = FixedOffset::west_opt(7 * 3600).unwrap();
        let solver = SlackSolver::new(vec![gate("Narrows")]).with_local_offset(pdt);

        // 19:00 UTC arrival is dead on local noon: no caution.
        let samples = vec![sample_at(inside_gate(), at("2024-06-01T19:00:00Z"))];
        assert!(solver.evaluate(&samples).is_empty());

        // 12:20 UTC is 05:20 local — hours before the window.
        let samples = vec![sample_at(inside_gate(), at("2024-06-01T12:20:00Z"))];
        let cautions = solver.evaluate(&samples);
        assert!(cautions[0].adjustment_secs > 0);
    }

    #[test]
    fn message_names_the_pass() {
        let solver = SlackSolver::new(vec![gate("Dodd Narrows")]);
        let samples = vec![sample_at(inside_gate(), at("2024-06-01T15:00:00Z"))];
        let caution = &solver.evaluate(&samples)[0];
        assert!(caution.message.contains("Dodd Narrows"));
        assert_eq!(caution.pass_name, "Dodd Narrows");
    }
}
