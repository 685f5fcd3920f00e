//! The `TatEngine` forward-marching simulation.

use chrono::{DateTime, Utc};
use tp_core::time::hours;
use tp_core::{CurrentSample, GeoPoint, Vector2, WaveSample, WindSample};
use tp_env::EnvProvider;
use tp_route::Route;

use crate::risk::{classify_risk, MIN_SOG_KN};
use crate::VertexSample;

/// Simulates a passage along a route, leg by leg, against an injected
/// environment.
///
/// The engine is stateless between calls: [`simulate`][TatEngine::simulate]
/// is a pure function of its arguments plus whatever the provider returns,
/// so repeated identical calls repeat identical provider queries.  Any
/// caching belongs inside the provider.
///
/// # Type parameter
///
/// `E` is the environment capability (e.g. [`tp_env::SyntheticEnvironment`]
/// for deterministic runs).  Swap implementations at compile time with no
/// runtime overhead.
pub struct TatEngine<E: EnvProvider> {
    env: E,
}

impl<E: EnvProvider> TatEngine<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Read-only access to the injected provider.
    #[inline]
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Run the time-along-track simulation.
    ///
    /// `resample_nm` is caller-tunable: fine (≤ 1 NM) for briefing-grade
    /// traces, coarse for optimizer sweeps.  Returns one [`VertexSample`]
    /// per resampled vertex after the first; a route that resamples to
    /// fewer than two points yields an empty trace.
    pub fn simulate(
        &self,
        route:       &Route,
        departure:   DateTime<Utc>,
        stw_kn:      f64,
        resample_nm: f64,
    ) -> Vec<VertexSample> {
        let track = route.resample(resample_nm);
        let points = track.points();
        if points.len() < 2 {
            return vec![];
        }

        let mut clock = departure;
        let mut samples = Vec::with_capacity(points.len() - 1);

        for w in points.windows(2) {
            let (a, b) = (w[0], w[1]);

            // ── ① Geometry ────────────────────────────────────────────────
            let leg_nm  = a.distance_nm(b);
            let bearing = a.bearing_deg(b);

            // ── ② Set at the leg start, before advancing the clock ────────
            let set = self.current_or_slack(a, clock);

            // ── ③ Compose ground velocity ─────────────────────────────────
            let through_water = Vector2::from_polar(stw_kn, bearing);
            let sog_kn = (through_water + set.velocity)
                .magnitude()
                .max(MIN_SOG_KN);

            // ── ④ Advance to the ETA at the leg end ───────────────────────
            clock += hours(leg_nm / sog_kn);

            // ── ⑤ Observe conditions on arrival and emit ──────────────────
            let wind    = self.wind_or_calm(b, clock);
            let current = self.current_or_slack(b, clock);
            let wave    = self.wave_or_flat(b, clock);
            let risk    = classify_risk(&wind, &current);

            samples.push(VertexSample {
                position: b,
                time: clock,
                sog_kn,
                current,
                wind,
                wave,
                risk,
            });
        }

        if let Some(last) = samples.last() {
            log::trace!("TAT: {} legs, ETA {}", samples.len(), last.time);
        }
        samples
    }

    // ── Neutral-substitution lookups ──────────────────────────────────────
    //
    // A failed lookup means "unknown", and unknown conditions are simulated
    // as none.  Failures never abort a leg or a run.

    fn wind_or_calm(&self, at: GeoPoint, time: DateTime<Utc>) -> WindSample {
        self.env.wind(at, time).unwrap_or_else(|e| {
            log::debug!("wind unavailable at {at}: {e}");
            WindSample::calm()
        })
    }

    fn current_or_slack(&self, at: GeoPoint, time: DateTime<Utc>) -> CurrentSample {
        self.env.current(at, time).unwrap_or_else(|e| {
            log::debug!("current unavailable at {at}: {e}");
            CurrentSample::slack()
        })
    }

    fn wave_or_flat(&self, at: GeoPoint, time: DateTime<Utc>) -> WaveSample {
        self.env.wave(at, time).unwrap_or_else(|e| {
            log::debug!("wave unavailable at {at}: {e}");
            WaveSample::flat()
        })
    }
}
