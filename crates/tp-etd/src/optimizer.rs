//! The departure-time grid search.

use chrono::{DateTime, TimeDelta, Utc};
use tp_core::time::hours;
use tp_env::EnvProvider;
use tp_route::Route;
use tp_sim::TatEngine;
use tp_slack::SlackSolver;

use crate::{EtdError, EtdResult};

/// How many recommendations a sweep returns at most.
const MAX_RECOMMENDATIONS: usize = 3;

// ── EtdConfig ─────────────────────────────────────────────────────────────────

/// Sweep parameters.
///
/// `resample_nm` is deliberately coarser than a briefing-grade trace — a
/// sweep runs the simulation dozens of times and the objective only needs
/// vertex-level resolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EtdConfig {
    /// Candidates span `reference ± half_window_hours`.
    pub half_window_hours: f64,
    /// Spacing between candidates, minutes.  Must be positive.
    pub step_minutes: u32,
    /// Track resampling interval handed to the TAT engine.  Must be
    /// positive.
    pub resample_nm: f64,
}

impl Default for EtdConfig {
    /// ±3 h in 30 min steps over a 2 NM track.
    fn default() -> Self {
        Self {
            half_window_hours: 3.0,
            step_minutes:      30,
            resample_nm:       2.0,
        }
    }
}

// ── EtdRecommendation ─────────────────────────────────────────────────────────

/// One scored departure candidate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EtdRecommendation {
    /// The candidate departure instant.
    pub departure: DateTime<Utc>,

    /// Scalar objective — lower is better.
    pub objective: f64,

    /// Human-readable score breakdown.
    pub justification: String,
}

// ── EtdOptimizer ──────────────────────────────────────────────────────────────

/// Grid-searches departure times for a route.
///
/// Owns the TAT engine and slack solver it drives; both are stateless, so
/// one optimizer can score any number of routes.
pub struct EtdOptimizer<E: EnvProvider> {
    engine: TatEngine<E>,
    solver: SlackSolver,
    config: EtdConfig,
}

impl<E: EnvProvider> EtdOptimizer<E> {
    /// Validates the configuration up front so a sweep can't silently run
    /// zero or infinitely many candidates.
    pub fn new(engine: TatEngine<E>, solver: SlackSolver, config: EtdConfig) -> EtdResult<Self> {
        if config.step_minutes == 0 {
            return Err(EtdError::Config("step_minutes must be positive".into()));
        }
        if !(config.resample_nm > 0.0) {
            return Err(EtdError::Config("resample_nm must be positive".into()));
        }
        if !(config.half_window_hours >= 0.0) {
            return Err(EtdError::Config("half_window_hours must be non-negative".into()));
        }
        Ok(Self { engine, solver, config })
    }

    /// Sweep departures in `reference ± half_window` and return up to three
    /// recommendations, best first.
    ///
    /// Candidates whose simulation yields no samples (degenerate route) are
    /// skipped entirely, so such a route produces an empty list.
    pub fn optimize(
        &self,
        route:     &Route,
        stw_kn:    f64,
        reference: DateTime<Utc>,
    ) -> Vec<EtdRecommendation> {
        let candidates = self.candidates(reference);
        let mut scored = self.evaluate_candidates(route, stw_kn, &candidates);

        // Stable sort: equal objectives keep chronological sweep order.
        scored.sort_by(|a, b| a.objective.total_cmp(&b.objective));
        scored.truncate(MAX_RECOMMENDATIONS);
        scored
    }

    /// Candidate instants in ascending order, both window edges inclusive.
    fn candidates(&self, reference: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let start = reference - hours(self.config.half_window_hours);
        let end = reference + hours(self.config.half_window_hours);
        let step = TimeDelta::minutes(self.config.step_minutes as i64);

        let mut out = Vec::new();
        let mut t = start;
        while t <= end {
            out.push(t);
            t += step;
        }
        out
    }

    /// Score every candidate, preserving input order.
    ///
    /// With the `parallel` feature the map runs on Rayon's pool; collection
    /// keeps candidate order either way, so the subsequent stable sort sees
    /// the same input and the sweep result is schedule-independent.
    fn evaluate_candidates(
        &self,
        route:      &Route,
        stw_kn:     f64,
        candidates: &[DateTime<Utc>],
    ) -> Vec<EtdRecommendation> {
        #[cfg(not(feature = "parallel"))]
        {
            candidates
                .iter()
                .filter_map(|&etd| self.evaluate(route, stw_kn, etd))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            candidates
                .par_iter()
                .filter_map(|&etd| self.evaluate(route, stw_kn, etd))
                .collect()
        }
    }

    /// Score one candidate; `None` when the route simulates to nothing.
    fn evaluate(
        &self,
        route:  &Route,
        stw_kn: f64,
        etd:    DateTime<Utc>,
    ) -> Option<EtdRecommendation> {
        let samples = self
            .engine
            .simulate(route, etd, stw_kn, self.config.resample_nm);
        if samples.is_empty() {
            return None;
        }

        let mean_risk = samples.iter().map(|s| s.risk.weight()).sum::<f64>() / samples.len() as f64;

        let slack_penalty_hours = self
            .solver
            .evaluate(&samples)
            .iter()
            .map(|c| c.adjustment_secs.unsigned_abs() as f64 / 3600.0)
            .sum::<f64>();

        let objective = mean_risk + slack_penalty_hours;
        log::debug!("ETD {etd}: mean risk {mean_risk:.2}, slack {slack_penalty_hours:.2} h");

        Some(EtdRecommendation {
            departure: etd,
            objective,
            justification: format!(
                "mean risk {mean_risk:.2}, slack penalty {slack_penalty_hours:.2} h"
            ),
        })
    }
}
