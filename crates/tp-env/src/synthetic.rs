//! Deterministic synthetic forecast fields.
//!
//! # Determinism strategy
//!
//! All randomness happens once, at construction: a `SmallRng` seeded from
//! the caller's seed draws the field parameters (prevailing wind, tidal
//! stream strength and axis, phase).  Queries are then pure trigonometric
//! functions of (coordinate, instant, parameters), so the same lookup always
//! returns the same sample — the simulation core re-queries instead of
//! caching and relies on that.
//!
//! Adjacent seeds are spread across the parameter space with the same
//! golden-ratio mixing constant the rest of the ecosystem uses for seed
//! decorrelation.
//!
//! The fields are plausible coastal conditions, not a forecast: a
//! semidiurnal (~12.42 h, the M2 constituent period) sinusoidal stream
//! reversing along one principal axis, a prevailing wind with smooth spatial
//! variation, and wind-driven seas.

use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tp_core::{CurrentSample, GeoPoint, WaveSample, WindSample};

use crate::{EnvProvider, EnvResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Period of the dominant semidiurnal tidal constituent (M2), hours.
const SEMIDIURNAL_HOURS: f64 = 12.42;

/// A seeded, deterministic [`EnvProvider`].
///
/// Two instances with the same seed are interchangeable; queries never
/// fail.
pub struct SyntheticEnvironment {
    /// Prevailing wind speed, knots.
    wind_base_kn: f64,
    /// Prevailing direction the wind blows from, degrees.
    wind_from_deg: f64,
    /// Peak tidal stream speed, knots.
    stream_peak_kn: f64,
    /// Compass direction of the flood stream, degrees.
    flood_axis_deg: f64,
    /// Phase offset of the semidiurnal cycle, radians.
    tide_phase_rad: f64,
}

impl SyntheticEnvironment {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_mul(MIXING_CONSTANT));
        Self {
            wind_base_kn:   rng.gen_range(8.0..18.0),
            wind_from_deg:  rng.gen_range(0.0..360.0),
            stream_peak_kn: rng.gen_range(1.0..4.0),
            flood_axis_deg: rng.gen_range(0.0..360.0),
            tide_phase_rad: rng.gen_range(0.0..std::f64::consts::TAU),
        }
    }

    /// Hours since the Unix epoch, fractional.
    #[inline]
    fn epoch_hours(time: DateTime<Utc>) -> f64 {
        time.timestamp_millis() as f64 / 3_600_000.0
    }

    /// Signed tidal-cycle fraction in `[-1, 1]`: positive = flood, negative
    /// = ebb.  Varies slowly in space so nearby points stay coherent.
    fn tide_fraction(&self, at: GeoPoint, time: DateTime<Utc>) -> f64 {
        let t = Self::epoch_hours(time);
        let spatial = at.lat.to_radians().sin() * 0.3 + at.lon.to_radians().cos() * 0.2;
        (std::f64::consts::TAU * t / SEMIDIURNAL_HOURS + self.tide_phase_rad + spatial).sin()
    }

    fn wind_speed_kn(&self, at: GeoPoint, time: DateTime<Utc>) -> f64 {
        let t = Self::epoch_hours(time);
        // Smooth ±25 % modulation over space and a ~24 h diurnal swing.
        let wiggle = (at.lat * 0.71 + at.lon * 0.37 + t * 0.26).sin();
        self.wind_base_kn * (1.0 + 0.25 * wiggle)
    }
}

impl EnvProvider for SyntheticEnvironment {
    fn wind(&self, at: GeoPoint, time: DateTime<Utc>) -> EnvResult<WindSample> {
        let speed = self.wind_speed_kn(at, time);
        let veer = (at.lon * 0.53 + Self::epoch_hours(time) * 0.11).sin() * 20.0;
        Ok(WindSample {
            speed_kn:     speed,
            from_deg:     (self.wind_from_deg + veer).rem_euclid(360.0),
            gust_kn:      Some(speed * 1.3),
            pressure_hpa: Some(1013.0 - speed * 0.4),
            precip_mm:    None,
            temp_c:       Some(14.0 - at.lat.abs() * 0.05),
        })
    }

    fn current(&self, at: GeoPoint, time: DateTime<Utc>) -> EnvResult<CurrentSample> {
        let fraction = self.tide_fraction(at, time);
        let toward = if fraction >= 0.0 {
            self.flood_axis_deg
        } else {
            (self.flood_axis_deg + 180.0).rem_euclid(360.0)
        };
        Ok(CurrentSample::from_polar(
            self.stream_peak_kn * fraction.abs(),
            toward,
        ))
    }

    fn wave(&self, at: GeoPoint, time: DateTime<Utc>) -> EnvResult<WaveSample> {
        let wind = self.wind_speed_kn(at, time);
        Ok(WaveSample {
            // Crude fetch-limited growth curve: tenths of a metre in light
            // air, ~2 m at a 20 kn blow.
            height_m: 0.005 * wind.powf(2.0),
            period_s: (0.3 * wind).max(2.0),
            from_deg: self.wind_from_deg,
        })
    }
}
