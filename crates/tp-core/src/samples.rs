//! Environmental sample value types.
//!
//! One sample = one provider reading at one coordinate and instant.  The
//! neutral constructors (`calm`, `slack`, `flat`) double as the substitution
//! values used when a provider query fails: "unknown" is represented as
//! "nothing happening", never as an error the simulation has to handle.
//!
//! # Direction conventions
//!
//! Wind and waves report the direction they come **from** (meteorological
//! convention); current reports the direction it flows **toward**.  Mixing
//! these up inverts the wind-against-current index, so the field names spell
//! it out.

use crate::Vector2;

// ── WindSample ────────────────────────────────────────────────────────────────

/// A wind reading.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindSample {
    /// Sustained wind speed, knots.
    pub speed_kn: f64,
    /// Direction the wind blows *from*, compass degrees.
    pub from_deg: f64,
    /// Gust speed, knots, if the provider reports one.
    pub gust_kn: Option<f64>,
    /// Sea-level pressure, hPa.
    pub pressure_hpa: Option<f64>,
    /// Precipitation rate, mm/h.
    pub precip_mm: Option<f64>,
    /// Air temperature, °C.
    pub temp_c: Option<f64>,
}

impl WindSample {
    /// The neutral reading: no wind.
    #[inline]
    pub fn calm() -> Self {
        Self::default()
    }
}

// ── CurrentSample ─────────────────────────────────────────────────────────────

/// A surface-current reading — a thin wrapper over the flow vector.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrentSample {
    /// Flow velocity (direction of travel, not "from").
    pub velocity: Vector2,
}

impl CurrentSample {
    #[inline]
    pub fn from_vector(velocity: Vector2) -> Self {
        Self { velocity }
    }

    /// Build from a speed and the compass direction of flow.
    #[inline]
    pub fn from_polar(speed_kn: f64, toward_deg: f64) -> Self {
        Self { velocity: Vector2::from_polar(speed_kn, toward_deg) }
    }

    /// The neutral reading: slack water, zero flow.
    #[inline]
    pub fn slack() -> Self {
        Self::default()
    }

    /// Flow speed in knots.
    #[inline]
    pub fn speed_kn(self) -> f64 {
        self.velocity.magnitude()
    }

    /// Compass direction of flow in `[0, 360)` degrees.
    #[inline]
    pub fn direction_deg(self) -> f64 {
        self.velocity.direction_deg()
    }
}

// ── WaveSample ────────────────────────────────────────────────────────────────

/// A sea-state reading.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveSample {
    /// Significant wave height, metres.
    pub height_m: f64,
    /// Peak period, seconds.
    pub period_s: f64,
    /// Direction the waves come *from*, compass degrees.
    pub from_deg: f64,
}

impl WaveSample {
    /// The neutral reading: flat water.
    #[inline]
    pub fn flat() -> Self {
        Self::default()
    }
}
