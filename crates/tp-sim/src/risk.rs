//! Wind-against-current risk index.
//!
//! Wind blowing over an opposing stream steepens and shortens the sea —
//! the classic "wind-against-tide" chop that makes a 3 kn pass dangerous in
//! 20 kn of breeze.  The index multiplies the aligned component of wind and
//! current speeds (kn²) and maps it onto three bands with fixed thresholds.

use tp_core::{CurrentSample, RiskLevel, WindSample};

/// Floor applied to speed over ground, knots.  Keeps leg transit times
/// finite when the stream opposes and exceeds the commanded speed.
pub const MIN_SOG_KN: f64 = 0.5;

/// Index value above which a vertex is classified [`RiskLevel::Moderate`].
pub const WA_MODERATE: f64 = 6.0;

/// Index value above which a vertex is classified [`RiskLevel::High`].
pub const WA_HIGH: f64 = 12.0;

/// The wind-against-current index, kn².
///
/// `windHeading` is the direction the wind blows *toward* (the
/// meteorological "from" + 180°); the angle between it and the current's
/// flow direction is folded into `[0°, 180°]` and only its cosine's
/// positive part contributes:
///
/// ```text
/// WA = max(0, cos angle) · windSpeed · currentSpeed
/// ```
pub fn wind_against_current(wind: &WindSample, current: &CurrentSample) -> f64 {
    let toward_deg = (wind.from_deg + 180.0).rem_euclid(360.0);
    let mut angle = (toward_deg - current.direction_deg()).abs() % 360.0;
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    let opposing = angle.to_radians().cos().max(0.0);
    opposing * wind.speed_kn * current.speed_kn()
}

/// Map the index onto a [`RiskLevel`] band.
pub fn classify_risk(wind: &WindSample, current: &CurrentSample) -> RiskLevel {
    let wa = wind_against_current(wind, current);
    if wa > WA_HIGH {
        RiskLevel::High
    } else if wa > WA_MODERATE {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}
