//! Geographic coordinate type and great-circle utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude (WGS-84 degrees).  Coastal
//! passages span hundreds of nautical miles and downstream slack-window
//! arithmetic is second-sensitive, so the extra width over `f32` matters
//! here — distance errors feed straight into simulated arrival times.

/// Mean Earth radius in metres (haversine sphere).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Metres per nautical mile.
const M_PER_NM: f64 = 1_852.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in nautical miles.
    ///
    /// Symmetric, and exactly zero for `self == other`.
    pub fn distance_nm(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c / M_PER_NM
    }

    /// Initial true bearing from `self` to `other`, in `[0, 360)` degrees.
    ///
    /// Periodic in the longitude delta: shifting `other.lon` by any multiple
    /// of 360° gives the same bearing.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        y.atan2(x).to_degrees().rem_euclid(360.0)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
