//! Tidal-gate configuration.

use rstar::AABB;
use tp_core::GeoPoint;

/// A configured tidal gate: a chokepoint that should be transited near
/// slack water.
///
/// Supplied by the caller per evaluation — there is no built-in catalog and
/// nothing is persisted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalPass {
    /// Display name, e.g. "Seymour Narrows".
    pub name: String,

    /// Boundary ring of the gate area.  Only its bounding envelope is used
    /// for intersection tests.  An empty ring marks the pass malformed and
    /// it is skipped during evaluation.
    pub boundary: Vec<GeoPoint>,

    /// Reference tide station identifier.  Informational only.
    pub station_id: String,

    /// Signed minutes between local noon and this gate's slack, e.g. -40
    /// for a slack that falls at 11:20 local.
    pub slack_offset_min: i32,

    /// Half-width of the safe transit window, minutes either side of slack.
    pub safe_window_min: u32,

    /// Nominal compass heading of the ebb stream.  Informational only.
    pub ebb_heading_deg: f64,

    /// Nominal compass heading of the flood stream.  Informational only.
    pub flood_heading_deg: f64,
}

impl CriticalPass {
    /// Axis-aligned `[lat, lon]` bounding envelope of the boundary ring.
    ///
    /// An empty ring yields the empty envelope, which contains nothing.
    pub fn envelope(&self) -> AABB<[f64; 2]> {
        let corners: Vec<[f64; 2]> = self.boundary.iter().map(|p| [p.lat, p.lon]).collect();
        AABB::from_points(corners.iter())
    }
}
