//! The `Route` type: ordered waypoints, distance, resampling.

use tp_core::GeoPoint;

/// An ordered, immutable sequence of waypoints.
///
/// Construct once; all operations return derived values or new routes.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    points: Vec<GeoPoint>,
}

impl Route {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// A route with no waypoints.  Every derived quantity is zero/empty.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The departure waypoint, if any.
    #[inline]
    pub fn start(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    /// The destination waypoint, if any.
    #[inline]
    pub fn end(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    /// Iterator over consecutive waypoint pairs.
    pub fn legs(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Sum of consecutive great-circle leg lengths, in nautical miles.
    ///
    /// Zero for routes with fewer than two points.
    pub fn total_distance_nm(&self) -> f64 {
        self.legs().map(|(a, b)| a.distance_nm(b)).sum()
    }

    /// Subdivide every leg into steps of at most `delta_nm`.
    ///
    /// Each leg is split into `ceil(leg_nm / delta_nm)` linear-interpolation
    /// steps in lat/lon space — not great-circle interpolation, which is
    /// acceptable at sub-degree leg sizes.  The leg's start point and
    /// interior points are emitted (skipping a point identical to the one
    /// already emitted), and the route's own final waypoint is appended at
    /// the end, so the output always terminates exactly on the destination.
    ///
    /// Subdivision is computed per leg, so spacing can undershoot `delta_nm`
    /// just before each original waypoint.
    ///
    /// A non-positive `delta_nm` returns an unresampled copy.
    pub fn resample(&self, delta_nm: f64) -> Route {
        if self.points.len() < 2 || !(delta_nm > 0.0) {
            return self.clone();
        }

        let mut out: Vec<GeoPoint> = Vec::with_capacity(self.points.len());
        for (a, b) in self.legs() {
            let steps = (a.distance_nm(b) / delta_nm).ceil() as usize;
            for i in 0..steps {
                let t = i as f64 / steps as f64;
                let p = GeoPoint::new(
                    a.lat + (b.lat - a.lat) * t,
                    a.lon + (b.lon - a.lon) * t,
                );
                if out.last() != Some(&p) {
                    out.push(p);
                }
            }
        }
        // `legs()` never emits a leg's end point, so this close-out cannot
        // duplicate the destination.
        out.push(self.points[self.points.len() - 1]);

        Route::new(out)
    }
}
