//! Planar velocity vector in knots.
//!
//! `Vector2` carries east/north components so that current and through-water
//! velocities compose by plain addition.  Directions follow the compass
//! convention (0° = north, 90° = east), which puts `sin` on the east axis
//! and `cos` on the north axis — the reverse of the math convention.

use std::ops::{Add, Mul, Sub};

/// An (east, north) velocity vector in knots.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// Eastward component, knots.
    pub east: f64,
    /// Northward component, knots.
    pub north: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { east: 0.0, north: 0.0 };

    #[inline]
    pub fn new(east: f64, north: f64) -> Self {
        Self { east, north }
    }

    /// Build a vector from a speed and a compass heading.
    ///
    /// `heading_deg` is the direction of travel: 0° = north, 90° = east.
    #[inline]
    pub fn from_polar(speed_kn: f64, heading_deg: f64) -> Self {
        let h = heading_deg.to_radians();
        Self {
            east:  speed_kn * h.sin(),
            north: speed_kn * h.cos(),
        }
    }

    /// Vector length in knots.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.east.hypot(self.north)
    }

    /// Compass direction of travel in `[0, 360)` degrees.
    ///
    /// The zero vector maps to 0° (due north) — callers that care should
    /// test `magnitude()` first.
    #[inline]
    pub fn direction_deg(self) -> f64 {
        self.east.atan2(self.north).to_degrees().rem_euclid(360.0)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.east + rhs.east, self.north + rhs.north)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.east - rhs.east, self.north - rhs.north)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, factor: f64) -> Vector2 {
        Vector2::new(self.east * factor, self.north * factor)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kn @ {:.0}°", self.magnitude(), self.direction_deg())
    }
}
