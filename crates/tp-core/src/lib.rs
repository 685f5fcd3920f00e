//! `tp-core` — foundational types for the `tidepath` passage planner.
//!
//! This crate is a dependency of every other `tp-*` crate.  It intentionally
//! has no `tp-*` dependencies and minimal external ones (only `chrono`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, haversine distance, initial bearing         |
//! | [`vector`]  | `Vector2` — planar east/north velocity in knots         |
//! | [`samples`] | `WindSample`, `CurrentSample`, `WaveSample`             |
//! | [`risk`]    | `RiskLevel` enum                                        |
//! | [`time`]    | fractional-hour ⇄ `TimeDelta` conversion helpers        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod risk;
pub mod samples;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use risk::RiskLevel;
pub use samples::{CurrentSample, WaveSample, WindSample};
pub use time::{duration_hours, hours};
pub use vector::Vector2;
