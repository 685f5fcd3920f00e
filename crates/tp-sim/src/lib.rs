//! `tp-sim` — the time-along-track (TAT) engine.
//!
//! # Forward march
//!
//! ```text
//! clock = departure
//! for each consecutive pair (a, b) of the resampled track:
//!   ① Geometry — leg length (NM) and true bearing a → b.
//!   ② Set      — current sampled at a, at the not-yet-advanced clock
//!                (lookup failure ⇒ slack water).
//!   ③ Compose  — SOG = max(0.5 kn, |through-water vector + current|).
//!   ④ Advance  — clock += length / SOG hours; this is the ETA at b.
//!   ⑤ Observe  — wind, current, wave sampled at b at the new clock
//!                (each failure ⇒ neutral); classify risk; emit sample.
//! ```
//!
//! Each leg's lookups depend on the clock value the previous leg produced,
//! so one run is strictly sequential.  Parallelism belongs one level up, at
//! independent runs (see `tp-etd`).
//!
//! # Cargo features
//!
//! | Feature | Effect                                      |
//! |---------|---------------------------------------------|
//! | `serde` | Serde derives on `VertexSample`.            |

pub mod engine;
pub mod risk;
pub mod vertex;


pub use engine::TatEngine;
pub use risk::{classify_risk, wind_against_current, MIN_SOG_KN};
pub use vertex::VertexSample;
