//! `tp-etd` — departure-time optimization.
//!
//! # What it does
//!
//! Sweeps candidate departure instants around a reference time, runs the
//! TAT engine and slack solver for each, scores them, and returns the top
//! three:
//!
//! ```text
//! objective = mean vertex risk weight + Σ |slack adjustment| in hours
//! ```
//!
//! Lower is better.  Ties keep sweep (chronological) order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates candidates on Rayon's thread pool.  Output   |
//! |            | is identical to the sequential sweep.                  |
//! | `serde`    | Serde derives on `EtdRecommendation` and `EtdConfig`.  |

pub mod error;
pub mod optimizer;


pub use error::{EtdError, EtdResult};
pub use optimizer::{EtdConfig, EtdOptimizer, EtdRecommendation};
