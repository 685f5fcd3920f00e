//! `tp-route` — the planned-passage route model.
//!
//! A [`Route`] is an immutable ordered list of waypoints: first = departure,
//! last = destination.  The two operations the simulation needs are total
//! great-circle length and resampling to a regular along-track interval.
//!
//! # Degenerate routes
//!
//! Routes with fewer than two points are valid values, not errors: distance
//! is zero, resampling returns what there is, and the TAT engine produces an
//! empty trace.  Callers never have to pre-validate.

pub mod route;


pub use route::Route;
