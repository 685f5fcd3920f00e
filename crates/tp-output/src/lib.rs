//! `tp-output` — plain-file export of evaluation results.
//!
//! The report layer that turns an evaluation into a skipper-facing document
//! lives outside this workspace; this crate is the escape hatch for tooling
//! that wants the raw numbers.  One [`CsvReport`] writes three headed CSV
//! files into a directory:
//!
//! - `trace.csv` — one row per [`VertexSample`](tp_sim::VertexSample)
//! - `cautions.csv` — one row per [`PassCaution`](tp_slack::PassCaution)
//! - `recommendations.csv` — one row per
//!   [`EtdRecommendation`](tp_etd::EtdRecommendation)
//!
//! Timestamps are RFC 3339 in UTC.

pub mod csv;
pub mod error;


pub use crate::csv::CsvReport;
pub use error::{OutputError, OutputResult};
