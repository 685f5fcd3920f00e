//! CSV report backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tp_etd::EtdRecommendation;
use tp_sim::VertexSample;
use tp_slack::PassCaution;

use crate::OutputResult;

/// Writes one evaluation's results to three CSV files.
pub struct CsvReport {
    trace:           Writer<File>,
    cautions:        Writer<File>,
    recommendations: Writer<File>,
    finished:        bool,
}

impl CsvReport {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn create(dir: &Path) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join("trace.csv"))?;
        trace.write_record([
            "time", "lat", "lon", "sog_kn",
            "current_kn", "current_deg",
            "wind_kn", "wind_from_deg",
            "wave_m", "risk",
        ])?;

        let mut cautions = Writer::from_path(dir.join("cautions.csv"))?;
        cautions.write_record([
            "pass", "adjustment_secs", "window_start", "window_end", "message",
        ])?;

        let mut recommendations = Writer::from_path(dir.join("recommendations.csv"))?;
        recommendations.write_record(["departure", "objective", "justification"])?;

        Ok(Self {
            trace,
            cautions,
            recommendations,
            finished: false,
        })
    }

    /// Append the rows of one simulated trace.
    pub fn write_trace(&mut self, samples: &[VertexSample]) -> OutputResult<()> {
        for s in samples {
            self.trace.write_record(&[
                s.time.to_rfc3339(),
                format!("{:.6}", s.position.lat),
                format!("{:.6}", s.position.lon),
                format!("{:.2}", s.sog_kn),
                format!("{:.2}", s.current.speed_kn()),
                format!("{:.1}", s.current.direction_deg()),
                format!("{:.2}", s.wind.speed_kn),
                format!("{:.1}", s.wind.from_deg),
                format!("{:.2}", s.wave.height_m),
                s.risk.as_str().to_string(),
            ])?;
        }
        Ok(())
    }

    /// Append one slack evaluation's cautions.
    pub fn write_cautions(&mut self, cautions: &[PassCaution]) -> OutputResult<()> {
        for c in cautions {
            self.cautions.write_record(&[
                c.pass_name.clone(),
                c.adjustment_secs.to_string(),
                c.window_start.to_rfc3339(),
                c.window_end.to_rfc3339(),
                c.message.clone(),
            ])?;
        }
        Ok(())
    }

    /// Append one optimizer sweep's recommendations.
    pub fn write_recommendations(&mut self, recs: &[EtdRecommendation]) -> OutputResult<()> {
        for r in recs {
            self.recommendations.write_record(&[
                r.departure.to_rfc3339(),
                format!("{:.4}", r.objective),
                r.justification.clone(),
            ])?;
        }
        Ok(())
    }

    /// Flush all files.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.cautions.flush()?;
        self.recommendations.flush()?;
        Ok(())
    }
}
