//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `series.csv`
//! - `trace.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, SeriesRow, TraceRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    series:   Writer<File>,
    trace:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut series = Writer::from_path(dir.join("series.csv"))?;
        series.write_record(["passengers", "baseline_cost", "adaptive_cost"])?;

        let mut trace = Writer::from_path(dir.join("trace.csv"))?;
        trace.write_record(["policy", "step", "from_floor", "to_floor", "load", "cost"])?;

        Ok(Self {
            series,
            trace,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_series(&mut self, rows: &[SeriesRow]) -> OutputResult<()> {
        for row in rows {
            self.series.write_record(&[
                row.passengers.to_string(),
                row.baseline_cost.to_string(),
                row.adaptive_cost.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.trace.write_record(&[
            row.policy.to_string(),
            row.step.to_string(),
            row.from_floor.to_string(),
            row.to_floor.to_string(),
            row.load.to_string(),
            row.cost.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.series.flush()?;
        self.trace.flush()?;
        Ok(())
    }
}
