//! `lift-output` — output writers for the lift dispatch simulator.
//!
//! | Backend | Files created              |
//! |---------|----------------------------|
//! | CSV     | `series.csv`, `trace.csv`  |
//!
//! `series.csv` holds one row per series checkpoint and is the input for
//! plotting cost against passenger count.  `trace.csv` records every
//! floor-to-floor move of one or more runs, fed by [`TraceObserver`], which
//! implements `lift_sim::RunObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, OutputWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer, Policy::Adaptive);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! let mut writer = obs.into_writer();
//! writer.write_series(&series_rows(&series))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{SeriesRow, TraceRow, series_rows};
pub use writer::OutputWriter;
