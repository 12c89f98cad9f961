//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, SeriesRow, TraceRow};

/// Trait implemented by output backends.
///
/// Errors raised while a run is in progress are stored by
/// [`TraceObserver`][crate::TraceObserver] and retrieved with
/// [`take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of series rows.
    fn write_series(&mut self, rows: &[SeriesRow]) -> OutputResult<()>;

    /// Write one trace row.
    fn write_trace(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
