//! `TraceObserver<W>` — bridges `RunObserver` to an `OutputWriter`.

use lift_core::Floor;
use lift_dispatch::Policy;
use lift_sim::RunObserver;

use crate::row::TraceRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RunObserver`] that writes one [`TraceRow`] per move to any
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `RunObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].  The writer is not finished at the end
/// of a run so several runs can share one trace file; call
/// [`OutputWriter::finish`] on the writer when done.
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    policy:     Policy,
    step:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    /// Create an observer backed by `writer`, labelling rows with `policy`.
    pub fn new(writer: W, policy: Policy) -> Self {
        Self {
            writer,
            policy,
            step:       0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to trace another run or write a series).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for TraceObserver<W> {
    fn on_move(&mut self, from: Floor, to: Floor, load: usize, cost: u64) {
        self.step += 1;
        let row = TraceRow {
            policy:     self.policy,
            step:       self.step,
            from_floor: from.0,
            to_floor:   to.0,
            load:       load as u32,
            cost,
        };
        let result = self.writer.write_trace(&row);
        self.store_err(result);
    }
}
