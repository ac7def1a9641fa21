//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_monitor::PerformanceMonitor;
use lift_sim::{SimObserver, SimReport};

use crate::row::{EventRow, RiderRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes rider statistics, the event log and the
/// run summary to any [`OutputWriter`] backend once the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    label:      String,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`; `label` tags the summary row.
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self { writer, label: label.into(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
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

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_sim_end(&mut self, monitor: &PerformanceMonitor, report: &SimReport) {
        let riders: Vec<RiderRow> = monitor.rider_stats().iter().map(RiderRow::from).collect();
        let result = self.writer.write_riders(&riders);
        self.store_err(result);

        let events: Vec<EventRow> = monitor.events_sorted().iter().map(EventRow::from).collect();
        let result = self.writer.write_events(&events);
        self.store_err(result);

        let result = self.writer.write_summary(&SummaryRow::from_report(&self.label, report));
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
