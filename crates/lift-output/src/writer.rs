//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult, RiderRow, SummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write per-rider statistics.
    fn write_riders(&mut self, rows: &[RiderRow]) -> OutputResult<()>;

    /// Write a batch of logged events.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write one run summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
