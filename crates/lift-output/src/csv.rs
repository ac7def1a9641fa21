//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `riders.csv`
//! - `events.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EventRow, OutputResult, RiderRow, SummaryRow};
use crate::writer::OutputWriter;

pub const RIDER_HEADER: [&str; 9] = [
    "rider", "source", "destination", "requested", "picked_up", "dropped_off", "wait", "ride", "total",
];

pub const EVENT_HEADER: [&str; 5] = ["time", "kind", "rider", "floor", "elevator_location"];

pub const SUMMARY_HEADER: [&str; 12] = [
    "label", "policy", "riders", "completed_riders", "wait_mean", "wait_median", "ride_mean",
    "ride_median", "total_mean", "total_median", "completion_time", "steps",
];

/// Writes run output to three CSV files.
pub struct CsvWriter {
    riders:   Writer<File>,
    events:   Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut riders = Writer::from_path(dir.join("riders.csv"))?;
        riders.write_record(RIDER_HEADER)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADER)?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(SUMMARY_HEADER)?;

        Ok(Self { riders, events, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_riders(&mut self, rows: &[RiderRow]) -> OutputResult<()> {
        for row in rows {
            self.riders.write_record(&[
                row.rider.to_string(),
                row.source.to_string(),
                row.destination.to_string(),
                row.requested.to_string(),
                row.picked_up.to_string(),
                row.dropped_off.to_string(),
                row.wait.to_string(),
                row.ride.to_string(),
                row.total.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.time.to_string(),
                row.kind.to_owned(),
                row.rider.map(|r| r.to_string()).unwrap_or_default(),
                row.floor.to_string(),
                row.elevator_location.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.label.clone(),
            row.policy.clone(),
            row.riders.to_string(),
            row.completed_riders.to_string(),
            row.wait_mean.to_string(),
            row.wait_median.to_string(),
            row.ride_mean.to_string(),
            row.ride_median.to_string(),
            row.total_mean.to_string(),
            row.total_median.to_string(),
            row.completion_time.to_string(),
            row.steps.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.riders.flush()?;
        self.events.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
