//! `lift-output` — result writers for liftsim runs.
//!
//! Two tabular backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                                 |
//! |-----------|---------|-----------------------------------------------|
//! | *(none)*  | CSV     | `riders.csv`, `events.csv`, `summary.csv`     |
//! | `sqlite`  | SQLite  | `output.db`                                   |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `lift_sim::SimObserver`.
//!
//! The [`json`] module additionally writes the event document consumed by
//! the browser visualiser and a machine-readable run summary, and
//! [`batch`] flattens a batch comparison into one CSV.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, "office_day");
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod batch;
pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use batch::write_batch_csv;
pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::{write_summary_json, write_visualization_json};
pub use observer::SimOutputObserver;
pub use row::{EventRow, RiderRow, SummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
