//! `lift-monitor` — performance bookkeeping for a single simulation run.
//!
//! The [`PerformanceMonitor`] is an append-only log of rider lifecycle
//! events (request, pickup, dropoff) and floor crossings.  Statistics are
//! derived on demand and never mutate the log.
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`event`]   | `PerfEvent`, `PerfEventKind`                             |
//! | [`monitor`] | `PerformanceMonitor`, `RiderStats`                       |
//! | [`summary`] | `Aggregate`, `PerformanceSummary`                        |
//! | [`error`]   | `MonitorError`, `MonitorResult`                          |

pub mod error;
pub mod event;
pub mod monitor;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::{MonitorError, MonitorResult};
pub use event::{PerfEvent, PerfEventKind};
pub use monitor::{PerformanceMonitor, RiderStats};
pub use summary::{Aggregate, PerformanceSummary};
