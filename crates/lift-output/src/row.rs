//! Plain data row types written by output backends.

use lift_monitor::{PerfEvent, RiderStats};
use lift_sim::SimReport;

/// Lifecycle and derived durations of one delivered rider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiderRow {
    pub rider:       u32,
    pub source:      u32,
    pub destination: u32,
    pub requested:   f64,
    pub picked_up:   f64,
    pub dropped_off: f64,
    pub wait:        f64,
    pub ride:        f64,
    pub total:       f64,
}

impl From<&RiderStats> for RiderRow {
    fn from(s: &RiderStats) -> Self {
        Self {
            rider:       s.rider.0,
            source:      s.source.0,
            destination: s.destination.0,
            requested:   s.requested.secs(),
            picked_up:   s.picked_up.secs(),
            dropped_off: s.dropped_off.secs(),
            wait:        s.wait,
            ride:        s.ride,
            total:       s.total,
        }
    }
}

/// One entry of the monitor's event log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub time:              f64,
    pub kind:              &'static str,
    /// `None` for floor crossings.
    pub rider:             Option<u32>,
    pub floor:             u32,
    pub elevator_location: f64,
}

impl From<&PerfEvent> for EventRow {
    fn from(e: &PerfEvent) -> Self {
        Self {
            time:              e.time.secs(),
            kind:              e.kind.as_str(),
            rider:             e.rider.map(|r| r.0),
            floor:             e.floor.0,
            elevator_location: e.elevator_location,
        }
    }
}

/// Headline numbers of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Caller-chosen label, usually the scenario name.
    pub label:            String,
    pub policy:           String,
    pub riders:           u64,
    pub completed_riders: u64,
    pub wait_mean:        f64,
    pub wait_median:      f64,
    pub ride_mean:        f64,
    pub ride_median:      f64,
    pub total_mean:       f64,
    pub total_median:     f64,
    pub completion_time:  f64,
    pub steps:            u64,
}

impl SummaryRow {
    pub fn from_report(label: &str, report: &SimReport) -> Self {
        let s = &report.summary;
        Self {
            label:            label.to_owned(),
            policy:           report.policy.clone(),
            riders:           s.riders as u64,
            completed_riders: s.completed_riders as u64,
            wait_mean:        s.wait.mean,
            wait_median:      s.wait.median,
            ride_mean:        s.ride.mean,
            ride_median:      s.ride.median,
            total_mean:       s.time_to_destination.mean,
            total_median:     s.time_to_destination.median,
            completion_time:  s.completion_time,
            steps:            report.steps,
        }
    }
}
