//! JSON documents: the visualiser event feed and run summaries.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use lift_core::Floor;
use lift_monitor::{PerfEvent, PerfEventKind, PerformanceSummary};

use crate::OutputResult;

/// Top-level document read by the browser visualiser.
#[derive(Serialize)]
struct Visualization<'a> {
    floors:        u32,
    initial_floor: u32,
    events:        Vec<VisualizationEvent<'a>>,
}

#[derive(Serialize)]
struct VisualizationEvent<'a> {
    ts:             f64,
    event_floor:    u32,
    elevator_floor: f64,
    event_type:     &'a str,
    rider:          Option<u32>,
}

fn event_type(kind: PerfEventKind) -> &'static str {
    match kind {
        PerfEventKind::Request     => "REQUEST",
        PerfEventKind::Pickup      => "PICKUP",
        PerfEventKind::Dropoff     => "DROPOFF",
        PerfEventKind::FloorPassed => "FLOOR_PASSED",
    }
}

/// Write the visualiser feed for one run.
///
/// `events` should be in time order, e.g. from
/// [`PerformanceMonitor::events_sorted`][lift_monitor::PerformanceMonitor::events_sorted].
pub fn write_visualization_json(
    path:          &Path,
    floors:        u32,
    initial_floor: Floor,
    events:        &[PerfEvent],
) -> OutputResult<()> {
    let doc = Visualization {
        floors,
        initial_floor: initial_floor.0,
        events: events
            .iter()
            .map(|e| VisualizationEvent {
                ts:             e.time.secs(),
                event_floor:    e.floor.0,
                elevator_floor: e.elevator_location,
                event_type:     event_type(e.kind),
                rider:          e.rider.map(|r| r.0),
            })
            .collect(),
    };
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, &doc)?;
    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct LabelledSummary<'a> {
    label:   &'a str,
    policy:  &'a str,
    #[serde(flatten)]
    summary: &'a PerformanceSummary,
}

/// Write one run's [`PerformanceSummary`] as a JSON object tagged with
/// `label` and the policy name.
pub fn write_summary_json(
    path:    &Path,
    label:   &str,
    policy:  &str,
    summary: &PerformanceSummary,
) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, &LabelledSummary { label, policy, summary })?;
    out.flush()?;
    Ok(())
}
