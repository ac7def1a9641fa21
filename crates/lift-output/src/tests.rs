//! Integration tests for lift-output.

use tempfile::TempDir;

use lift_core::{ElevatorConfig, Floor, RideRequest, RiderId, Scenario};
use lift_dispatch::FifoPolicy;
use lift_sim::{SimBuilder, SimReport};

use crate::row::{EventRow, RiderRow, SummaryRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn config() -> ElevatorConfig {
    ElevatorConfig {
        initial_floor:          Floor(1),
        ascend_secs_per_floor:  3.0,
        descend_secs_per_floor: 4.0,
        door_open_secs:         5.0,
        door_close_secs:        6.0,
        min_floor:              Floor(0),
        max_floor:              Floor(10),
    }
}

/// Rider 0 rides 1 → 3; delivered at t=11 after crossing floors 2 and 3.
fn one_ride_scenario() -> Scenario {
    Scenario::new(vec![RideRequest::new(0.0, RiderId(0), Floor(1), Floor(3))])
}

fn rider_row(rider: u32) -> RiderRow {
    RiderRow {
        rider,
        source:      1,
        destination: 4,
        requested:   2.0,
        picked_up:   7.5,
        dropped_off: 20.0,
        wait:        5.5,
        ride:        12.5,
        total:       18.0,
    }
}

fn summary_row() -> SummaryRow {
    SummaryRow {
        label:            "morning".into(),
        policy:           "scan".into(),
        riders:           3,
        completed_riders: 3,
        wait_mean:        4.0,
        wait_median:      3.0,
        ride_mean:        10.0,
        ride_median:      9.0,
        total_mean:       14.0,
        total_median:     12.0,
        completion_time:  55.0,
        steps:            9,
    }
}

fn read_csv(path: &std::path::Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
    let rows = rdr.records().map(|r| r.unwrap()).collect();
    (headers, rows)
}

// ── CSV backend ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use crate::csv::{CsvWriter, EVENT_HEADER, RIDER_HEADER, SUMMARY_HEADER};
    use crate::writer::OutputWriter;

    use super::*;

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(read_csv(&dir.path().join("riders.csv")).0, RIDER_HEADER);
        assert_eq!(read_csv(&dir.path().join("events.csv")).0, EVENT_HEADER);
        assert_eq!(read_csv(&dir.path().join("summary.csv")).0, SUMMARY_HEADER);
    }

    #[test]
    fn rider_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_riders(&[rider_row(0), rider_row(1)]).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_csv(&dir.path().join("riders.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");   // rider
        assert_eq!(&rows[0][4], "7.5"); // picked_up
        assert_eq!(&rows[0][8], "18");  // total
    }

    #[test]
    fn crossing_event_has_empty_rider() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[EventRow { time: 3.0, kind: "floor_passed", rider: None, floor: 2, elevator_location: 2.0 }])
            .unwrap();
        w.finish().unwrap();

        let (_, rows) = read_csv(&dir.path().join("events.csv"));
        assert_eq!(&rows[0][1], "floor_passed");
        assert_eq!(&rows[0][2], "");
    }

    #[test]
    fn summary_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_csv(&dir.path().join("summary.csv"));
        assert_eq!(&rows[0][0], "morning");
        assert_eq!(&rows[0][1], "scan");
        assert_eq!(&rows[0][10], "55");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }
}

// ── Observer bridge ───────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use lift_monitor::PerformanceMonitor;
    use lift_sim::SimObserver;

    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult, SimOutputObserver};

    use super::*;

    /// Fails every write with an I/O error.
    struct BrokenWriter {
        calls: usize,
    }

    impl OutputWriter for BrokenWriter {
        fn write_riders(&mut self, _: &[RiderRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(std::io::Error::other("disk full").into())
        }
        fn write_events(&mut self, _: &[EventRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(std::io::Error::other("still full").into())
        }
        fn write_summary(&mut self, _: &SummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.calls += 1;
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config(), one_ride_scenario(), FifoPolicy::new()).build().unwrap();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), "one-ride");
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let (_, riders) = read_csv(&dir.path().join("riders.csv"));
        assert_eq!(riders.len(), 1);
        assert_eq!(&riders[0][5], "11"); // dropped_off

        // request, pickup, 2 crossings, dropoff
        let (_, events) = read_csv(&dir.path().join("events.csv"));
        let kinds: Vec<&str> = events.iter().map(|r| r.get(1).unwrap()).collect();
        assert_eq!(kinds, ["request", "pickup", "floor_passed", "floor_passed", "dropoff"]);

        let (_, summary) = read_csv(&dir.path().join("summary.csv"));
        assert_eq!(&summary[0][0], "one-ride");
        assert_eq!(&summary[0][1], "fifo");
    }

    #[test]
    fn first_error_kept() {
        let mut obs = SimOutputObserver::new(BrokenWriter { calls: 0 }, "x");
        let report = SimReport {
            policy:     "fifo".into(),
            summary:    Default::default(),
            steps:      0,
            final_time: Default::default(),
        };
        obs.on_sim_end(&PerformanceMonitor::new(), &report);

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
            other => panic!("expected stored I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
        // Later writes still attempted.
        assert_eq!(obs.into_writer().calls, 4);
    }
}

// ── JSON documents ────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_tests {
    use lift_sim::NoopObserver;

    use crate::{write_summary_json, write_visualization_json};

    use super::*;

    #[test]
    fn visualization_document_shape() {
        let mut sim = SimBuilder::new(config(), one_ride_scenario(), FifoPolicy::new()).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let dir = tmp();
        let path = dir.path().join("data.json");
        write_visualization_json(&path, 10, Floor(1), &sim.monitor().events_sorted()).unwrap();

        let doc: serde_json::Value = serde_json::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(doc["floors"], 10);
        assert_eq!(doc["initial_floor"], 1);
        let events = doc["events"].as_array().unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0]["event_type"], "REQUEST");
        assert_eq!(events[0]["rider"], 0);
        assert_eq!(events[2]["event_type"], "FLOOR_PASSED");
        assert!(events[2]["rider"].is_null());
        assert_eq!(events[4]["ts"], 11.0);
        assert_eq!(events[4]["event_floor"], 3);
    }

    #[test]
    fn summary_json_is_flat() {
        let mut sim = SimBuilder::new(config(), one_ride_scenario(), FifoPolicy::new()).build().unwrap();
        let report = sim.run(&mut NoopObserver).unwrap();

        let dir = tmp();
        let path = dir.path().join("summary.json");
        write_summary_json(&path, "one-ride", &report.policy, &report.summary).unwrap();

        let doc: serde_json::Value = serde_json::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(doc["label"], "one-ride");
        assert_eq!(doc["policy"], "fifo");
        assert_eq!(doc["completed_riders"], 1);
        assert_eq!(doc["ride"]["mean"], 11.0);
    }
}

// ── Batch CSV ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use lift_dispatch::PolicyKind;
    use lift_sim::{run_batch, NamedScenario};

    use crate::batch::BATCH_HEADER;
    use crate::write_batch_csv;

    use super::*;

    #[test]
    fn one_row_per_run() {
        let scenarios = vec![
            NamedScenario { name: "ok".into(), scenario: one_ride_scenario() },
            NamedScenario {
                name:     "off-the-roof".into(),
                scenario: Scenario::new(vec![RideRequest::new(0.0, RiderId(0), Floor(1), Floor(42))]),
            },
        ];
        let results = run_batch(&config(), &scenarios, &[PolicyKind::Fifo, PolicyKind::Scan], None);

        let dir = tmp();
        let path = dir.path().join("batch_results.csv");
        write_batch_csv(&path, &results).unwrap();

        let (headers, rows) = read_csv(&path);
        assert_eq!(headers, BATCH_HEADER);
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[1][1], "scan");
        assert_eq!(&rows[1][2], "ok");
        assert_eq!(&rows[1][4], "1");
        assert_eq!(&rows[2][2], "error");
        assert!(!rows[2][9].is_empty());
    }
}

// ── SQLite backend ────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    use super::*;

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_rider_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_riders(&[rider_row(0), rider_row(1), rider_row(2)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM riders", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_crossing_rider_is_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_events(&[EventRow { time: 3.0, kind: "floor_passed", rider: None, floor: 2, elevator_location: 2.0 }])
            .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let rider: Option<i64> = conn
            .query_row("SELECT rider FROM events WHERE floor = 2", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rider, None);
    }

    #[test]
    fn sqlite_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (label, steps, wait_mean): (String, i64, f64) = conn
            .query_row("SELECT label, steps, wait_mean FROM summaries", [], |r| {
                Ok((r.get(0)?, r.get(1)?, r.get(2)?))
            })
            .unwrap();
        assert_eq!(label, "morning");
        assert_eq!(steps, 9);
        assert_eq!(wait_mean, 4.0);
    }
}
