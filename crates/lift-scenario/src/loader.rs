//! CSV ride-request loader.
//!
//! # CSV format
//!
//! One row per ride request.  The `rider_id` column is optional; when it
//! is absent (or empty in a row) the row index is used.
//!
//! ```csv
//! timestamp,source_floor,destination_floor
//! 0,1,5
//! 12.5,3,1
//! 12.5,3,7
//! ```
//!
//! Rows need not be sorted; the returned [`Scenario`] is sorted stably by
//! timestamp, so rows sharing a timestamp keep their file order.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use lift_core::{Floor, LiftError, RideRequest, RiderId, Scenario, SimTime};

use crate::{ScenarioError, ScenarioResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RequestRecord {
    timestamp:         f64,
    // Signed so that negative floors surface as a validation error naming
    // the rider instead of an opaque parse failure.
    source_floor:      i64,
    destination_floor: i64,
    #[serde(default)]
    rider_id:          Option<u32>,
}

#[derive(Serialize)]
struct RequestRow {
    timestamp:         f64,
    source_floor:      u32,
    destination_floor: u32,
    rider_id:          u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from a CSV file.
///
/// With `bounds = Some((min, max))` every floor must lie in `[min, max]`;
/// without bounds only sign, timestamp and rider-id uniqueness are checked.
pub fn load_scenario_csv(path: &Path, bounds: Option<(Floor, Floor)>) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path)?;
    let scenario = load_scenario_reader(file, bounds)?;
    log::debug!("loaded {} ride requests from {}", scenario.len(), path.display());
    Ok(scenario)
}

/// Like [`load_scenario_csv`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R, bounds: Option<(Floor, Floor)>) -> ScenarioResult<Scenario> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut requests = Vec::new();

    for (row, result) in csv_reader.deserialize::<RequestRecord>().enumerate() {
        let record = result.map_err(|e| ScenarioError::Parse(format!("row {}: {e}", row + 1)))?;
        let rider = match record.rider_id {
            Some(id) => RiderId(id),
            None => RiderId::try_from(row)
                .map_err(|_| ScenarioError::Parse(format!("row {}: too many rows to number", row + 1)))?,
        };
        requests.push(RideRequest {
            time:        SimTime(record.timestamp),
            rider,
            source:      floor(rider, "source", record.source_floor)?,
            destination: floor(rider, "destination", record.destination_floor)?,
        });
    }

    let scenario = Scenario::new(requests);
    let (min, max) = bounds.unwrap_or((Floor(0), Floor(u32::MAX)));
    scenario.validate(min, max)?;
    Ok(scenario)
}

/// Write `scenario` to a CSV file in the format [`load_scenario_csv`] reads,
/// including the `rider_id` column.
pub fn write_scenario_csv(path: &Path, scenario: &Scenario) -> ScenarioResult<()> {
    let file = std::fs::File::create(path)?;
    write_scenario_writer(file, scenario)
}

/// Like [`write_scenario_csv`] but accepts any `Write` sink.
pub fn write_scenario_writer<W: Write>(writer: W, scenario: &Scenario) -> ScenarioResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for r in scenario.requests() {
        csv_writer.serialize(RequestRow {
            timestamp:         r.time.secs(),
            source_floor:      r.source.0,
            destination_floor: r.destination.0,
            rider_id:          r.rider.0,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn floor(rider: RiderId, what: &str, value: i64) -> ScenarioResult<Floor> {
    u32::try_from(value).map(Floor).map_err(|_| {
        ScenarioError::Invalid(LiftError::InvalidScenario {
            rider,
            reason: format!("{what} floor {value} is not a valid floor number"),
        })
    })
}
