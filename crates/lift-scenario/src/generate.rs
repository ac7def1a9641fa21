//! Seeded synthetic demand.
//!
//! Both generators emit integer-second timestamps and use floor 1 as the
//! lowest floor they reference, so their output fits any building with
//! `min_floor <= 1`.  Rider ids are assigned after sorting, in timestamp
//! order.

use lift_core::{Floor, RideRequest, RiderId, Scenario, SimRng, SimTime};

use crate::{ScenarioError, ScenarioResult};

const HOUR_SECS: u64 = 3600;

/// The lobby in the office model.
const OFFICE_LOBBY: Floor = Floor(1);

/// Uniformly random rides spread over time.
#[derive(Clone, Debug, PartialEq)]
pub struct FreeForAllParams {
    /// Number of draws.  Draws whose source equals the destination are
    /// discarded, so the scenario may hold fewer requests.
    pub events:       usize,
    pub max_floor:    Floor,
    /// Gap between consecutive requests is uniform in `[0, max_gap_secs]`.
    pub max_gap_secs: u64,
}

impl Default for FreeForAllParams {
    fn default() -> Self {
        Self { events: 500, max_floor: Floor(20), max_gap_secs: 60 }
    }
}

/// A working day in an office tower.
#[derive(Clone, Debug, PartialEq)]
pub struct OfficeParams {
    pub employees:         usize,
    /// Offices occupy floors `2..=max_floor`; floor 1 is the lobby.
    pub max_floor:         Floor,
    /// Length of the working day.  Default: eight hours.
    pub day_secs:          u64,
    /// Length of the morning inbound and evening outbound rush.
    /// Default: two hours.
    pub rush_secs:         u64,
    /// Chance an employee goes down to the lobby for lunch and back.
    pub lunch_probability: f64,
}

impl Default for OfficeParams {
    fn default() -> Self {
        Self {
            employees:         200,
            max_floor:         Floor(20),
            day_secs:          8 * HOUR_SECS,
            rush_secs:         2 * HOUR_SECS,
            lunch_probability: 0.8,
        }
    }
}

/// Random rides between floors `1..=max_floor`.
pub fn generate_free_for_all(params: &FreeForAllParams, rng: &mut SimRng) -> ScenarioResult<Scenario> {
    if params.max_floor.0 < 2 {
        return Err(ScenarioError::Params(format!(
            "free-for-all needs at least floors 1 and 2, got max_floor {}",
            params.max_floor.0
        )));
    }

    let mut rides = Vec::with_capacity(params.events);
    let mut now: u64 = 0;
    for _ in 0..params.events {
        let at = now + rng.gen_range(0..=params.max_gap_secs);
        let source = rng.gen_range(1..=params.max_floor.0);
        let destination = rng.gen_range(1..=params.max_floor.0);
        if source == destination {
            continue;
        }
        rides.push((at, Floor(source), Floor(destination)));
        now = at;
    }
    finish("free-for-all", rides)
}

/// Morning arrivals from the lobby, optional lunch round trips, evening
/// departures.  Nobody travels between two office floors.
pub fn generate_office_building(params: &OfficeParams, rng: &mut SimRng) -> ScenarioResult<Scenario> {
    if params.max_floor.0 < 2 {
        return Err(ScenarioError::Params(format!(
            "office building needs at least one office floor above the lobby, got max_floor {}",
            params.max_floor.0
        )));
    }
    if params.rush_secs.saturating_mul(2) > params.day_secs {
        return Err(ScenarioError::Params(format!(
            "two rushes of {}s do not fit in a {}s day",
            params.rush_secs, params.day_secs
        )));
    }
    if !(0.0..=1.0).contains(&params.lunch_probability) {
        return Err(ScenarioError::Params(format!(
            "lunch_probability {} outside [0, 1]",
            params.lunch_probability
        )));
    }

    let inbound_end = params.rush_secs;
    let outbound_start = params.day_secs - params.rush_secs;

    let mut rides = Vec::with_capacity(params.employees * 4);
    for _ in 0..params.employees {
        let office = Floor(rng.gen_range(2..=params.max_floor.0));

        rides.push((rng.gen_range(0..=inbound_end), OFFICE_LOBBY, office));
        rides.push((rng.gen_range(outbound_start..=params.day_secs), office, OFFICE_LOBBY));

        if rng.gen_bool(params.lunch_probability) {
            let out = rng.gen_range(inbound_end..=outbound_start);
            let back = rng.gen_range(out..=outbound_start);
            rides.push((out, office, OFFICE_LOBBY));
            rides.push((back, OFFICE_LOBBY, office));
        }
    }
    finish("office building", rides)
}

fn finish(kind: &str, mut rides: Vec<(u64, Floor, Floor)>) -> ScenarioResult<Scenario> {
    rides.sort_by_key(|&(at, _, _)| at);
    let requests = rides
        .into_iter()
        .enumerate()
        .map(|(i, (at, source, destination))| {
            let rider = RiderId::try_from(i)
                .map_err(|_| ScenarioError::Params(format!("{kind}: more than u32::MAX requests")))?;
            Ok(RideRequest::new(SimTime(at as f64), rider, source, destination))
        })
        .collect::<ScenarioResult<Vec<_>>>()?;
    log::debug!("generated {kind} scenario with {} requests", requests.len());
    Ok(Scenario::new(requests))
}
