//! Ride requests and the time-ordered scenario fed to the simulator.

use rustc_hash::FxHashSet;

use crate::{Direction, ElevatorConfig, Floor, LiftError, LiftResult, RiderId, SimTime};

/// One exogenous ride request: rider `rider` appears at `source` at `time`
/// wanting to go to `destination`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideRequest {
    pub time:        SimTime,
    pub rider:       RiderId,
    pub source:      Floor,
    pub destination: Floor,
}

impl RideRequest {
    pub fn new(time: impl Into<SimTime>, rider: RiderId, source: Floor, destination: Floor) -> Self {
        Self { time: time.into(), rider, source, destination }
    }

    /// Direction of the requested ride, used as the hall-call hint.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::between(self.source, self.destination)
    }
}

/// A list of ride requests sorted non-decreasing by timestamp.
///
/// Sorting is stable, so requests sharing a timestamp keep their input order.
/// That order is the tie-break the simulator uses for simultaneous requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    requests: Vec<RideRequest>,
}

impl Scenario {
    pub fn new(mut requests: Vec<RideRequest>) -> Self {
        requests.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { requests }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn requests(&self) -> &[RideRequest] {
        &self.requests
    }

    pub fn into_requests(self) -> Vec<RideRequest> {
        self.requests
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Highest floor referenced by any request.
    pub fn highest_floor(&self) -> Option<Floor> {
        self.requests
            .iter()
            .flat_map(|r| [r.source, r.destination])
            .max()
    }

    /// Reject requests with an unusable timestamp, a floor outside
    /// `[min, max]`, or a rider id that was already used.
    pub fn validate(&self, min: Floor, max: Floor) -> LiftResult<()> {
        let mut seen: FxHashSet<RiderId> =
            FxHashSet::with_capacity_and_hasher(self.requests.len(), Default::default());
        for r in &self.requests {
            if !r.time.is_valid() {
                return Err(invalid(r.rider, format!("timestamp {} must be finite and non-negative", r.time.0)));
            }
            for (what, floor) in [("source", r.source), ("destination", r.destination)] {
                if floor < min || floor > max {
                    return Err(invalid(
                        r.rider,
                        format!("{what} floor {} outside [{}, {}]", floor.0, min.0, max.0),
                    ));
                }
            }
            if !seen.insert(r.rider) {
                return Err(invalid(r.rider, "rider id used by more than one request".to_owned()));
            }
        }
        Ok(())
    }

    /// [`validate`][Self::validate] against the floors `config` serves.
    pub fn validate_for(&self, config: &ElevatorConfig) -> LiftResult<()> {
        self.validate(config.min_floor, config.max_floor)
    }
}

impl From<Vec<RideRequest>> for Scenario {
    fn from(requests: Vec<RideRequest>) -> Self {
        Scenario::new(requests)
    }
}

fn invalid(rider: RiderId, reason: String) -> LiftError {
    LiftError::InvalidScenario { rider, reason }
}
