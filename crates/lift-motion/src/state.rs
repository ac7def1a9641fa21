//! Elevator physical state.

use std::collections::VecDeque;

use lift_core::{Floor, SimTime};

/// The physical state of the car.
///
/// The car is either **docked** at an integer floor (`in_transit = false`)
/// or **in transit** between stops after a move was cut short by a deadline.
/// `location` only changes while the doors are closed.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorState {
    /// Continuous shaft position; fractional while between floors.
    pub location: f64,

    /// Simulated time.  Never decreases.
    pub clock: SimTime,

    pub doors_open: bool,

    /// `true` after a partial move left the car short of its target.
    pub in_transit: bool,

    /// Pending stops, front = next target.
    pub stops: VecDeque<Floor>,
}

impl ElevatorState {
    /// A car parked at `floor` with closed doors and nothing to do.
    pub fn parked(floor: Floor) -> Self {
        Self {
            location:   floor.as_f64(),
            clock:      SimTime::ZERO,
            doors_open: false,
            in_transit: false,
            stops:      VecDeque::new(),
        }
    }

    /// The floor the car is stopped at, if it is docked.
    pub fn docked_floor(&self) -> Option<Floor> {
        if self.in_transit {
            return None;
        }
        Floor::from_location(self.location)
    }
}
