//! Elevator configuration.

use crate::{Floor, LiftError, LiftResult};

/// Physical parameters of the simulated elevator.
///
/// Typically loaded from a JSON file by `lift-scenario` and passed to the
/// simulation builder.  All durations are in simulated seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorConfig {
    /// Floor the elevator is parked at when the run starts.
    pub initial_floor: Floor,

    /// Seconds to travel one floor upwards.
    pub ascend_secs_per_floor: f64,

    /// Seconds to travel one floor downwards.
    pub descend_secs_per_floor: f64,

    /// Seconds the doors take to open once the car has stopped.
    pub door_open_secs: f64,

    /// Seconds the doors take to close before the car can move again.
    pub door_close_secs: f64,

    /// Lowest floor served.  Default: 0.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_floor: Floor,

    /// Highest floor served.
    pub max_floor: Floor,
}

impl ElevatorConfig {
    /// Check that durations are usable and the initial floor is in range.
    pub fn validate(&self) -> LiftResult<()> {
        for (name, rate) in [
            ("ascend_secs_per_floor",  self.ascend_secs_per_floor),
            ("descend_secs_per_floor", self.descend_secs_per_floor),
        ] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(LiftError::Config(format!("{name} must be a positive number, got {rate}")));
            }
        }
        for (name, secs) in [
            ("door_open_secs",  self.door_open_secs),
            ("door_close_secs", self.door_close_secs),
        ] {
            if !secs.is_finite() || secs < 0.0 {
                return Err(LiftError::Config(format!("{name} must be non-negative, got {secs}")));
            }
        }
        if self.min_floor > self.max_floor {
            return Err(LiftError::Config(format!(
                "min_floor {} is above max_floor {}",
                self.min_floor.0, self.max_floor.0
            )));
        }
        if !self.serves(self.initial_floor) {
            return Err(LiftError::Config(format!(
                "initial_floor {} outside served range [{}, {}]",
                self.initial_floor.0, self.min_floor.0, self.max_floor.0
            )));
        }
        Ok(())
    }

    /// `true` if `floor` lies within `[min_floor, max_floor]`.
    #[inline]
    pub fn serves(&self, floor: Floor) -> bool {
        floor >= self.min_floor && floor <= self.max_floor
    }

    /// Seconds per floor for a move of signed length `delta` floors.
    ///
    /// A zero-length move uses the ascend rate.
    #[inline]
    pub fn secs_per_floor(&self, delta: f64) -> f64 {
        if delta >= 0.0 { self.ascend_secs_per_floor } else { self.descend_secs_per_floor }
    }

    /// Seconds to travel from shaft position `from` to `to` without stopping.
    #[inline]
    pub fn travel_secs(&self, from: f64, to: f64) -> f64 {
        let delta = to - from;
        delta.abs() * self.secs_per_floor(delta)
    }
}
