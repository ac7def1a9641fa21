//! Travel directions, commanded stops, and floor-crossing records.

use std::fmt;

use crate::{Floor, SimTime};

/// Direction of travel along the shaft.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction a rider travels from `source` to `destination`.
    ///
    /// Same-floor rides count as `Up`.
    #[inline]
    pub fn between(source: Floor, destination: Floor) -> Direction {
        if destination >= source { Direction::Up } else { Direction::Down }
    }

    #[inline]
    pub fn flip(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// `true` when `floor` lies ahead of (or at) `location` when moving in
    /// this direction.
    #[inline]
    pub fn is_ahead(self, floor: Floor, location: f64) -> bool {
        match self {
            Direction::Up   => floor.as_f64() >= location,
            Direction::Down => floor.as_f64() <= location,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        })
    }
}

/// Why the elevator has to visit a floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopKind {
    Pickup,
    Dropoff,
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopKind::Pickup  => "pickup",
            StopKind::Dropoff => "dropoff",
        })
    }
}

/// A single commanded destination tied to one rider.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub floor: Floor,
    pub kind:  StopKind,
}

impl Stop {
    pub fn pickup(floor: Floor) -> Self {
        Self { floor, kind: StopKind::Pickup }
    }

    pub fn dropoff(floor: Floor) -> Self {
        Self { floor, kind: StopKind::Dropoff }
    }
}

/// The elevator reached integer floor `floor` at time `time` while
/// travelling.  Used for instrumentation only.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorCrossing {
    pub time:  SimTime,
    pub floor: Floor,
}
