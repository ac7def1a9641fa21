use std::fmt;

use lift_core::{Floor, RiderId, SimTime};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PerfEventKind {
    Request,
    Pickup,
    Dropoff,
    FloorPassed,
}

impl PerfEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PerfEventKind::Request     => "request",
            PerfEventKind::Pickup      => "pickup",
            PerfEventKind::Dropoff     => "dropoff",
            PerfEventKind::FloorPassed => "floor_passed",
        }
    }
}

impl fmt::Display for PerfEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the monitor's log.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerfEvent {
    pub time:              SimTime,
    pub kind:              PerfEventKind,
    /// `None` for `FloorPassed`.
    pub rider:             Option<RiderId>,
    pub floor:             Floor,
    /// Car position when the event was recorded.
    pub elevator_location: f64,
}
