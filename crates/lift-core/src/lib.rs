//! `lift-core` — foundational types for the `liftsim` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `RiderId`, `Floor`                                         |
//! | [`time`]     | `SimTime`                                                  |
//! | [`stop`]     | `Direction`, `StopKind`, `Stop`, `FloorCrossing`           |
//! | [`config`]   | `ElevatorConfig`                                           |
//! | [`request`]  | `RideRequest`, `Scenario`                                  |
//! | [`rng`]      | `SimRng` (scenario generation)                             |
//! | [`error`]    | `LiftError`, `LiftResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!
//! `lift-scenario` turns `serde` on for config and scenario loading.

pub mod config;
pub mod error;
pub mod ids;
pub mod request;
pub mod rng;
pub mod stop;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ElevatorConfig;
pub use error::{LiftError, LiftResult};
pub use ids::{Floor, RiderId};
pub use request::{RideRequest, Scenario};
pub use rng::SimRng;
pub use stop::{Direction, FloorCrossing, Stop, StopKind};
pub use time::SimTime;
