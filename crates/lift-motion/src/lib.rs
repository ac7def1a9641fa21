//! `lift-motion` — elevator physical state and time advancement.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`state`]   | `ElevatorState` — location, clock, doors, stop queue             |
//! | [`engine`]  | `Elevator` — `install_stops` / `advance` / status queries        |
//!
//! # Movement model
//!
//! The car moves along a continuous shaft at a constant per-floor speed that
//! depends on the direction of travel.  Every stop costs a door-open
//! duration on arrival and a door-close duration before the next move.
//!
//! 1. The orchestrator installs a full replacement stop list with
//!    [`Elevator::install_stops`].
//! 2. [`Elevator::advance`] runs either until the front stop is served
//!    (`deadline = None`) or until an external deadline, whichever comes
//!    first.  When the deadline wins, the position is linearly interpolated
//!    and the stop stays queued.
//! 3. Floor boundaries reached on the way are appended to a crossing log
//!    for instrumentation.
//!
//! The model knows nothing about riders; it only sees floors.

pub mod engine;
pub mod state;


pub use engine::{AdvanceOutcome, Elevator};
pub use state::ElevatorState;
