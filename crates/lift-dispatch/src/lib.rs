//! `lift-dispatch` — pluggable elevator scheduling policies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`policy`]  | `DispatchPolicy` trait, `ElevatorView` heartbeat snapshot       |
//! | [`tasks`]   | `Task`, `TaskSet` — outstanding pickups and dropoffs            |
//! | [`fifo`]    | `FifoPolicy` — serve tasks in registration order                |
//! | [`scan`]    | `ScanPolicy` — direction-persistent SCAN, optionally hint-aware |
//! | [`shabbat`] | `ShabbatPolicy` — sweep the shaft stopping at every floor       |
//! | [`kind`]    | `PolicyKind` — closed registry of the policies above            |
//! | [`error`]   | `PolicyError`, `PolicyResult<T>`                                |
//!
//! # Contract
//!
//! The orchestrator drives a policy with a fixed call pattern:
//!
//! 1. `heartbeat(now, location)` before every mutating call, so decisions
//!    can be made relative to the car's current position.
//! 2. One of `register_pickup`, `register_dropoff`, `report_pickup` or
//!    `report_dropoff`.  Each returns the **full** replacement stop list,
//!    which the orchestrator installs as-is into the motion model.
//!
//! Policies own their state exclusively.  The orchestrator never inspects
//! it and never merges stop lists itself.

pub mod error;
pub mod fifo;
pub mod kind;
pub mod policy;
pub mod scan;
pub mod shabbat;
pub mod tasks;


pub use error::{PolicyError, PolicyResult};
pub use fifo::FifoPolicy;
pub use kind::PolicyKind;
pub use policy::{DispatchPolicy, ElevatorView};
pub use scan::ScanPolicy;
pub use shabbat::ShabbatPolicy;
pub use tasks::{Task, TaskSet};
