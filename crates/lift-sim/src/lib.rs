//! `lift-sim` — the event loop merging ride requests with elevator motion.
//!
//! # One step
//!
//! ```text
//! loop:
//!   ① Bound     — timestamp of the next unconsumed request (or none).
//!   ② Finish?   — no requests left and nobody waiting or riding → done.
//!                 No requests, empty stop queue, riders stranded → Stalled.
//!   ③ Advance   — elevator.advance(bound).
//!   ④ Requests  — clock reached the bound: every request with that exact
//!                 timestamp is recorded and registered, in scenario order.
//!   ⑤ Pickups   — docked at f: riders waiting at f board.
//!   ⑥ Dropoffs  — docked at f: riders bound for f leave.
//! ```
//!
//! Every policy call is preceded by a heartbeat and its returned stop list
//! replaces the elevator's queue wholesale.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | [`batch::run_batch`] spreads runs over Rayon's pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_dispatch::ScanPolicy;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config.clone(), scenario, ScanPolicy::new(&config))
//!     .time_limit(86_400.0)
//!     .build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("mean wait {:.1}s", report.summary.wait.mean);
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use batch::{run_batch, BatchResult, NamedScenario};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{SimReport, Simulation, StepOutcome};
