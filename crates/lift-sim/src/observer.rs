//! Simulation observer trait for progress reporting and data collection.

use lift_core::{Floor, RideRequest, RiderId, SimTime};
use lift_monitor::PerformanceMonitor;

use crate::SimReport;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] as
/// riders move through the system.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct DropoffCounter(usize);
///
/// impl SimObserver for DropoffCounter {
///     fn on_dropoff(&mut self, time: SimTime, _rider: RiderId, _floor: Floor) {
///         self.0 += 1;
///         if self.0 % 1000 == 0 {
///             println!("{time}: {} riders delivered", self.0);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// A request was consumed and registered with the policy.
    fn on_request(&mut self, _time: SimTime, _request: &RideRequest) {}

    fn on_pickup(&mut self, _time: SimTime, _rider: RiderId, _floor: Floor) {}

    fn on_dropoff(&mut self, _time: SimTime, _rider: RiderId, _floor: Floor) {}

    /// Called at the end of every step with the elevator's status.
    fn on_step_end(&mut self, _time: SimTime, _location: f64) {}

    /// Called once after a run terminates successfully.
    ///
    /// The monitor holds the complete event log, floor crossings included.
    fn on_sim_end(&mut self, _monitor: &PerformanceMonitor, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
