//! The `DispatchPolicy` trait — the main extension point for user code.

use lift_core::{Direction, ElevatorConfig, Floor, RiderId, SimTime};

use crate::PolicyResult;

/// The car's position as last reported through a heartbeat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevatorView {
    pub now:      SimTime,
    pub location: f64,
}

impl ElevatorView {
    /// The view before the first heartbeat: time zero at the initial floor.
    pub fn initial(config: &ElevatorConfig) -> Self {
        Self { now: SimTime::ZERO, location: config.initial_floor.as_f64() }
    }
}

/// Pluggable elevator scheduling.
///
/// Implement this trait to define in which order the car visits floors.
/// Every mutating method returns the complete stop list the car should
/// follow from now on; an empty list parks the car.
///
/// Unlike stateless models, a policy keeps its own memory of outstanding
/// tasks, so all mutating methods take `&mut self`.  Implementations must
/// be `Send` so independent runs can be spread over a thread pool.
///
/// # Example
///
/// ```rust,ignore
/// struct GoHome(ElevatorView);
///
/// impl DispatchPolicy for GoHome {
///     fn name(&self) -> &'static str { "go-home" }
///     fn heartbeat(&mut self, now: SimTime, location: f64) {
///         self.0 = ElevatorView { now, location };
///     }
///     fn register_pickup(&mut self, _: RiderId, _: Floor, _: Option<Direction>) -> PolicyResult<Vec<Floor>> {
///         Ok(vec![Floor(0)])
///     }
///     // ...
/// }
/// ```
pub trait DispatchPolicy: Send + 'static {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Record the car's current time and position.
    ///
    /// Called before every mutating method.
    fn heartbeat(&mut self, now: SimTime, location: f64);

    /// A rider appeared at `source`.
    ///
    /// `hint` is the direction the rider wants to travel (the hall button
    /// pressed).  Policies that do not use hall buttons ignore it.
    fn register_pickup(
        &mut self,
        rider:  RiderId,
        source: Floor,
        hint:   Option<Direction>,
    ) -> PolicyResult<Vec<Floor>>;

    /// A boarded rider chose `destination`.
    fn register_dropoff(
        &mut self,
        rider:       RiderId,
        destination: Floor,
    ) -> PolicyResult<Vec<Floor>>;

    /// `rider` boarded; forget its pickup task.
    fn report_pickup(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>>;

    /// `rider` left the car; forget its dropoff task.
    fn report_dropoff(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>>;
}

impl<P: DispatchPolicy + ?Sized> DispatchPolicy for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn heartbeat(&mut self, now: SimTime, location: f64) {
        (**self).heartbeat(now, location)
    }

    fn register_pickup(
        &mut self,
        rider:  RiderId,
        source: Floor,
        hint:   Option<Direction>,
    ) -> PolicyResult<Vec<Floor>> {
        (**self).register_pickup(rider, source, hint)
    }

    fn register_dropoff(&mut self, rider: RiderId, destination: Floor) -> PolicyResult<Vec<Floor>> {
        (**self).register_dropoff(rider, destination)
    }

    fn report_pickup(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>> {
        (**self).report_pickup(rider)
    }

    fn report_dropoff(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>> {
        (**self).report_dropoff(rider)
    }
}
