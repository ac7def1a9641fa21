//! First-come-first-served scheduling.

use lift_core::{Direction, Floor, RiderId, SimTime, Stop, StopKind};

use crate::{DispatchPolicy, PolicyResult, Task, TaskSet};

/// Visits task floors strictly in the order the tasks were registered.
///
/// The heartbeat is ignored: the stop list never depends on where the
/// car currently is.
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    tasks: TaskSet,
}

impl FifoPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &TaskSet {
        &self.tasks
    }
}

impl DispatchPolicy for FifoPolicy {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn heartbeat(&mut self, _now: SimTime, _location: f64) {}

    fn register_pickup(
        &mut self,
        rider:  RiderId,
        source: Floor,
        _hint:  Option<Direction>,
    ) -> PolicyResult<Vec<Floor>> {
        self.tasks.insert(Task { rider, stop: Stop::pickup(source), hint: None })?;
        Ok(self.tasks.floors())
    }

    fn register_dropoff(&mut self, rider: RiderId, destination: Floor) -> PolicyResult<Vec<Floor>> {
        self.tasks.insert(Task { rider, stop: Stop::dropoff(destination), hint: None })?;
        Ok(self.tasks.floors())
    }

    fn report_pickup(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>> {
        self.tasks.remove(rider, StopKind::Pickup)?;
        Ok(self.tasks.floors())
    }

    fn report_dropoff(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>> {
        self.tasks.remove(rider, StopKind::Dropoff)?;
        Ok(self.tasks.floors())
    }
}
