//! SCAN ("elevator algorithm") scheduling.
//!
//! The car keeps moving in its current direction while any task lies
//! ahead of it and reverses only when nothing is left on that side.

use lift_core::{Direction, ElevatorConfig, Floor, RiderId, SimTime, Stop, StopKind};

use crate::{DispatchPolicy, ElevatorView, PolicyResult, Task, TaskSet};

/// Direction-persistent sweep over the outstanding tasks.
///
/// With `honor_hints` set (the directional variant) a pickup whose hall
/// button points against the sweep is postponed to the return leg, unless
/// it is the farthest task in the sweep direction anyway.
#[derive(Debug, Clone)]
pub struct ScanPolicy {
    tasks:       TaskSet,
    direction:   Direction,
    view:        ElevatorView,
    honor_hints: bool,
}

impl ScanPolicy {
    /// Plain SCAN; pickup hints are ignored.
    pub fn new(config: &ElevatorConfig) -> Self {
        Self::with_hints(config, false)
    }

    /// SCAN that serves pickups only in the direction the rider asked for.
    pub fn directional(config: &ElevatorConfig) -> Self {
        Self::with_hints(config, true)
    }

    fn with_hints(config: &ElevatorConfig, honor_hints: bool) -> Self {
        let direction = if config.initial_floor >= config.max_floor {
            Direction::Down
        } else {
            Direction::Up
        };
        Self { tasks: TaskSet::new(), direction, view: ElevatorView::initial(config), honor_hints }
    }

    /// Current sweep direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn honors_hints(&self) -> bool {
        self.honor_hints
    }

    pub fn tasks(&self) -> &TaskSet {
        &self.tasks
    }

    fn plan(&mut self) -> Vec<Floor> {
        if self.tasks.is_empty() {
            return Vec::new();
        }
        let location = self.view.location;
        if !self.tasks.iter().any(|t| self.direction.is_ahead(t.floor(), location)) {
            self.direction = self.direction.flip();
        }
        let dir = self.direction;

        // Farthest task floor in the sweep direction; at least one task is
        // ahead after the flip above.
        let ahead = self.tasks.iter().filter(|t| dir.is_ahead(t.floor(), location)).map(Task::floor);
        let far_end = match dir {
            Direction::Up   => ahead.max(),
            Direction::Down => ahead.min(),
        };

        let (mut current, mut rest): (Vec<&Task>, Vec<&Task>) = self
            .tasks
            .iter()
            .partition(|t| self.joins_sweep(t, dir, location, far_end));

        // Stable sorts keep registration order among tasks at one floor.
        match dir {
            Direction::Up => {
                current.sort_by_key(|t| t.floor());
                rest.sort_by(|a, b| b.floor().cmp(&a.floor()));
            }
            Direction::Down => {
                current.sort_by(|a, b| b.floor().cmp(&a.floor()));
                rest.sort_by_key(|t| t.floor());
            }
        }
        current.into_iter().chain(rest).map(Task::floor).collect()
    }

    fn joins_sweep(&self, task: &Task, dir: Direction, location: f64, far_end: Option<Floor>) -> bool {
        if !dir.is_ahead(task.floor(), location) {
            return false;
        }
        if !self.honor_hints || task.kind() == StopKind::Dropoff {
            return true;
        }
        match task.hint {
            None                => true,
            Some(h) if h == dir => true,
            Some(_)             => Some(task.floor()) == far_end,
        }
    }
}

impl DispatchPolicy for ScanPolicy {
    fn name(&self) -> &'static str {
        if self.honor_hints { "scan-directional" } else { "scan" }
    }

    fn heartbeat(&mut self, now: SimTime, location: f64) {
        self.view = ElevatorView { now, location };
    }

    fn register_pickup(
        &mut self,
        rider:  RiderId,
        source: Floor,
        hint:   Option<Direction>,
    ) -> PolicyResult<Vec<Floor>> {
        let hint = if self.honor_hints { hint } else { None };
        self.tasks.insert(Task { rider, stop: Stop::pickup(source), hint })?;
        Ok(self.plan())
    }

    fn register_dropoff(&mut self, rider: RiderId, destination: Floor) -> PolicyResult<Vec<Floor>> {
        self.tasks.insert(Task { rider, stop: Stop::dropoff(destination), hint: None })?;
        Ok(self.plan())
    }

    fn report_pickup(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>> {
        self.tasks.remove(rider, StopKind::Pickup)?;
        Ok(self.plan())
    }

    fn report_dropoff(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>> {
        self.tasks.remove(rider, StopKind::Dropoff)?;
        Ok(self.plan())
    }
}
