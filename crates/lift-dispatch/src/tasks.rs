//! Outstanding work shared by the task-driven policies.

use lift_core::{Direction, Floor, RiderId, Stop, StopKind};

use crate::{PolicyError, PolicyResult};

/// One floor the car owes a rider a visit to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Task {
    pub rider: RiderId,
    pub stop:  Stop,
    /// Hall-button direction for pickups; `None` for dropoffs or when the
    /// owning policy ignores hints.
    pub hint:  Option<Direction>,
}

impl Task {
    #[inline]
    pub fn floor(&self) -> Floor {
        self.stop.floor
    }

    #[inline]
    pub fn kind(&self) -> StopKind {
        self.stop.kind
    }
}

/// Outstanding tasks in registration order.
///
/// A rider has at most one task of each kind at a time.  Task counts stay
/// small (bounded by riders currently in the system), so a flat `Vec` with
/// linear lookup beats a map here.
#[derive(Debug, Clone, Default)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, task: Task) -> PolicyResult<()> {
        if self.position(task.rider, task.kind()).is_some() {
            return Err(PolicyError::DuplicateTask { rider: task.rider, kind: task.kind() });
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Remove the `kind` task of `rider`, keeping the order of the rest.
    pub fn remove(&mut self, rider: RiderId, kind: StopKind) -> PolicyResult<Task> {
        match self.position(rider, kind) {
            Some(i) => Ok(self.tasks.remove(i)),
            None    => Err(PolicyError::UnknownRider { rider, kind }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task floors in registration order, duplicates kept.
    pub fn floors(&self) -> Vec<Floor> {
        self.tasks.iter().map(Task::floor).collect()
    }

    fn position(&self, rider: RiderId, kind: StopKind) -> Option<usize> {
        self.tasks.iter().position(|t| t.rider == rider && t.kind() == kind)
    }
}
