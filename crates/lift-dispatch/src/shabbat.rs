//! Shabbat mode: the car sweeps the whole shaft and stops at every floor,
//! regardless of who is waiting where.

use lift_core::{Direction, ElevatorConfig, Floor, RiderId, SimTime, StopKind};
use rustc_hash::FxHashSet;

use crate::{DispatchPolicy, ElevatorView, PolicyError, PolicyResult};

/// Endless sweep between `min_floor` and `max_floor`.
///
/// Every call returns the rest of the current leg followed by one full
/// round trip, measured from the last heartbeat location.  Riders are only
/// tracked to catch reports for riders the policy never saw.
#[derive(Debug, Clone)]
pub struct ShabbatPolicy {
    config:      ElevatorConfig,
    direction:   Direction,
    view:        ElevatorView,
    last_plan:   Option<IssuedPlan>,
    outstanding: FxHashSet<(RiderId, StopKind)>,
}

/// The most recent stop list together with where it was issued from.
#[derive(Debug, Clone)]
struct IssuedPlan {
    from:      ElevatorView,
    direction: Direction,
    stops:     Vec<Floor>,
}

impl ShabbatPolicy {
    pub fn new(config: &ElevatorConfig) -> Self {
        let direction = if config.initial_floor >= config.max_floor {
            Direction::Down
        } else {
            Direction::Up
        };
        Self {
            config: config.clone(),
            direction,
            view: ElevatorView::initial(config),
            last_plan: None,
            outstanding: FxHashSet::default(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Riders with a registered but unreported pickup or dropoff.
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    fn track(&mut self, rider: RiderId, kind: StopKind) -> PolicyResult<()> {
        if !self.outstanding.insert((rider, kind)) {
            return Err(PolicyError::DuplicateTask { rider, kind });
        }
        Ok(())
    }

    fn untrack(&mut self, rider: RiderId, kind: StopKind) -> PolicyResult<()> {
        if !self.outstanding.remove(&(rider, kind)) {
            return Err(PolicyError::UnknownRider { rider, kind });
        }
        Ok(())
    }

    /// Direction the car is heading at the last heartbeat.
    ///
    /// Heartbeats only arrive with events, so the car may have turned at
    /// an end of the shaft since the last plan.  Replays the issued stop
    /// list with the configured timings to find the leg it is on now.
    fn heading(&self) -> Direction {
        let Some(plan) = &self.last_plan else {
            return self.direction;
        };
        let now = self.view.now;
        let mut t = plan.from.now;
        let mut position = plan.from.location;
        let mut doors_open = Floor::from_location(position).is_some();
        let mut heading = plan.direction;

        for &stop in &plan.stops {
            let target = stop.as_f64();
            if target != position {
                heading = if target > position { Direction::Up } else { Direction::Down };
            }
            if doors_open {
                t += self.config.door_close_secs;
            }
            t += self.config.travel_secs(position, target);
            if now < t {
                return heading;
            }
            t += self.config.door_open_secs;
            position = target;
            doors_open = true;
            if now < t {
                return heading;
            }
        }
        heading
    }

    fn plan(&mut self) -> Vec<Floor> {
        let (lo, hi) = (self.config.min_floor.0, self.config.max_floor.0);
        let location = self.view.location;
        if lo == hi {
            return if location == lo as f64 { Vec::new() } else { vec![Floor(lo)] };
        }

        self.direction = self.heading();
        if self.direction == Direction::Up && location >= hi as f64 {
            self.direction = Direction::Down;
        } else if self.direction == Direction::Down && location <= lo as f64 {
            self.direction = Direction::Up;
        }

        let mut stops = Vec::with_capacity(3 * (hi - lo + 1) as usize);
        match self.direction {
            Direction::Up => {
                let first = (location.floor() as i64 + 1).clamp(lo as i64, hi as i64) as u32;
                stops.extend((first..=hi).map(Floor));
                stops.extend((lo..hi).rev().map(Floor));
                stops.extend((lo + 1..=hi).map(Floor));
            }
            Direction::Down => {
                let first = (location.ceil() as i64 - 1).clamp(lo as i64, hi as i64) as u32;
                stops.extend((lo..=first).rev().map(Floor));
                stops.extend((lo + 1..=hi).map(Floor));
                stops.extend((lo..hi).rev().map(Floor));
            }
        }
        self.last_plan = Some(IssuedPlan { from: self.view, direction: self.direction, stops: stops.clone() });
        stops
    }
}

impl DispatchPolicy for ShabbatPolicy {
    fn name(&self) -> &'static str {
        "shabbat"
    }

    fn heartbeat(&mut self, now: SimTime, location: f64) {
        self.view = ElevatorView { now, location };
    }

    fn register_pickup(
        &mut self,
        rider:   RiderId,
        _source: Floor,
        _hint:   Option<Direction>,
    ) -> PolicyResult<Vec<Floor>> {
        self.track(rider, StopKind::Pickup)?;
        Ok(self.plan())
    }

    fn register_dropoff(&mut self, rider: RiderId, _destination: Floor) -> PolicyResult<Vec<Floor>> {
        self.track(rider, StopKind::Dropoff)?;
        Ok(self.plan())
    }

    fn report_pickup(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>> {
        self.untrack(rider, StopKind::Pickup)?;
        Ok(self.plan())
    }

    fn report_dropoff(&mut self, rider: RiderId) -> PolicyResult<Vec<Floor>> {
        self.untrack(rider, StopKind::Dropoff)?;
        Ok(self.plan())
    }
}
