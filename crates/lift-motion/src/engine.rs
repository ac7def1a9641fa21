//! The motion engine: advances the car toward its next stop.

use log::trace;

use lift_core::{ElevatorConfig, Floor, FloorCrossing, SimTime};

use crate::ElevatorState;

/// What a single [`Elevator::advance`] call achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The queue was empty; only the clock moved (if a deadline was given).
    Idle,

    /// Closing the doors alone ran past the deadline; the car did not move.
    DoorsClosed,

    /// The car reached the front stop, opened its doors and popped the stop.
    Arrived(Floor),

    /// The deadline cut the move short; the stop is still queued.
    DeadlineReached,
}

/// Simulated elevator car driven by an externally supplied stop list.
///
/// # Example
///
/// ```rust,ignore
/// let mut car = Elevator::new(config);
/// car.install_stops(vec![Floor(2), Floor(3)]);
/// car.advance(None);                 // run until Floor(2) is served
/// let (clock, location) = car.status();
/// ```
#[derive(Debug, Clone)]
pub struct Elevator {
    config:    ElevatorConfig,
    state:     ElevatorState,
    crossings: Vec<FloorCrossing>,
}

impl Elevator {
    /// A car parked at `config.initial_floor` at time zero.
    pub fn new(config: ElevatorConfig) -> Self {
        let state = ElevatorState::parked(config.initial_floor);
        Self { config, state, crossings: Vec::new() }
    }

    /// Replace the entire pending stop queue.
    ///
    /// Floors are not range-checked here; the dispatch policy is trusted to
    /// stay within the building.
    pub fn install_stops(&mut self, stops: Vec<Floor>) {
        self.state.stops = stops.into();
    }

    /// Advance time and position toward the front stop.
    ///
    /// With `deadline = None` the call runs until the front stop is served.
    /// With `Some(deadline)` it never leaves the clock past `deadline`,
    /// except that the clock never moves backwards either.
    pub fn advance(&mut self, deadline: Option<SimTime>) -> AdvanceOutcome {
        let Some(&target) = self.state.stops.front() else {
            if let Some(d) = deadline {
                self.state.clock = self.state.clock.max(d);
            }
            return AdvanceOutcome::Idle;
        };

        // The clock never moves backwards, even for a stale deadline.
        let started = self.state.clock;

        // ── Doors must close before the car can move ──────────────────────
        if self.state.doors_open {
            self.state.clock += self.config.door_close_secs;
            self.state.doors_open = false;
            if let Some(d) = deadline {
                if self.state.clock > d {
                    // Rounded to the deadline rather than the exact close time.
                    self.state.clock = d.max(started);
                    trace!("doors closing at {}, clamped to deadline", self.state.location);
                    return AdvanceOutcome::DoorsClosed;
                }
            }
        }

        let from = self.state.location;
        let to = target.as_f64();
        let secs_per_floor = self.config.secs_per_floor(to - from);
        let departed = self.state.clock;
        let arrival = departed + self.config.travel_secs(from, to);

        match deadline {
            Some(d) if arrival > d => {
                // ── Partial move: interpolate up to the deadline ──────────
                let elapsed = (d - departed).max(0.0);
                let moved = if secs_per_floor > 0.0 { elapsed / secs_per_floor } else { 0.0 };
                let location = if to >= from { from + moved } else { from - moved };
                self.record_crossings(from, location, departed, secs_per_floor);
                self.state.location = location;
                if moved > 0.0 {
                    self.state.in_transit = true;
                }
                self.state.clock = d.max(started);
                trace!("deadline {d}: car at {location} heading to {target}");
                AdvanceOutcome::DeadlineReached
            }
            _ => {
                // ── Full move: arrive, open doors, pop the stop ───────────
                self.record_crossings(from, to, departed, secs_per_floor);
                self.state.location = to;
                self.state.in_transit = false;
                self.state.doors_open = true;
                self.state.clock = arrival + self.config.door_open_secs;
                if let Some(d) = deadline {
                    if self.state.clock > d {
                        self.state.clock = d.max(started);
                    }
                }
                self.state.stops.pop_front();
                trace!("arrived at {target} ({})", self.state.clock);
                AdvanceOutcome::Arrived(target)
            }
        }
    }

    /// Current `(clock, location)`.
    #[inline]
    pub fn status(&self) -> (SimTime, f64) {
        (self.state.clock, self.state.location)
    }

    #[inline]
    pub fn is_queue_empty(&self) -> bool {
        self.state.stops.is_empty()
    }

    /// The floor the car is stopped at, or `None` while between stops.
    #[inline]
    pub fn docked_floor(&self) -> Option<Floor> {
        self.state.docked_floor()
    }

    /// Every integer floor reached while travelling, in time order.
    #[inline]
    pub fn crossing_log(&self) -> &[FloorCrossing] {
        &self.crossings
    }

    #[inline]
    pub fn state(&self) -> &ElevatorState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &ElevatorConfig {
        &self.config
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Log the integer floors strictly after `from` up to and including `to`.
    fn record_crossings(&mut self, from: f64, to: f64, departed: SimTime, secs_per_floor: f64) {
        if to > from {
            let mut k = from.floor() + 1.0;
            while k <= to {
                self.crossings.push(FloorCrossing {
                    time:  departed + (k - from) * secs_per_floor,
                    floor: Floor(k as u32),
                });
                k += 1.0;
            }
        } else if to < from {
            let mut k = from.ceil() - 1.0;
            while k >= to {
                self.crossings.push(FloorCrossing {
                    time:  departed + (from - k) * secs_per_floor,
                    floor: Floor(k as u32),
                });
                k -= 1.0;
            }
        }
    }
}
