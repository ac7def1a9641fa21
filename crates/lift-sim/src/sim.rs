//! The `Simulation` struct and its event loop.

use log::{debug, info, trace, warn};
use rustc_hash::FxHashMap;

use lift_core::{ElevatorConfig, Floor, RideRequest, RiderId, Scenario, SimTime, StopKind};
use lift_dispatch::{DispatchPolicy, PolicyError, PolicyResult};
use lift_monitor::{PerformanceMonitor, PerformanceSummary};
use lift_motion::Elevator;

use crate::{SimError, SimObserver, SimResult};

/// Whether a run has more work after a [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Finished,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    /// [`DispatchPolicy::name`] of the policy that ran.
    pub policy:     String,
    pub summary:    PerformanceSummary,
    /// Number of loop iterations executed.
    pub steps:      u64,
    /// Elevator clock when the run terminated.
    pub final_time: SimTime,
}

/// One elevator, one policy, one scenario.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<P: DispatchPolicy> {
    elevator: Elevator,
    policy:   P,
    monitor:  PerformanceMonitor,

    /// Sorted by timestamp; consumed front to back via `next_request`.
    requests:     Vec<RideRequest>,
    next_request: usize,

    /// Riders waiting in a lobby, with their source floor, in arrival order.
    awaiting_pickup:  Vec<(RiderId, Floor)>,
    /// Riders in the car, with their destination, in boarding order.
    awaiting_dropoff: Vec<(RiderId, Floor)>,
    destinations:     FxHashMap<RiderId, Floor>,

    time_limit: Option<SimTime>,
    steps:      u64,
    finished:   bool,
}

impl<P: DispatchPolicy> Simulation<P> {
    pub(crate) fn new(
        config:     ElevatorConfig,
        scenario:   Scenario,
        policy:     P,
        time_limit: Option<SimTime>,
    ) -> Self {
        let requests = scenario.into_requests();
        Self {
            elevator: Elevator::new(config),
            policy,
            monitor: PerformanceMonitor::new(),
            destinations: FxHashMap::with_capacity_and_hasher(requests.len(), Default::default()),
            requests,
            next_request: 0,
            awaiting_pickup: Vec::new(),
            awaiting_dropoff: Vec::new(),
            time_limit,
            steps: 0,
            finished: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every rider has been delivered.
    ///
    /// Calls observer hooks as riders move.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        info!(
            "starting {} run: {} requests, floors {}..={}",
            self.policy.name(),
            self.requests.len(),
            self.elevator.config().min_floor.0,
            self.elevator.config().max_floor.0,
        );
        while self.step(observer)? == StepOutcome::Continue {}

        let report = self.report();
        info!(
            "{} run finished at {}: {} riders delivered in {} steps, mean wait {:.1}s",
            report.policy, report.final_time, report.summary.completed_riders, report.steps,
            report.summary.wait.mean,
        );
        observer.on_sim_end(&self.monitor, &report);
        Ok(report)
    }

    /// Execute one loop iteration.
    ///
    /// Once the run has finished further calls are no-ops returning
    /// [`StepOutcome::Finished`].
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepOutcome> {
        if self.finished {
            return Ok(StepOutcome::Finished);
        }

        // ── ① Bound ───────────────────────────────────────────────────────
        let bound = self.requests.get(self.next_request).map(|r| r.time);

        // ── ② Termination ─────────────────────────────────────────────────
        if bound.is_none() {
            if self.awaiting_pickup.is_empty() && self.awaiting_dropoff.is_empty() {
                self.finish();
                return Ok(StepOutcome::Finished);
            }
            if self.elevator.is_queue_empty() {
                return Err(self.stalled());
            }
        }

        // ── ③ Advance ─────────────────────────────────────────────────────
        self.elevator.advance(bound);
        self.check_time_limit()?;
        let (now, location) = self.elevator.status();
        self.steps += 1;

        // ── ④ Request arrivals ────────────────────────────────────────────
        if let Some(bound) = bound {
            if now >= bound {
                self.consume_requests(bound, observer)?;
            }
        }

        // ── ⑤/⑥ Boarding and alighting ────────────────────────────────────
        if let Some(floor) = self.elevator.docked_floor() {
            self.board(floor, observer)?;
            self.alight(floor, observer)?;
        }

        observer.on_step_end(now, location);
        Ok(StepOutcome::Continue)
    }

    pub fn elevator(&self) -> &Elevator {
        &self.elevator
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The monitor.  Floor crossings are only copied in once the run has
    /// finished.
    pub fn monitor(&self) -> &PerformanceMonitor {
        &self.monitor
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Riders waiting for the car, in arrival order.
    pub fn awaiting_pickup(&self) -> &[(RiderId, Floor)] {
        &self.awaiting_pickup
    }

    /// Riders in the car, in boarding order.
    pub fn awaiting_dropoff(&self) -> &[(RiderId, Floor)] {
        &self.awaiting_dropoff
    }

    /// Snapshot of the run so far.
    pub fn report(&self) -> SimReport {
        SimReport {
            policy:     self.policy.name().to_owned(),
            summary:    self.monitor.summary(),
            steps:      self.steps,
            final_time: self.elevator.status().0,
        }
    }

    // ── Step phases ───────────────────────────────────────────────────────

    /// Register every request stamped `bound`, in scenario order.
    fn consume_requests<O: SimObserver>(&mut self, bound: SimTime, observer: &mut O) -> SimResult<()> {
        while let Some(&request) = self.requests.get(self.next_request) {
            if request.time != bound {
                break;
            }
            self.next_request += 1;
            let (now, location) = self.elevator.status();

            self.monitor.record_request(now, request.rider, request.source, location)?;
            self.policy.heartbeat(now, location);
            let stops = self.policy.register_pickup(request.rider, request.source, Some(request.direction()));
            self.install(stops, request.rider, request.source)?;

            self.destinations.insert(request.rider, request.destination);
            self.awaiting_pickup.push((request.rider, request.source));
            debug!("{now}: {} requests {} -> {}", request.rider, request.source.0, request.destination.0);
            observer.on_request(now, &request);
        }
        Ok(())
    }

    /// Riders waiting at `floor` board, then choose their destination.
    fn board<O: SimObserver>(&mut self, floor: Floor, observer: &mut O) -> SimResult<()> {
        let boarding: Vec<RiderId> = self
            .awaiting_pickup
            .iter()
            .filter(|&&(_, source)| source == floor)
            .map(|&(rider, _)| rider)
            .collect();
        if boarding.is_empty() {
            return Ok(());
        }
        self.awaiting_pickup.retain(|&(_, source)| source != floor);

        for rider in boarding {
            let (now, location) = self.elevator.status();
            self.monitor.record_pickup(now, rider, floor, location)?;

            self.policy.heartbeat(now, location);
            let stops = self.policy.report_pickup(rider);
            self.install(stops, rider, floor)?;

            let destination = self.destination_of(rider, floor, now)?;
            self.policy.heartbeat(now, location);
            let stops = self.policy.register_dropoff(rider, destination);
            self.install(stops, rider, floor)?;

            self.awaiting_dropoff.push((rider, destination));
            debug!("{now}: {rider} boards at {}", floor.0);
            observer.on_pickup(now, rider, floor);
        }
        Ok(())
    }

    /// Riders bound for `floor` leave the car.
    fn alight<O: SimObserver>(&mut self, floor: Floor, observer: &mut O) -> SimResult<()> {
        let alighting: Vec<RiderId> = self
            .awaiting_dropoff
            .iter()
            .filter(|&&(_, destination)| destination == floor)
            .map(|&(rider, _)| rider)
            .collect();
        if alighting.is_empty() {
            return Ok(());
        }
        self.awaiting_dropoff.retain(|&(_, destination)| destination != floor);

        for rider in alighting {
            let (now, location) = self.elevator.status();
            self.monitor.record_dropoff(now, rider, floor, location)?;

            self.policy.heartbeat(now, location);
            let stops = self.policy.report_dropoff(rider);
            self.install(stops, rider, floor)?;

            self.destinations.remove(&rider);
            debug!("{now}: {rider} leaves at {}", floor.0);
            observer.on_dropoff(now, rider, floor);
        }
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Install a policy's stop list, attributing failures to `rider`.
    fn install(&mut self, stops: PolicyResult<Vec<Floor>>, rider: RiderId, floor: Floor) -> SimResult<()> {
        let time = self.elevator.status().0;
        let stops = stops.map_err(|source| SimError::Policy { source, rider, floor, time })?;
        trace!("{time}: installing {} stops {:?}", stops.len(), stops.iter().map(|f| f.0).collect::<Vec<_>>());
        self.elevator.install_stops(stops);
        Ok(())
    }

    /// Every boarding rider was registered through a request, so a miss
    /// means the bookkeeping is out of sync with the policy.
    fn destination_of(&self, rider: RiderId, floor: Floor, time: SimTime) -> SimResult<Floor> {
        self.destinations.get(&rider).copied().ok_or(SimError::Policy {
            source: PolicyError::UnknownRider { rider, kind: StopKind::Dropoff },
            rider,
            floor,
            time,
        })
    }

    fn finish(&mut self) {
        self.monitor.record_crossings(self.elevator.crossing_log());
        self.finished = true;
    }

    /// The clock may not pass the limit, even on the final leg.
    fn check_time_limit(&self) -> SimResult<()> {
        match self.time_limit {
            Some(limit) if self.elevator.status().0 > limit => Err(self.stalled()),
            _ => Ok(()),
        }
    }

    fn stalled(&self) -> SimError {
        let time = self.elevator.status().0;
        warn!(
            "{} run stalled at {time}: {} awaiting pickup, {} awaiting dropoff",
            self.policy.name(),
            self.awaiting_pickup.len(),
            self.awaiting_dropoff.len(),
        );
        SimError::Stalled {
            time,
            awaiting_pickup:  self.awaiting_pickup.len(),
            awaiting_dropoff: self.awaiting_dropoff.len(),
        }
    }
}
