//! The append-only performance log.

use lift_core::{Floor, FloorCrossing, RiderId, SimTime};
use rustc_hash::FxHashMap;

use crate::{Aggregate, MonitorError, MonitorResult, PerfEvent, PerfEventKind, PerformanceSummary};

/// Lifecycle timestamps of one rider, filled in as events arrive.
#[derive(Copy, Clone, Debug)]
struct Timeline {
    source:      Floor,
    requested:   SimTime,
    picked_up:   Option<SimTime>,
    dropped_off: Option<(SimTime, Floor)>,
}

/// Derived durations for one rider that reached its destination.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiderStats {
    pub rider:       RiderId,
    pub source:      Floor,
    pub destination: Floor,
    pub requested:   SimTime,
    pub picked_up:   SimTime,
    pub dropped_off: SimTime,
    /// `picked_up - requested`.
    pub wait:        f64,
    /// `dropped_off - picked_up`.
    pub ride:        f64,
    /// `dropped_off - requested`.
    pub total:       f64,
}

/// Records what happened during a run and derives rider statistics.
///
/// Lifecycle events must arrive in order per rider: request, pickup,
/// dropoff.  Anything else is rejected without touching the log.
#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    log:       Vec<PerfEvent>,
    timelines: FxHashMap<RiderId, Timeline>,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(
        &mut self,
        time:     SimTime,
        rider:    RiderId,
        source:   Floor,
        location: f64,
    ) -> MonitorResult<()> {
        if self.timelines.contains_key(&rider) {
            return Err(MonitorError::Duplicate { rider, kind: PerfEventKind::Request });
        }
        self.timelines.insert(rider, Timeline { source, requested: time, picked_up: None, dropped_off: None });
        self.push(time, PerfEventKind::Request, Some(rider), source, location);
        Ok(())
    }

    pub fn record_pickup(
        &mut self,
        time:     SimTime,
        rider:    RiderId,
        floor:    Floor,
        location: f64,
    ) -> MonitorResult<()> {
        let kind = PerfEventKind::Pickup;
        let timeline = self.timelines.get_mut(&rider).ok_or(MonitorError::UnknownRider { rider, kind })?;
        if timeline.picked_up.is_some() {
            return Err(MonitorError::Duplicate { rider, kind });
        }
        timeline.picked_up = Some(time);
        self.push(time, kind, Some(rider), floor, location);
        Ok(())
    }

    pub fn record_dropoff(
        &mut self,
        time:     SimTime,
        rider:    RiderId,
        floor:    Floor,
        location: f64,
    ) -> MonitorResult<()> {
        let kind = PerfEventKind::Dropoff;
        let timeline = self.timelines.get_mut(&rider).ok_or(MonitorError::UnknownRider { rider, kind })?;
        if timeline.picked_up.is_none() {
            return Err(MonitorError::OutOfOrder { rider, kind });
        }
        if timeline.dropped_off.is_some() {
            return Err(MonitorError::Duplicate { rider, kind });
        }
        timeline.dropped_off = Some((time, floor));
        self.push(time, kind, Some(rider), floor, location);
        Ok(())
    }

    /// Append one `FloorPassed` event per crossing.
    pub fn record_crossings(&mut self, crossings: &[FloorCrossing]) {
        for c in crossings {
            self.push(c.time, PerfEventKind::FloorPassed, None, c.floor, c.floor.as_f64());
        }
    }

    /// The raw log in recording order.
    pub fn events(&self) -> &[PerfEvent] {
        &self.log
    }

    /// The log sorted by time.  The sort is stable, so events at the same
    /// timestamp keep their recording order.
    pub fn events_sorted(&self) -> Vec<PerfEvent> {
        let mut events = self.log.clone();
        events.sort_by(|a, b| a.time.total_cmp(&b.time));
        events
    }

    /// Number of riders that issued a request.
    pub fn rider_count(&self) -> usize {
        self.timelines.len()
    }

    /// Stats for every rider that reached its destination, ordered by id.
    pub fn rider_stats(&self) -> Vec<RiderStats> {
        let mut stats: Vec<RiderStats> = self
            .timelines
            .iter()
            .filter_map(|(&rider, t)| {
                let picked_up = t.picked_up?;
                let (dropped_off, destination) = t.dropped_off?;
                Some(RiderStats {
                    rider,
                    source: t.source,
                    destination,
                    requested: t.requested,
                    picked_up,
                    dropped_off,
                    wait:  picked_up - t.requested,
                    ride:  dropped_off - picked_up,
                    total: dropped_off - t.requested,
                })
            })
            .collect();
        stats.sort_by_key(|s| s.rider);
        stats
    }

    /// Riders still waiting for pickup or riding.
    pub fn unfinished_riders(&self) -> Vec<RiderId> {
        let mut riders: Vec<RiderId> = self
            .timelines
            .iter()
            .filter(|(_, t)| t.dropped_off.is_none())
            .map(|(&r, _)| r)
            .collect();
        riders.sort();
        riders
    }

    /// Timestamp of the last logged event; zero for an empty log.
    pub fn completion_time(&self) -> SimTime {
        self.log.iter().map(|e| e.time).fold(SimTime::ZERO, SimTime::max)
    }

    pub fn summary(&self) -> PerformanceSummary {
        let stats = self.rider_stats();
        let wait: Vec<f64>  = stats.iter().map(|s| s.wait).collect();
        let ride: Vec<f64>  = stats.iter().map(|s| s.ride).collect();
        let total: Vec<f64> = stats.iter().map(|s| s.total).collect();
        PerformanceSummary {
            riders:              self.rider_count(),
            completed_riders:    stats.len(),
            wait:                Aggregate::from_samples(&wait),
            ride:                Aggregate::from_samples(&ride),
            time_to_destination: Aggregate::from_samples(&total),
            completion_time:     self.completion_time().secs(),
        }
    }

    fn push(&mut self, time: SimTime, kind: PerfEventKind, rider: Option<RiderId>, floor: Floor, location: f64) {
        self.log.push(PerfEvent { time, kind, rider, floor, elevator_location: location });
    }
}
