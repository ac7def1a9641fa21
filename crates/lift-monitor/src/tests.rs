//! Unit tests for lift-monitor.

use lift_core::{Floor, FloorCrossing, RiderId, SimTime};

use crate::{Aggregate, MonitorError, PerfEventKind, PerformanceMonitor};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Rider 1: requested t=0 at floor 2, picked up t=10, dropped at 5 t=30.
/// Rider 2: requested t=4 at floor 3, picked up t=12, dropped at 1 t=50.
fn two_rider_run() -> PerformanceMonitor {
    let mut m = PerformanceMonitor::new();
    m.record_request(SimTime(0.0), RiderId(1), Floor(2), 1.0).unwrap();
    m.record_request(SimTime(4.0), RiderId(2), Floor(3), 1.4).unwrap();
    m.record_pickup(SimTime(10.0), RiderId(1), Floor(2), 2.0).unwrap();
    m.record_pickup(SimTime(12.0), RiderId(2), Floor(3), 3.0).unwrap();
    m.record_dropoff(SimTime(30.0), RiderId(1), Floor(5), 5.0).unwrap();
    m.record_dropoff(SimTime(50.0), RiderId(2), Floor(1), 1.0).unwrap();
    m
}

// ── Aggregate ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod aggregate {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(Aggregate::from_samples(&[]), Aggregate::default());
    }

    #[test]
    fn odd_median() {
        let a = Aggregate::from_samples(&[9.0, 1.0, 5.0]);
        assert_eq!(a.total, 15.0);
        assert_eq!(a.mean, 5.0);
        assert_eq!(a.median, 5.0);
    }

    #[test]
    fn even_median_averages_middle_pair() {
        let a = Aggregate::from_samples(&[4.0, 1.0, 10.0, 2.0]);
        assert_eq!(a.median, 3.0);
        assert_eq!(a.mean, 4.25);
    }
}

// ── Recording ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod recording {
    use super::*;

    #[test]
    fn log_is_append_only_in_call_order() {
        let m = two_rider_run();
        let kinds: Vec<_> = m.events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![
            PerfEventKind::Request,
            PerfEventKind::Request,
            PerfEventKind::Pickup,
            PerfEventKind::Pickup,
            PerfEventKind::Dropoff,
            PerfEventKind::Dropoff,
        ]);
        assert_eq!(m.events()[1].elevator_location, 1.4);
    }

    #[test]
    fn pickup_before_request_rejected() {
        let mut m = PerformanceMonitor::new();
        let err = m.record_pickup(SimTime(1.0), RiderId(9), Floor(0), 0.0).unwrap_err();
        assert!(matches!(err, MonitorError::UnknownRider { rider: RiderId(9), kind: PerfEventKind::Pickup }));
        assert!(m.events().is_empty());
    }

    #[test]
    fn dropoff_before_pickup_rejected() {
        let mut m = PerformanceMonitor::new();
        m.record_request(SimTime(0.0), RiderId(1), Floor(0), 0.0).unwrap();
        let err = m.record_dropoff(SimTime(1.0), RiderId(1), Floor(3), 0.0).unwrap_err();
        assert!(matches!(err, MonitorError::OutOfOrder { .. }));
        assert_eq!(m.events().len(), 1);
    }

    #[test]
    fn duplicate_request_rejected() {
        let mut m = PerformanceMonitor::new();
        m.record_request(SimTime(0.0), RiderId(1), Floor(0), 0.0).unwrap();
        let err = m.record_request(SimTime(2.0), RiderId(1), Floor(4), 0.0).unwrap_err();
        assert!(matches!(err, MonitorError::Duplicate { kind: PerfEventKind::Request, .. }));
    }

    #[test]
    fn crossings_become_floor_passed() {
        let mut m = PerformanceMonitor::new();
        m.record_crossings(&[
            FloorCrossing { time: SimTime(3.0), floor: Floor(2) },
            FloorCrossing { time: SimTime(6.0), floor: Floor(3) },
        ]);
        assert_eq!(m.events().len(), 2);
        let e = m.events()[1];
        assert_eq!(e.kind, PerfEventKind::FloorPassed);
        assert_eq!(e.rider, None);
        assert_eq!(e.floor, Floor(3));
        assert_eq!(e.elevator_location, 3.0);
    }

    #[test]
    fn sorted_view_is_stable() {
        let mut m = two_rider_run();
        m.record_crossings(&[FloorCrossing { time: SimTime(10.0), floor: Floor(2) }]);
        let sorted = m.events_sorted();
        assert!(sorted.windows(2).all(|w| w[0].time <= w[1].time));
        // Pickup and crossing share t=10; recording order wins.
        let at_ten: Vec<_> = sorted.iter().filter(|e| e.time == SimTime(10.0)).map(|e| e.kind).collect();
        assert_eq!(at_ten, vec![PerfEventKind::Pickup, PerfEventKind::FloorPassed]);
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod statistics {
    use super::*;

    #[test]
    fn per_rider_durations() {
        let stats = two_rider_run().rider_stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].rider, RiderId(1));
        assert_eq!((stats[0].wait, stats[0].ride, stats[0].total), (10.0, 20.0, 30.0));
        assert_eq!(stats[1].destination, Floor(1));
        assert_eq!((stats[1].wait, stats[1].ride, stats[1].total), (8.0, 38.0, 46.0));
    }

    #[test]
    fn summary_aggregates_completed_riders() {
        let mut m = two_rider_run();
        m.record_request(SimTime(60.0), RiderId(3), Floor(0), 1.0).unwrap();
        let s = m.summary();
        assert_eq!(s.riders, 3);
        assert_eq!(s.completed_riders, 2);
        assert_eq!(s.wait.mean, 9.0);
        assert_eq!(s.ride.total, 58.0);
        assert_eq!(s.time_to_destination.median, 38.0);
        assert_eq!(s.completion_time, 60.0);
        assert_eq!(m.unfinished_riders(), vec![RiderId(3)]);
    }

    #[test]
    fn empty_monitor_summary() {
        let s = PerformanceMonitor::new().summary();
        assert_eq!(s.riders, 0);
        assert_eq!(s.wait, Aggregate::default());
        assert_eq!(s.completion_time, 0.0);
    }
}
