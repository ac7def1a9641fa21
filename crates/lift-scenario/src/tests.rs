//! Unit tests for lift-scenario.

use std::io::Cursor;

use lift_core::{Floor, LiftError, RiderId, SimRng, SimTime};

use crate::{
    generate_free_for_all, generate_office_building, load_config_reader, load_scenario_csv,
    load_scenario_reader, write_scenario_csv, FreeForAllParams, OfficeParams, ScenarioError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load(csv: &str, bounds: Option<(Floor, Floor)>) -> Result<lift_core::Scenario, ScenarioError> {
    load_scenario_reader(Cursor::new(csv), bounds)
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn sequential_ids_when_column_absent() {
        let s = load("timestamp,source_floor,destination_floor\n0,1,5\n2.5,3,1\n", None).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.requests()[0].rider, RiderId(0));
        assert_eq!(s.requests()[1].rider, RiderId(1));
        assert_eq!(s.requests()[1].time, SimTime(2.5));
        assert_eq!(s.requests()[1].source, Floor(3));
    }

    #[test]
    fn explicit_ids_kept() {
        let s = load("timestamp,source_floor,destination_floor,rider_id\n0,1,5,40\n1,2,0,7\n", None).unwrap();
        assert_eq!(s.requests()[0].rider, RiderId(40));
        assert_eq!(s.requests()[1].rider, RiderId(7));
    }

    #[test]
    fn rows_sorted_stably_by_time() {
        let csv = "timestamp,source_floor,destination_floor\n9,1,2\n3,4,5\n3,6,7\n";
        let s = load(csv, None).unwrap();
        let ids: Vec<u32> = s.requests().iter().map(|r| r.rider.0).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }

    #[test]
    fn whitespace_tolerated() {
        let s = load("timestamp, source_floor, destination_floor\n 4 , 2 , 3 \n", None).unwrap();
        assert_eq!(s.requests()[0].destination, Floor(3));
    }

    #[test]
    fn negative_floor_names_rider() {
        let err = load("timestamp,source_floor,destination_floor\n0,1,5\n1,-2,3\n", None).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Invalid(LiftError::InvalidScenario { rider: RiderId(1), .. })
        ));
    }

    #[test]
    fn negative_timestamp_rejected() {
        let err = load("timestamp,source_floor,destination_floor\n-1,1,5\n", None).unwrap_err();
        assert!(matches!(err, ScenarioError::Invalid(LiftError::InvalidScenario { .. })));
    }

    #[test]
    fn floor_above_max_rejected_only_with_bounds() {
        let csv = "timestamp,source_floor,destination_floor\n0,1,12\n";
        assert!(load(csv, None).is_ok());
        let err = load(csv, Some((Floor(0), Floor(10)))).unwrap_err();
        assert!(matches!(err, ScenarioError::Invalid(_)));
    }

    #[test]
    fn duplicate_rider_rejected() {
        let csv = "timestamp,source_floor,destination_floor,rider_id\n0,1,2,3\n1,2,1,3\n";
        assert!(matches!(load(csv, None).unwrap_err(), ScenarioError::Invalid(_)));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let err = load("timestamp,source_floor,destination_floor\nsoon,1,2\n", None).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(ref m) if m.starts_with("row 1")));
    }

    #[test]
    fn written_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.csv");
        let original = load("timestamp,source_floor,destination_floor\n0,1,5\n4.5,3,1\n", None).unwrap();
        write_scenario_csv(&path, &original).unwrap();
        assert_eq!(load_scenario_csv(&path, Some((Floor(0), Floor(5)))).unwrap(), original);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_scenario_csv(std::path::Path::new("/nonexistent/rides.csv"), None).unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    const JSON: &str = r#"{
        "initial_floor": 1,
        "ascend_secs_per_floor": 3.0,
        "descend_secs_per_floor": 4.0,
        "door_open_secs": 5.0,
        "door_close_secs": 6.0,
        "max_floor": 20
    }"#;

    #[test]
    fn min_floor_defaults_to_zero() {
        let cfg = load_config_reader(Cursor::new(JSON)).unwrap();
        assert_eq!(cfg.min_floor, Floor(0));
        assert_eq!(cfg.max_floor, Floor(20));
        assert_eq!(cfg.descend_secs_per_floor, 4.0);
    }

    #[test]
    fn invalid_values_rejected() {
        let json = JSON.replace("\"initial_floor\": 1", "\"initial_floor\": 30");
        let err = load_config_reader(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, ScenarioError::Invalid(LiftError::Config(_))));
    }

    #[test]
    fn missing_field_is_json_error() {
        let err = load_config_reader(Cursor::new(r#"{"initial_floor": 1}"#)).unwrap_err();
        assert!(matches!(err, ScenarioError::Json(_)));
    }
}

// ── Generators ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generators {
    use super::*;

    #[test]
    fn free_for_all_is_deterministic() {
        let params = FreeForAllParams { events: 200, max_floor: Floor(12), max_gap_secs: 30 };
        let a = generate_free_for_all(&params, &mut SimRng::new(5)).unwrap();
        let b = generate_free_for_all(&params, &mut SimRng::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn free_for_all_respects_bounds() {
        let params = FreeForAllParams { events: 300, max_floor: Floor(8), max_gap_secs: 10 };
        let s = generate_free_for_all(&params, &mut SimRng::new(1)).unwrap();
        assert!(s.len() <= 300);
        s.validate(Floor(1), Floor(8)).unwrap();
        assert!(s.requests().iter().all(|r| r.source != r.destination));
        assert!(s.requests().windows(2).all(|w| w[1].time.since(w[0].time) <= 10.0));
    }

    #[test]
    fn free_for_all_needs_two_floors() {
        let params = FreeForAllParams { max_floor: Floor(1), ..FreeForAllParams::default() };
        assert!(matches!(
            generate_free_for_all(&params, &mut SimRng::new(0)).unwrap_err(),
            ScenarioError::Params(_)
        ));
    }

    #[test]
    fn office_without_lunch_has_two_rides_each() {
        let params = OfficeParams { employees: 40, lunch_probability: 0.0, ..OfficeParams::default() };
        let s = generate_office_building(&params, &mut SimRng::new(9)).unwrap();
        assert_eq!(s.len(), 80);
        // Every ride starts or ends in the lobby.
        assert!(s.requests().iter().all(|r| r.source == Floor(1) || r.destination == Floor(1)));
    }

    #[test]
    fn office_rush_windows() {
        let params = OfficeParams { employees: 50, lunch_probability: 1.0, ..OfficeParams::default() };
        let s = generate_office_building(&params, &mut SimRng::new(3)).unwrap();
        assert_eq!(s.len(), 200);
        s.validate(Floor(1), params.max_floor).unwrap();
        let last = s.requests().last().unwrap().time.secs();
        assert!(last <= params.day_secs as f64);
        // Ids follow timestamp order.
        assert!(s.requests().iter().enumerate().all(|(i, r)| r.rider.index() == i));
    }

    #[test]
    fn office_rejects_overlapping_rushes() {
        let params = OfficeParams { day_secs: 3600, rush_secs: 2400, ..OfficeParams::default() };
        assert!(generate_office_building(&params, &mut SimRng::new(0)).is_err());
    }
}
