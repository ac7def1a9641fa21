//! Flatten a batch comparison into one CSV file.

use std::path::Path;

use csv::Writer;

use lift_sim::BatchResult;

use crate::OutputResult;

pub const BATCH_HEADER: [&str; 10] = [
    "scenario", "policy", "status", "riders", "completed_riders", "wait_mean", "ride_mean",
    "total_mean", "completion_time", "error",
];

/// Write one row per (scenario, policy) run.  Failed runs keep their error
/// message and leave the numeric columns empty.
pub fn write_batch_csv(path: &Path, results: &[BatchResult]) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(BATCH_HEADER)?;
    for r in results {
        let policy = r.policy.to_string();
        match &r.outcome {
            Ok(report) => {
                let s = &report.summary;
                w.write_record(&[
                    r.scenario.clone(),
                    policy,
                    "ok".to_owned(),
                    s.riders.to_string(),
                    s.completed_riders.to_string(),
                    s.wait.mean.to_string(),
                    s.ride.mean.to_string(),
                    s.time_to_destination.mean.to_string(),
                    s.completion_time.to_string(),
                    String::new(),
                ])?;
            }
            Err(message) => {
                w.write_record(&[
                    r.scenario.clone(),
                    policy,
                    "error".to_owned(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    message.clone(),
                ])?;
            }
        }
    }
    w.flush()?;
    Ok(())
}
