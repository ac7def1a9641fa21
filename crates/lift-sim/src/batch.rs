//! Run many (scenario, policy) pairs and collect their reports.

use log::warn;

use lift_core::{ElevatorConfig, Scenario, SimTime};
use lift_dispatch::PolicyKind;

use crate::{NoopObserver, SimBuilder, SimReport};

/// A scenario with a label for reporting, usually its file stem.
#[derive(Debug, Clone)]
pub struct NamedScenario {
    pub name:     String,
    pub scenario: Scenario,
}

/// Outcome of one run in a batch.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub scenario: String,
    pub policy:   PolicyKind,
    /// A failed run keeps its error message instead of aborting the batch.
    pub outcome:  Result<SimReport, String>,
}

/// Run every scenario under every policy kind.
///
/// Results are ordered scenario-major, policy-minor, matching the input
/// order.  Runs are independent, so with the `parallel` feature they are
/// spread over Rayon's pool and the results are identical.
pub fn run_batch(
    config:     &ElevatorConfig,
    scenarios:  &[NamedScenario],
    kinds:      &[PolicyKind],
    time_limit: Option<SimTime>,
) -> Vec<BatchResult> {
    let jobs: Vec<(&NamedScenario, PolicyKind)> = scenarios
        .iter()
        .flat_map(|s| kinds.iter().map(move |&k| (s, k)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    {
        jobs.into_iter().map(|(s, k)| run_one(config, s, k, time_limit)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        jobs.into_par_iter().map(|(s, k)| run_one(config, s, k, time_limit)).collect()
    }
}

fn run_one(
    config:     &ElevatorConfig,
    named:      &NamedScenario,
    kind:       PolicyKind,
    time_limit: Option<SimTime>,
) -> BatchResult {
    let mut builder = SimBuilder::with_kind(config.clone(), named.scenario.clone(), kind);
    if let Some(limit) = time_limit {
        builder = builder.time_limit(limit);
    }
    let outcome = builder
        .build()
        .and_then(|mut sim| sim.run(&mut NoopObserver))
        .map_err(|e| {
            warn!("{} under {kind} failed: {e}", named.name);
            e.to_string()
        });
    BatchResult { scenario: named.name.clone(), policy: kind, outcome }
}
