//! Fluent builder for constructing a [`Simulation`].

use lift_core::{ElevatorConfig, Scenario, SimTime};
use lift_dispatch::{DispatchPolicy, PolicyKind};

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation<P>`].
///
/// # Required inputs
///
/// - [`ElevatorConfig`] — floors, travel rates, door timings
/// - [`Scenario`] — the ride requests to replay
/// - `P: DispatchPolicy` — the scheduling policy
///
/// # Optional inputs
///
/// | Method             | Default   |
/// |--------------------|-----------|
/// | `.time_limit(t)`   | unlimited |
///
/// `build` validates the config and re-validates the scenario against the
/// floors the config serves, so a hand-assembled scenario gets the same
/// checks as a loaded one.
pub struct SimBuilder<P: DispatchPolicy> {
    config:     ElevatorConfig,
    scenario:   Scenario,
    policy:     P,
    time_limit: Option<SimTime>,
}

impl<P: DispatchPolicy> SimBuilder<P> {
    pub fn new(config: ElevatorConfig, scenario: Scenario, policy: P) -> Self {
        Self { config, scenario, policy, time_limit: None }
    }

    /// Abort with [`SimError::Stalled`] once the simulated clock passes
    /// `limit`.  Guards against policies that never deliver everybody.
    pub fn time_limit(mut self, limit: impl Into<SimTime>) -> Self {
        self.time_limit = Some(limit.into());
        self
    }

    pub fn build(self) -> SimResult<Simulation<P>> {
        self.config.validate()?;
        self.scenario.validate_for(&self.config)?;
        if let Some(limit) = self.time_limit {
            if !limit.is_valid() {
                return Err(SimError::Config(format!(
                    "time limit must be finite and non-negative, got {}",
                    limit.0
                )));
            }
        }
        Ok(Simulation::new(self.config, self.scenario, self.policy, self.time_limit))
    }
}

impl SimBuilder<Box<dyn DispatchPolicy>> {
    /// Builder for one of the built-in policies, chosen at run time.
    pub fn with_kind(config: ElevatorConfig, scenario: Scenario, kind: PolicyKind) -> Self {
        let policy = kind.build(&config);
        Self::new(config, scenario, policy)
    }
}
