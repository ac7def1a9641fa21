use lift_core::{Floor, LiftError, RiderId, SimTime};
use lift_dispatch::PolicyError;
use lift_monitor::MonitorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Invalid(#[from] LiftError),

    /// The policy rejected a call; the run cannot continue consistently.
    #[error("dispatch policy failed for {rider} at {floor} ({time}): {source}")]
    Policy {
        source: PolicyError,
        rider:  RiderId,
        floor:  Floor,
        time:   SimTime,
    },

    #[error("performance monitor rejected an event: {0}")]
    Monitor(#[from] MonitorError),

    #[error(
        "simulation stalled at {time}: {awaiting_pickup} rider(s) awaiting pickup, \
         {awaiting_dropoff} awaiting dropoff"
    )]
    Stalled {
        time:             SimTime,
        awaiting_pickup:  usize,
        awaiting_dropoff: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
