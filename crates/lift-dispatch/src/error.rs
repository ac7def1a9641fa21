use lift_core::{RiderId, StopKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    /// The orchestrator reported a completion the policy has no record of.
    /// Always a desynchronisation bug; the run must abort.
    #[error("{kind} reported for {rider}, which has no outstanding {kind} task")]
    UnknownRider { rider: RiderId, kind: StopKind },

    #[error("{rider} already has an outstanding {kind} task")]
    DuplicateTask { rider: RiderId, kind: StopKind },

    #[error("unknown dispatch policy {0:?} (expected one of: fifo, scan, scan-directional, shabbat)")]
    UnknownPolicy(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
