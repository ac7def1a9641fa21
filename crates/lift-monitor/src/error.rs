use lift_core::RiderId;
use thiserror::Error;

use crate::PerfEventKind;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("{kind} recorded for {rider} before its request")]
    UnknownRider { rider: RiderId, kind: PerfEventKind },

    #[error("{kind} recorded twice for {rider}")]
    Duplicate { rider: RiderId, kind: PerfEventKind },

    #[error("{kind} recorded for {rider} out of lifecycle order")]
    OutOfOrder { rider: RiderId, kind: PerfEventKind },
}

pub type MonitorResult<T> = Result<T, MonitorError>;
