use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid generator parameters: {0}")]
    Params(String),

    #[error(transparent)]
    Invalid(#[from] LiftError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
