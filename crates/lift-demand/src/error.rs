use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error(transparent)]
    Core(#[from] LiftError),

    #[error("demand parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DemandResult<T> = Result<T, DemandError>;
