use lift_core::{LiftError, PassengerId};
use lift_demand::DemandError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] LiftError),

    #[error(transparent)]
    Demand(#[from] DemandError),

    #[error("{0} appears more than once in the demand set")]
    DuplicatePassenger(PassengerId),

    /// Fatal internal error.  The run stops rather than report a cost that
    /// could be wrong.
    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

pub type SimResult<T> = Result<T, SimError>;
