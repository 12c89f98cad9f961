//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{Floor, PassengerId};

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{passenger} has floor {floor} outside the building (1..={floor_count})")]
    FloorOutOfRange {
        passenger:   PassengerId,
        floor:       Floor,
        floor_count: u32,
    },

    #[error("{0} has the same origin and destination")]
    ZeroLengthTrip(PassengerId),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
