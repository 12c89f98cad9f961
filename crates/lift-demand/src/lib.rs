//! `lift-demand` — passenger demand sets.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`generator`] | `generate` — uniform random origin/destination pairs      |
//! | [`loader`]    | `load_demand_csv`, `load_demand_reader`, `write_demand_csv` |
//! | [`error`]     | `DemandError`, `DemandResult<T>`                          |
//!
//! A demand set is a plain `Vec<Passenger>` in registration order.  Ids run
//! `0..n`, so boarding-order contracts that talk about "most recently
//! registered" can be checked against `PassengerId` alone.

pub mod error;
pub mod generator;
pub mod loader;


pub use error::{DemandError, DemandResult};
pub use generator::generate;
pub use loader::{load_demand_csv, load_demand_reader, write_demand_csv, write_demand_writer};
