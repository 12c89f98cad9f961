//! `lift-core` — foundational types for the lift dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`                                         |
//! | [`floor`]       | `Floor` (1-based), `Direction`                        |
//! | [`passenger`]   | `Passenger` — immutable origin/destination record     |
//! | [`config`]      | `Building`, `SimConfig`                               |
//! | [`rng`]         | `DemandRng` (seeded, child-derivable)                 |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod passenger;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Building, SimConfig};
pub use error::{LiftError, LiftResult};
pub use floor::{Direction, Floor};
pub use ids::PassengerId;
pub use passenger::Passenger;
pub use rng::DemandRng;
