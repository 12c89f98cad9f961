//! `lift-sim` — drives a dispatcher to completion and compares policies.
//!
//! # Decision cycle
//!
//! ```text
//! until waiting pool and car are both empty:
//!   ① Service — alight, then board, at the car's floor.
//!   ② Plan    — Dispatcher::plan returns a Leg.
//!   ③ Apply   — Step(dir)      → move one floor, set sweep direction
//!               TravelTo(f)    → move floor by floor to f, servicing each
//!   ④ Check   — capacity, floor range, no passenger both waiting and aboard,
//!               and that the cycle changed something.
//! ```
//!
//! Every floor-to-floor move adds the car's load to the run's cost.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs series checkpoints on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{Building, DemandRng};
//! use lift_dispatch::Policy;
//!
//! let building = Building::new(10, 8)?;
//! let mut rng = DemandRng::new(42);
//! let cost = lift_sim::run_simulation(Policy::Adaptive, building, 100, &mut rng)?;
//! let series = lift_sim::run_series(building, 500, 10, &mut rng)?;
//! ```

pub mod api;
pub mod builder;
pub mod error;
pub mod observer;
pub mod series;
pub mod sim;

#[cfg(test)]
mod tests;

pub use api::{Comparison, compare, run_comparison, run_simulation, simulate};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use series::{Series, SeriesRunner, checkpoints, run_series};
pub use sim::Sim;
