//! `lift-dispatch` — dispatch policies and the state they act on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`car`]       | `Car` (floor, sweep direction, occupants), `WaitingPool`        |
//! | [`boarding`]  | `alight`, `board`, `BoardingOrder`                              |
//! | [`leg`]       | `Leg` — one-step move or travel-to-floor request                |
//! | [`context`]   | `DispatchContext<'a>` — read-only view handed to a policy       |
//! | [`model`]     | `Dispatcher` trait                                              |
//! | [`sweep`]     | `SweepDispatcher` — fixed full-building sweep (baseline)        |
//! | [`nearest`]   | `NearestRequestDispatcher` — ring-search heuristic (adaptive)   |
//! | [`policy`]    | `Policy` enum naming the two built-in dispatchers               |
//! | [`error`]     | `DispatchError`, `DispatchResult<T>`                            |
//!
//! # Design notes
//!
//! A decision cycle is split the same way for every policy:
//!
//! 1. **Service** (harness): alight, then board, at the car's floor.
//! 2. **Plan** (policy): read `&DispatchContext` and return a [`Leg`].
//! 3. **Apply** (harness): move the car, accruing cost per floor, and for
//!    [`Leg::TravelTo`] service every floor passed on the way.
//!
//! Policies never mutate state, so a `Dispatcher` is `Send + Sync` and
//! running the same policy twice on equal inputs gives equal costs.

pub mod boarding;
pub mod car;
pub mod context;
pub mod error;
pub mod leg;
pub mod model;
pub mod nearest;
pub mod policy;
pub mod sweep;


pub use boarding::{BoardingOrder, alight, board};
pub use car::{Car, WaitingPool};
pub use context::DispatchContext;
pub use error::{DispatchError, DispatchResult};
pub use leg::Leg;
pub use model::Dispatcher;
pub use nearest::{NearestRequestDispatcher, decide_next_floor};
pub use policy::Policy;
pub use sweep::SweepDispatcher;
