//! Run observer trait for tracing and data collection.

use lift_core::{Floor, Passenger};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the car works.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — move printer
///
/// ```rust,ignore
/// struct MovePrinter;
///
/// impl RunObserver for MovePrinter {
///     fn on_move(&mut self, from: Floor, to: Floor, load: usize, cost: u64) {
///         println!("{from} -> {to} carrying {load} (cost {cost})");
///     }
/// }
/// ```
pub trait RunObserver {
    /// Passengers delivered at `floor`, in boarding order.
    fn on_alight(&mut self, _floor: Floor, _passengers: &[Passenger]) {}

    /// Passengers that got on at `floor`, in the order they boarded.
    fn on_board(&mut self, _floor: Floor, _passengers: &[Passenger]) {}

    /// One floor-to-floor move.  `load` is the number of occupants carried,
    /// `cost` the running total after this move.
    fn on_move(&mut self, _from: Floor, _to: Floor, _load: usize, _cost: u64) {}

    /// Called once when every passenger has been delivered.
    fn on_run_end(&mut self, _cost: u64) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
