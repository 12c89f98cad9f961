//! Movement requests — what a policy asks the car to do next.

use lift_core::{Direction, Floor};

/// The movement a [`Dispatcher`][crate::Dispatcher] requests after the car's
/// current floor has been serviced.
///
/// Produced by [`Dispatcher::plan`][crate::Dispatcher::plan] and applied by
/// the simulation harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Move exactly one floor in `direction` and stop.
    ///
    /// The car's sweep direction is set to `direction`.  The next floor is
    /// serviced at the start of the following cycle.
    Step(Direction),

    /// Travel floor by floor to `target`, servicing every floor reached on
    /// the way (including `target`).
    ///
    /// A target equal to the current floor is a no-op.
    TravelTo(Floor),
}
