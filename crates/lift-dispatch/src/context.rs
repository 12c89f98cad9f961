//! Read-only run state passed to every dispatch decision.

use lift_core::{Building, Passenger};

use crate::Car;

/// A read-only snapshot handed to [`Dispatcher::plan`][crate::Dispatcher::plan].
///
/// Built by the harness after the current floor has been serviced, so no
/// occupant is bound for `car.floor` and nobody waiting at `car.floor` could
/// still fit.
pub struct DispatchContext<'a> {
    pub building: &'a Building,

    pub car: &'a Car,

    /// Passengers not yet boarded, in registration order.
    pub waiting: &'a [Passenger],
}

impl<'a> DispatchContext<'a> {
    #[inline]
    pub fn new(building: &'a Building, car: &'a Car, waiting: &'a [Passenger]) -> Self {
        Self { building, car, waiting }
    }
}
