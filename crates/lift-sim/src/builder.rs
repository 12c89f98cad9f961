//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use lift_core::{Building, Passenger};
use lift_dispatch::{Car, Dispatcher, WaitingPool};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<D>`].
///
/// # Required inputs
///
/// - [`Building`] — floor count and car capacity
/// - `D: Dispatcher` — the policy to drive
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default            |
/// |--------------------|--------------------|
/// | `.passengers(v)`   | No passengers      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(building, NearestRequestDispatcher)
///     .passengers(demand)
///     .build()?;
/// let cost = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: Dispatcher> {
    building:   Building,
    dispatcher: D,
    passengers: Vec<Passenger>,
}

impl<D: Dispatcher> SimBuilder<D> {
    pub fn new(building: Building, dispatcher: D) -> Self {
        Self { building, dispatcher, passengers: Vec::new() }
    }

    /// Supply the demand set, in registration order.
    pub fn passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.passengers = passengers;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`] with the car empty
    /// at the ground floor.
    ///
    /// Fails before any movement if the building is unusable, a passenger's
    /// floors are outside it, or two passengers share an id.
    pub fn build(self) -> SimResult<Sim<D>> {
        self.building.validate()?;

        let mut seen = HashSet::with_capacity(self.passengers.len());
        for p in &self.passengers {
            self.building.check_passenger(p)?;
            if !seen.insert(p.id) {
                return Err(SimError::DuplicatePassenger(p.id));
            }
        }

        Ok(Sim {
            building:   self.building,
            car:        Car::new(),
            waiting:    WaitingPool::from(self.passengers),
            dispatcher: self.dispatcher,
            cost:       0,
            moves:      0,
            cycles:     0,
            delivered:  0,
        })
    }
}
