//! Mutable per-run state: the car and the passengers still waiting for it.

use lift_core::{Direction, Floor, Passenger};

/// The single elevator car.
///
/// `occupants` keeps boarding order.  The harness guarantees
/// `occupants.len() <= capacity` and `floor` within the building after every
/// cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Car {
    pub floor: Floor,

    /// Sweep direction.  Only the sweep policy reads it; the harness updates
    /// it on every [`Leg::Step`][crate::Leg::Step].
    pub direction: Direction,

    pub occupants: Vec<Passenger>,
}

impl Car {
    /// An empty car parked at the ground floor, heading up.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn load(&self) -> usize {
        self.occupants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

/// Passengers that have not boarded yet, in registration order.
///
/// Removing a boarded passenger preserves the relative order of the rest,
/// which the nearest-origin scan and the boarding order both depend on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WaitingPool {
    pub passengers: Vec<Passenger>,
}

impl WaitingPool {
    #[inline]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Passenger] {
        &self.passengers
    }
}

impl From<Vec<Passenger>> for WaitingPool {
    fn from(passengers: Vec<Passenger>) -> Self {
        Self { passengers }
    }
}
