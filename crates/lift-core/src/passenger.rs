//! The immutable passenger record.

use crate::{Direction, Floor, PassengerId};

/// One passenger's trip request.
///
/// Created once (by the generator or a demand loader) and never mutated.
/// During a run it lives in exactly one of the waiting pool or the car's
/// occupants, and is dropped on delivery.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:          PassengerId,
    pub origin:      Floor,
    pub destination: Floor,
}

impl Passenger {
    #[inline]
    pub fn new(id: PassengerId, origin: Floor, destination: Floor) -> Self {
        Self { id, origin, destination }
    }

    /// Derived from the floors; never stored.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::of_trip(self.origin, self.destination)
    }

    /// Floors travelled if carried directly.
    #[inline]
    pub fn trip_length(&self) -> u32 {
        self.origin.distance(self.destination)
    }
}
