//! Alighting and boarding at a single floor, shared by every policy.

use lift_core::Passenger;

use crate::{Car, WaitingPool};

/// Which eligible passenger gets the last free place when a floor is crowded.
///
/// Only one order is implemented.  It is named so callers and tests can state
/// the contract they rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardingOrder {
    /// The waiting pool is scanned from its end, so the passenger registered
    /// most recently boards first.
    #[default]
    LastRegisteredFirst,
}

/// Let off every occupant whose destination is the car's floor.
///
/// Returns the delivered passengers in boarding order.  Remaining occupants
/// keep their relative order.
pub fn alight(car: &mut Car) -> Vec<Passenger> {
    if car.occupants.is_empty() {
        return Vec::new();
    }
    let floor = car.floor;
    let (leaving, staying): (Vec<Passenger>, Vec<Passenger>) = car
        .occupants
        .drain(..)
        .partition(|p| p.destination == floor);
    car.occupants = staying;
    leaving
}

/// Move passengers waiting at the car's floor into the car until it is full.
///
/// Eligible passengers are admitted in [`BoardingOrder::LastRegisteredFirst`]
/// order.  Anyone who does not fit stays in `waiting` for a later visit.
/// Returns the boarded passengers in the order they got on.
pub fn board(waiting: &mut WaitingPool, car: &mut Car, capacity: u32) -> Vec<Passenger> {
    let capacity = capacity as usize;
    let floor = car.floor;
    let mut boarded = Vec::new();

    for i in (0..waiting.passengers.len()).rev() {
        if car.occupants.len() >= capacity {
            break;
        }
        if waiting.passengers[i].origin == floor {
            let passenger = waiting.passengers.remove(i);
            car.occupants.push(passenger);
            boarded.push(passenger);
        }
    }

    boarded
}
