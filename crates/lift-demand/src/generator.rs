//! Uniform random passenger generation.

use lift_core::{Building, DemandRng, Floor, LiftError, Passenger, PassengerId};

use crate::DemandResult;

/// Draw `passenger_count` passengers for `building`.
///
/// Each origin is uniform over `[1, floor_count]`.  The destination is drawn
/// from the same range and redrawn until it differs from the origin, so the
/// building is validated first: a one-floor building would never produce a
/// destination.
///
/// Ids are assigned `0..passenger_count` in draw order.
pub fn generate(
    rng:             &mut DemandRng,
    building:        &Building,
    passenger_count: usize,
) -> DemandResult<Vec<Passenger>> {
    building.validate()?;

    let top = building.floor_count;
    (0..passenger_count)
        .map(|i| -> DemandResult<Passenger> {
            let origin = rng.gen_range(1..=top);
            let mut destination = origin;
            while destination == origin {
                destination = rng.gen_range(1..=top);
            }
            let id = PassengerId::try_from(i).map_err(|_| {
                LiftError::Config(format!("passenger count {passenger_count} overflows u32 ids"))
            })?;
            Ok(Passenger::new(id, Floor(origin), Floor(destination)))
        })
        .collect()
}
