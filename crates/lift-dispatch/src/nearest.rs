//! Adaptive policy: head for the nearest floor somebody needs.
//!
//! # Decision rule
//!
//! ```text
//! occupants non-empty → ring search over occupants' destinations
//! else waiting non-empty → nearest waiting origin (first minimum wins)
//! else → ground floor
//! ```
//!
//! # Ring search
//!
//! Two cursors start at the current floor and move outward one floor per
//! iteration (`upper` up, `lower` down).  At each iteration:
//!
//! | `lower` wanted | `upper` wanted | Action                                          |
//! |----------------|----------------|-------------------------------------------------|
//! | no             | yes            | commit to `upper`                               |
//! | yes            | no             | commit to `lower`                               |
//! | yes            | yes            | remember `upper` as tentative, expand unclamped |
//! | no             | no             | expand, each cursor clamped to the building     |
//!
//! After a "both" expansion, if `upper` has reached the top floor or `lower`
//! has dropped below the ground floor, the search commits to the tentative
//! floor (ground floor if none).  If both cursors are pinned at the
//! extremes and neither is wanted, the search resolves the same way.
//!
//! A "both" hit does not commit: a single hit further out wins over it.

use std::collections::HashSet;

use lift_core::{Floor, Passenger};

use crate::{DispatchContext, Dispatcher, Leg};

/// Ring-search heuristic dispatcher.
///
/// Re-decides only after reaching its target; it never looks further ahead
/// than one floor at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestRequestDispatcher;

impl Dispatcher for NearestRequestDispatcher {
    fn name(&self) -> &'static str {
        "adaptive"
    }

    fn plan(&self, ctx: &DispatchContext<'_>) -> Leg {
        Leg::TravelTo(decide_next_floor(
            &ctx.car.occupants,
            ctx.car.floor,
            ctx.building.top(),
            ctx.waiting,
        ))
    }
}

/// Pick the next target floor for the adaptive policy.
///
/// See the [module docs][self] for the exact rule.  `top` is the highest
/// floor of the building.
pub fn decide_next_floor(
    occupants: &[Passenger],
    current:   Floor,
    top:       Floor,
    waiting:   &[Passenger],
) -> Floor {
    if !occupants.is_empty() {
        let wanted: HashSet<Floor> = occupants.iter().map(|p| p.destination).collect();
        return ring_search(&wanted, current, top);
    }
    nearest_origin(waiting, current).unwrap_or(Floor::GROUND)
}

fn ring_search(wanted: &HashSet<Floor>, current: Floor, top: Floor) -> Floor {
    let mut upper = current.0;
    let mut lower = current.0;
    let mut tentative: Option<Floor> = None;

    loop {
        let lower_hit = wanted.contains(&Floor(lower));
        let upper_hit = wanted.contains(&Floor(upper));

        match (lower_hit, upper_hit) {
            (false, true) => return Floor(upper),
            (true, false) => return Floor(lower),
            (true, true) => {
                tentative = Some(Floor(upper));
                upper += 1;
                lower -= 1;
                if upper >= top.0 || lower < 1 {
                    return tentative.unwrap_or(Floor::GROUND);
                }
            }
            (false, false) => {
                let next_upper = (upper + 1).min(top.0);
                let next_lower = lower.saturating_sub(1).max(1);
                if next_upper == upper && next_lower == lower {
                    return tentative.unwrap_or(Floor::GROUND);
                }
                upper = next_upper;
                lower = next_lower;
            }
        }
    }
}

/// Origin of the waiting passenger closest to `current`.
///
/// Scans in pool order with a strict `<`, so among equally close origins the
/// first one encountered wins.
fn nearest_origin(waiting: &[Passenger], current: Floor) -> Option<Floor> {
    let mut best: Option<(Floor, u32)> = None;
    for p in waiting {
        let distance = p.origin.distance(current);
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((p.origin, distance)),
        }
    }
    best.map(|(floor, _)| floor)
}
