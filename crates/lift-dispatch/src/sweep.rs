//! Baseline policy: sweep the whole building regardless of demand.

use lift_core::{Direction, Floor};

use crate::{DispatchContext, Dispatcher, Leg};

/// Fixed full-building sweep.
///
/// The car moves one floor per cycle and reverses only at the ground floor
/// and the top floor.  Reversal and the first move in the new direction
/// happen in the same cycle, so the car never idles at an extreme.  It visits
/// every floor on every pass whether anyone needs it or not; this is the
/// control the adaptive policy is measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepDispatcher;

impl Dispatcher for SweepDispatcher {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn plan(&self, ctx: &DispatchContext<'_>) -> Leg {
        let floor = ctx.car.floor;
        let direction = match ctx.car.direction {
            Direction::Up if floor >= ctx.building.top() => Direction::Down,
            Direction::Down if floor <= Floor::GROUND    => Direction::Up,
            heading => heading,
        };
        Leg::Step(direction)
    }
}
