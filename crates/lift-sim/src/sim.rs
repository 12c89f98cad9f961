//! The `Sim` struct and its decision-cycle loop.

use std::collections::HashSet;

use log::debug;

use lift_core::{Building, Direction, PassengerId};
use lift_dispatch::{Car, DispatchContext, Dispatcher, Leg, WaitingPool, alight, board};

use crate::{RunObserver, SimError, SimResult};

/// One simulation run of a single dispatcher against a fixed demand set.
///
/// All state is owned by the run and dropped with it; nothing is shared
/// between runs.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: Dispatcher> {
    pub building: Building,

    pub car: Car,

    /// Passengers not yet boarded, in registration order.
    pub waiting: WaitingPool,

    pub dispatcher: D,

    /// Occupant-floors carried so far.
    pub cost: u64,

    /// Floor-to-floor moves so far, loaded or empty.
    pub moves: u64,

    /// Completed decision cycles.
    pub cycles: u64,

    /// Passengers delivered so far.
    pub delivered: usize,
}

impl<D: Dispatcher> Sim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// `true` once nobody is waiting and the car is empty.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.waiting.is_empty() && self.car.is_empty()
    }

    /// Run decision cycles until every passenger is delivered and return the
    /// accumulated cost.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<u64> {
        debug!(
            "{}: starting run with {} passengers, {} floors, capacity {}",
            self.dispatcher.name(),
            self.waiting.len(),
            self.building.floor_count,
            self.building.capacity,
        );

        while !self.is_finished() {
            self.cycle(observer)?;
        }
        observer.on_run_end(self.cost);

        debug!(
            "{}: finished after {} cycles, {} moves, cost {}",
            self.dispatcher.name(),
            self.cycles,
            self.moves,
            self.cost,
        );
        Ok(self.cost)
    }

    /// Run at most `n` decision cycles, stopping early once finished.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_cycles<O: RunObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if self.is_finished() {
                break;
            }
            self.cycle(observer)?;
        }
        Ok(())
    }

    // ── Core cycle processing ─────────────────────────────────────────────

    fn cycle<O: RunObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let before = (self.moves, self.delivered, self.waiting.len());

        // ── Phase 1: service the current floor ────────────────────────────
        self.service_floor(observer);

        // ── Phase 2: plan ─────────────────────────────────────────────────
        let leg = {
            let ctx = DispatchContext::new(&self.building, &self.car, self.waiting.as_slice());
            self.dispatcher.plan(&ctx)
        };

        // ── Phase 3: apply ────────────────────────────────────────────────
        match leg {
            Leg::Step(direction) => {
                self.car.direction = direction;
                self.advance(direction, observer)?;
            }
            Leg::TravelTo(target) => {
                if !self.building.contains(target) {
                    return Err(SimError::Invariant(format!(
                        "{} targeted {target}, outside floors 1..={}",
                        self.dispatcher.name(),
                        self.building.floor_count,
                    )));
                }
                while self.car.floor != target {
                    let direction = if self.car.floor < target { Direction::Up } else { Direction::Down };
                    self.advance(direction, observer)?;
                    self.service_floor(observer);
                    self.check_capacity()?;
                }
            }
        }
        self.cycles += 1;

        // ── Phase 4: invariants ───────────────────────────────────────────
        self.check_invariants()?;
        if !self.is_finished() && (self.moves, self.delivered, self.waiting.len()) == before {
            return Err(SimError::Invariant(format!(
                "{} made no progress at {} ({} aboard, {} waiting)",
                self.dispatcher.name(),
                self.car.floor,
                self.car.load(),
                self.waiting.len(),
            )));
        }
        Ok(())
    }

    /// Alight, then board, at the car's floor.
    fn service_floor<O: RunObserver>(&mut self, observer: &mut O) {
        let floor = self.car.floor;

        let off = alight(&mut self.car);
        if !off.is_empty() {
            self.delivered += off.len();
            observer.on_alight(floor, &off);
        }

        let on = board(&mut self.waiting, &mut self.car, self.building.capacity);
        if !on.is_empty() {
            observer.on_board(floor, &on);
        }
    }

    /// Move one floor in `direction` and charge the car's load for it.
    fn advance<O: RunObserver>(&mut self, direction: Direction, observer: &mut O) -> SimResult<()> {
        let from = self.car.floor;
        let to = from.step(direction);
        if to == from || !self.building.contains(to) {
            return Err(SimError::Invariant(format!(
                "{} tried to move {direction} from {from}, outside floors 1..={}",
                self.dispatcher.name(),
                self.building.floor_count,
            )));
        }

        self.car.floor = to;
        let load = self.car.load();
        self.cost += load as u64;
        self.moves += 1;
        observer.on_move(from, to, load, self.cost);
        Ok(())
    }

    fn check_capacity(&self) -> SimResult<()> {
        if self.car.load() > self.building.capacity as usize {
            return Err(SimError::Invariant(format!(
                "{} occupants exceed capacity {}",
                self.car.load(),
                self.building.capacity,
            )));
        }
        Ok(())
    }

    fn check_invariants(&self) -> SimResult<()> {
        self.check_capacity()?;
        if !self.building.contains(self.car.floor) {
            return Err(SimError::Invariant(format!("car left the building at {}", self.car.floor)));
        }
        let aboard: HashSet<PassengerId> = self.car.occupants.iter().map(|p| p.id).collect();
        if let Some(p) = self.waiting.as_slice().iter().find(|p| aboard.contains(&p.id)) {
            return Err(SimError::Invariant(format!("{} is both waiting and aboard", p.id)));
        }
        Ok(())
    }
}
