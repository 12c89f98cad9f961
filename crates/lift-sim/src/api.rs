//! Stateless entry points for callers that just want costs.

use lift_core::{Building, DemandRng, Passenger};
use lift_demand::generate;
use lift_dispatch::{Dispatcher, NearestRequestDispatcher, Policy, SweepDispatcher};

use crate::{NoopObserver, SimBuilder, SimResult};

/// Costs of both policies on one shared demand set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub passengers:    usize,
    pub baseline_cost: u64,
    pub adaptive_cost: u64,
}

impl Comparison {
    /// Cost for `policy`.
    pub fn cost(&self, policy: Policy) -> u64 {
        match policy {
            Policy::Baseline => self.baseline_cost,
            Policy::Adaptive => self.adaptive_cost,
        }
    }
}

/// Run `policy` against a fixed demand set and return its cost.
///
/// The demand set is copied; the caller's slice is untouched.
pub fn simulate(policy: Policy, building: Building, passengers: &[Passenger]) -> SimResult<u64> {
    match policy {
        Policy::Baseline => simulate_with(SweepDispatcher, building, passengers),
        Policy::Adaptive => simulate_with(NearestRequestDispatcher, building, passengers),
    }
}

/// Run both policies against identical copies of `passengers`.
pub fn compare(building: Building, passengers: &[Passenger]) -> SimResult<Comparison> {
    Ok(Comparison {
        passengers:    passengers.len(),
        baseline_cost: simulate(Policy::Baseline, building, passengers)?,
        adaptive_cost: simulate(Policy::Adaptive, building, passengers)?,
    })
}

/// Generate `passenger_count` passengers and run `policy` on them.
///
/// Configuration errors are reported before any passenger is drawn.
pub fn run_simulation(
    policy:          Policy,
    building:        Building,
    passenger_count: usize,
    rng:             &mut DemandRng,
) -> SimResult<u64> {
    building.validate()?;
    let demand = generate(rng, &building, passenger_count)?;
    simulate(policy, building, &demand)
}

/// Generate one demand set and run both policies on it.
pub fn run_comparison(
    building:        Building,
    passenger_count: usize,
    rng:             &mut DemandRng,
) -> SimResult<Comparison> {
    building.validate()?;
    let demand = generate(rng, &building, passenger_count)?;
    compare(building, &demand)
}

fn simulate_with<D: Dispatcher>(dispatcher: D, building: Building, passengers: &[Passenger]) -> SimResult<u64> {
    SimBuilder::new(building, dispatcher)
        .passengers(passengers.to_vec())
        .build()?
        .run(&mut NoopObserver)
}
