//! Integration tests for lift-sim.

use lift_core::{Building, DemandRng, Floor, Passenger, PassengerId};
use lift_demand::generate;
use lift_dispatch::{NearestRequestDispatcher, Policy, SweepDispatcher};

use crate::{NoopObserver, RunObserver, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pax(id: u32, origin: u32, destination: u32) -> Passenger {
    Passenger::new(PassengerId(id), Floor(origin), Floor(destination))
}

fn building(floors: u32, capacity: u32) -> Building {
    Building::new(floors, capacity).unwrap()
}

/// Observer that records every move and checks the car never overfills.
#[derive(Default)]
struct Recorder {
    capacity:  usize,
    load:      usize,
    max_load:  usize,
    moves:     Vec<(u32, u32, usize)>,
    boarded:   Vec<PassengerId>,
    delivered: Vec<PassengerId>,
    final_cost: Option<u64>,
}

impl Recorder {
    fn new(capacity: u32) -> Self {
        Self { capacity: capacity as usize, ..Self::default() }
    }

    fn floors_visited(&self) -> Vec<u32> {
        let mut floors = vec![1];
        floors.extend(self.moves.iter().map(|&(_, to, _)| to));
        floors
    }
}

impl RunObserver for Recorder {
    fn on_alight(&mut self, _floor: Floor, passengers: &[Passenger]) {
        self.load -= passengers.len();
        self.delivered.extend(passengers.iter().map(|p| p.id));
    }

    fn on_board(&mut self, _floor: Floor, passengers: &[Passenger]) {
        self.load += passengers.len();
        assert!(self.load <= self.capacity, "car overfilled: {} > {}", self.load, self.capacity);
        self.max_load = self.max_load.max(self.load);
        self.boarded.extend(passengers.iter().map(|p| p.id));
    }

    fn on_move(&mut self, from: Floor, to: Floor, load: usize, _cost: u64) {
        assert_eq!(load, self.load);
        assert_eq!(from.distance(to), 1, "moves are single floors");
        self.moves.push((from.0, to.0, load));
    }

    fn on_run_end(&mut self, cost: u64) {
        self.final_cost = Some(cost);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_car_at_ground_floor() {
        let sim = SimBuilder::new(building(5, 2), SweepDispatcher)
            .passengers(vec![pax(0, 2, 4)])
            .build()
            .unwrap();
        assert_eq!(sim.car.floor, Floor(1));
        assert!(sim.car.is_empty());
        assert_eq!(sim.waiting.len(), 1);
        assert_eq!(sim.cost, 0);
    }

    #[test]
    fn one_floor_building_rejected() {
        let bad = Building { floor_count: 1, capacity: 3 };
        let result = SimBuilder::new(bad, SweepDispatcher).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn zero_capacity_rejected() {
        let bad = Building { floor_count: 4, capacity: 0 };
        let result = SimBuilder::new(bad, NearestRequestDispatcher).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn passenger_outside_building_rejected() {
        let result = SimBuilder::new(building(5, 2), SweepDispatcher)
            .passengers(vec![pax(0, 1, 6)])
            .build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let result = SimBuilder::new(building(5, 2), SweepDispatcher)
            .passengers(vec![pax(0, 1, 3), pax(0, 2, 4)])
            .build();
        assert!(matches!(result, Err(SimError::DuplicatePassenger(PassengerId(0)))));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn baseline_single_rider_sweeps_to_the_top() {
        let mut sim = SimBuilder::new(building(5, 3), SweepDispatcher)
            .passengers(vec![pax(0, 1, 5)])
            .build()
            .unwrap();
        let mut rec = Recorder::new(3);
        let cost = sim.run(&mut rec).unwrap();
        assert_eq!(cost, 4);
        assert_eq!(rec.final_cost, Some(4));
        // Floors 1..5 in order, then the reversal move off the roof (empty).
        assert_eq!(rec.floors_visited(), vec![1, 2, 3, 4, 5, 4]);
        assert_eq!(rec.delivered, vec![PassengerId(0)]);
    }

    #[test]
    fn adaptive_single_rider_goes_straight_up() {
        let mut sim = SimBuilder::new(building(5, 3), NearestRequestDispatcher)
            .passengers(vec![pax(0, 1, 5)])
            .build()
            .unwrap();
        let mut rec = Recorder::new(3);
        let cost = sim.run(&mut rec).unwrap();
        assert_eq!(cost, 4);
        assert_eq!(rec.floors_visited(), vec![1, 2, 3, 4, 5]);
        assert_eq!(sim.cycles, 1);
    }

    #[test]
    fn capacity_one_forces_sequential_service() {
        let demand = vec![pax(0, 1, 5), pax(1, 5, 1)];
        for policy in Policy::ALL {
            let first = crate::simulate(policy, building(5, 1), &demand).unwrap();
            let second = crate::simulate(policy, building(5, 1), &demand).unwrap();
            assert_eq!(first, second, "{policy} must be deterministic");
            assert_eq!(first, 8, "{policy}: up with one rider, down with the other");
        }
    }

    #[test]
    fn no_passengers_costs_nothing() {
        for policy in Policy::ALL {
            assert_eq!(crate::simulate(policy, building(3, 2), &[]).unwrap(), 0);
        }
        let mut sim = SimBuilder::new(building(3, 2), SweepDispatcher).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.cycles, 0);
        assert_eq!(sim.moves, 0);
    }

    #[test]
    fn crowded_floor_boards_latest_registration_first() {
        // Both wait at floor 2, capacity 1.  Contract: last registered first,
        // so passenger 1 rides before passenger 0.
        let demand = vec![pax(0, 2, 5), pax(1, 2, 4)];
        for policy in Policy::ALL {
            let mut rec = Recorder::new(1);
            match policy {
                Policy::Baseline => SimBuilder::new(building(5, 1), SweepDispatcher)
                    .passengers(demand.clone())
                    .build()
                    .unwrap()
                    .run(&mut rec)
                    .unwrap(),
                Policy::Adaptive => SimBuilder::new(building(5, 1), NearestRequestDispatcher)
                    .passengers(demand.clone())
                    .build()
                    .unwrap()
                    .run(&mut rec)
                    .unwrap(),
            };
            assert_eq!(rec.boarded, vec![PassengerId(1), PassengerId(0)], "{policy}");
        }
    }

    #[test]
    fn adaptive_picks_up_on_the_way() {
        // Rider 0 heads to 5; rider 1 waits at 3 and should board en route.
        let demand = vec![pax(0, 1, 5), pax(1, 3, 4)];
        let mut sim = SimBuilder::new(building(5, 2), NearestRequestDispatcher)
            .passengers(demand)
            .build()
            .unwrap();
        let mut rec = Recorder::new(2);
        let cost = sim.run(&mut rec).unwrap();
        // 1→3 one rider (2), 3→4 two riders (2), 4→5 one rider (1).
        assert_eq!(cost, 5);
        assert_eq!(rec.max_load, 2);
    }
}

// ── Properties over random demand ─────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn every_passenger_delivered_and_capacity_respected() {
        for seed in 0..25 {
            let mut rng = DemandRng::new(seed);
            let floors = 2 + (seed as u32 % 9);
            let capacity = 1 + (seed as u32 % 4);
            let b = building(floors, capacity);
            let demand = generate(&mut rng, &b, 40).unwrap();

            let mut sweep = SimBuilder::new(b, SweepDispatcher).passengers(demand.clone()).build().unwrap();
            let mut rec = Recorder::new(capacity);
            sweep.run(&mut rec).unwrap();
            assert!(sweep.is_finished());
            assert_eq!(sweep.delivered, demand.len());
            assert_eq!(rec.delivered.len(), demand.len());

            let mut nearest = SimBuilder::new(b, NearestRequestDispatcher).passengers(demand.clone()).build().unwrap();
            let mut rec = Recorder::new(capacity);
            nearest.run(&mut rec).unwrap();
            assert!(nearest.is_finished());
            assert_eq!(nearest.delivered, demand.len());
            assert!(rec.max_load <= capacity as usize);
        }
    }

    #[test]
    fn equal_demand_gives_equal_cost() {
        let b = building(12, 4);
        let a = generate(&mut DemandRng::new(5), &b, 80).unwrap();
        let c = generate(&mut DemandRng::new(5), &b, 80).unwrap();
        for policy in Policy::ALL {
            assert_eq!(
                crate::simulate(policy, b, &a).unwrap(),
                crate::simulate(policy, b, &c).unwrap(),
            );
        }
    }

    #[test]
    fn cost_at_least_sum_of_trip_lengths() {
        // Every rider is carried at least the distance of their own trip.
        let b = building(10, 3);
        let demand = generate(&mut DemandRng::new(11), &b, 60).unwrap();
        let floor: u64 = demand.iter().map(|p| p.trip_length() as u64).sum();
        let cmp = crate::compare(b, &demand).unwrap();
        assert!(cmp.baseline_cost >= floor);
        assert!(cmp.adaptive_cost >= floor);
    }

    #[test]
    fn adaptive_stays_within_a_sane_margin_of_baseline() {
        // Regression signal, not a law: the heuristic should not blow up
        // relative to the sweep on ordinary demand.
        let b = building(10, 5);
        for seed in 0..10 {
            let demand = generate(&mut DemandRng::new(seed), &b, 100).unwrap();
            let cmp = crate::compare(b, &demand).unwrap();
            assert!(
                cmp.adaptive_cost <= cmp.baseline_cost * 3,
                "seed {seed}: adaptive {} vs baseline {}",
                cmp.adaptive_cost,
                cmp.baseline_cost,
            );
        }
    }
}

// ── Invariant enforcement ─────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use lift_dispatch::{DispatchContext, Dispatcher, Leg};

    use super::*;
    use crate::SimError;

    /// Never moves: the run must stop instead of spinning.
    struct StayPut;

    impl Dispatcher for StayPut {
        fn name(&self) -> &'static str { "stay-put" }
        fn plan(&self, ctx: &DispatchContext<'_>) -> Leg {
            Leg::TravelTo(ctx.car.floor)
        }
    }

    /// Asks for a floor above the roof.
    struct Skyward;

    impl Dispatcher for Skyward {
        fn name(&self) -> &'static str { "skyward" }
        fn plan(&self, ctx: &DispatchContext<'_>) -> Leg {
            Leg::TravelTo(ctx.building.top().up())
        }
    }

    #[test]
    fn stalled_dispatcher_is_fatal() {
        let mut sim = SimBuilder::new(building(4, 2), StayPut)
            .passengers(vec![pax(0, 3, 1)])
            .build()
            .unwrap();
        assert!(matches!(sim.run(&mut NoopObserver), Err(SimError::Invariant(_))));
    }

    #[test]
    fn target_outside_building_is_fatal() {
        let mut sim = SimBuilder::new(building(4, 2), Skyward)
            .passengers(vec![pax(0, 1, 2)])
            .build()
            .unwrap();
        assert!(matches!(sim.run(&mut NoopObserver), Err(SimError::Invariant(_))));
    }

    #[test]
    fn run_cycles_steps_incrementally() {
        let mut sim = SimBuilder::new(building(5, 3), SweepDispatcher)
            .passengers(vec![pax(0, 1, 5)])
            .build()
            .unwrap();
        sim.run_cycles(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.car.floor, Floor(3));
        assert_eq!(sim.cost, 2);
        sim.run_cycles(100, &mut NoopObserver).unwrap();
        assert!(sim.is_finished());
        assert_eq!(sim.cost, 4);
    }
}

// ── Entry points and series ───────────────────────────────────────────────────

#[cfg(test)]
mod series_tests {
    use super::*;
    use crate::{SeriesRunner, SimError, checkpoints, run_comparison, run_series, run_simulation};

    #[test]
    fn checkpoints_evenly_spaced_and_rounded_down() {
        assert_eq!(checkpoints(100, 10), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(checkpoints(25, 10), vec![2, 5, 7, 10, 12, 15, 17, 20, 22, 25]);
        assert_eq!(checkpoints(3, 4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn series_has_one_point_per_checkpoint() {
        let series = run_series(building(8, 4), 50, 5, &mut DemandRng::new(1)).unwrap();
        assert_eq!(series.sizes(), vec![10, 20, 30, 40, 50]);
        assert_eq!(series.baseline_costs().len(), 5);
        assert_eq!(series.adaptive_costs().len(), 5);
    }

    #[test]
    fn series_reproducible_from_seed() {
        let b = building(8, 4);
        let a = run_series(b, 60, 4, &mut DemandRng::new(9)).unwrap();
        let c = run_series(b, 60, 4, &mut DemandRng::new(9)).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn thread_count_does_not_change_results() {
        let b = building(8, 4);
        let a = SeriesRunner::new(b).point_count(4).run(40, &mut DemandRng::new(3)).unwrap();
        let c = SeriesRunner::new(b)
            .point_count(4)
            .num_threads(Some(1))
            .run(40, &mut DemandRng::new(3))
            .unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn zero_points_rejected() {
        let result = run_series(building(8, 4), 50, 0, &mut DemandRng::new(1));
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn comparison_shares_one_demand_set() {
        let b = building(6, 2);
        let cmp = run_comparison(b, 30, &mut DemandRng::new(4)).unwrap();
        let demand = generate(&mut DemandRng::new(4), &b, 30).unwrap();
        assert_eq!(cmp.baseline_cost, crate::simulate(Policy::Baseline, b, &demand).unwrap());
        assert_eq!(cmp.adaptive_cost, crate::simulate(Policy::Adaptive, b, &demand).unwrap());
        assert_eq!(cmp.cost(Policy::Adaptive), cmp.adaptive_cost);
    }

    #[test]
    fn run_simulation_rejects_bad_config_before_drawing() {
        let mut rng = DemandRng::new(0);
        let bad = Building { floor_count: 1, capacity: 1 };
        assert!(run_simulation(Policy::Baseline, bad, 10, &mut rng).is_err());
        let bad = Building { floor_count: 5, capacity: 0 };
        assert!(run_simulation(Policy::Adaptive, bad, 10, &mut rng).is_err());
    }
}
