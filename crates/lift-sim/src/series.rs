//! Comparison series over increasing passenger counts.
//!
//! Checkpoint `i` (0-based) of `point_count` carries
//! `(i + 1) * max_passengers / point_count` passengers, rounded down.  Each
//! checkpoint draws its own demand set from a child RNG; sets are independent
//! draws, not nested subsets.

use log::info;

use lift_core::{Building, DemandRng, LiftError};
use lift_demand::generate;

use crate::{Comparison, SimResult, compare};

/// Passenger counts for a series of `point_count` checkpoints up to
/// `max_passengers`.
pub fn checkpoints(max_passengers: usize, point_count: usize) -> Vec<usize> {
    (1..=point_count)
        .map(|i| i * max_passengers / point_count)
        .collect()
}

/// One comparison per checkpoint, in ascending passenger order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Series {
    pub points: Vec<Comparison>,
}

impl Series {
    pub fn sizes(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.passengers).collect()
    }

    pub fn baseline_costs(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.baseline_cost).collect()
    }

    pub fn adaptive_costs(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.adaptive_cost).collect()
    }
}

/// Builds a [`Series`] for one building.
///
/// | Method              | Default                      |
/// |---------------------|------------------------------|
/// | `.point_count(n)`   | 10                           |
/// | `.num_threads(n)`   | `None` (all logical cores)   |
///
/// `num_threads` only matters with the `parallel` feature.
pub struct SeriesRunner {
    building:    Building,
    point_count: usize,
    num_threads: Option<usize>,
}

impl SeriesRunner {
    pub fn new(building: Building) -> Self {
        Self { building, point_count: 10, num_threads: None }
    }

    pub fn point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    pub fn num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Run both policies at every checkpoint up to `max_passengers`.
    pub fn run(&self, max_passengers: usize, rng: &mut DemandRng) -> SimResult<Series> {
        self.building.validate()?;
        if self.point_count < 1 {
            return Err(LiftError::Config("point_count must be at least 1, got 0".into()).into());
        }

        // Derive every child RNG up front so the demand drawn for a
        // checkpoint does not depend on execution order.
        let jobs: Vec<(usize, DemandRng)> = checkpoints(max_passengers, self.point_count)
            .into_iter()
            .enumerate()
            .map(|(i, size)| (size, rng.child(i as u64)))
            .collect();

        let points = self.execute(jobs)?;
        Ok(Series { points })
    }

    #[cfg(not(feature = "parallel"))]
    fn execute(&self, jobs: Vec<(usize, DemandRng)>) -> SimResult<Vec<Comparison>> {
        let total = jobs.len();
        jobs.into_iter()
            .enumerate()
            .map(|(i, (size, mut rng))| {
                let point = run_checkpoint(self.building, size, &mut rng)?;
                info!(
                    "checkpoint {}/{total}: {size} passengers, baseline {}, adaptive {}",
                    i + 1,
                    point.baseline_cost,
                    point.adaptive_cost,
                );
                Ok(point)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn execute(&self, jobs: Vec<(usize, DemandRng)>) -> SimResult<Vec<Comparison>> {
        use rayon::prelude::*;

        let building = self.building;
        let total = jobs.len();
        let work = move || {
            jobs.into_par_iter()
                .map(|(size, mut rng)| run_checkpoint(building, size, &mut rng))
                .collect::<SimResult<Vec<Comparison>>>()
        };

        let points = match self.num_threads {
            None => work()?,
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| crate::SimError::ThreadPool(e.to_string()))?
                .install(work)?,
        };

        for (i, point) in points.iter().enumerate() {
            info!(
                "checkpoint {}/{total}: {} passengers, baseline {}, adaptive {}",
                i + 1,
                point.passengers,
                point.baseline_cost,
                point.adaptive_cost,
            );
        }
        Ok(points)
    }
}

/// Run a series with the default runner settings.
pub fn run_series(
    building:       Building,
    max_passengers: usize,
    point_count:    usize,
    rng:            &mut DemandRng,
) -> SimResult<Series> {
    SeriesRunner::new(building).point_count(point_count).run(max_passengers, rng)
}

fn run_checkpoint(building: Building, size: usize, rng: &mut DemandRng) -> SimResult<Comparison> {
    let demand = generate(rng, &building, size)?;
    compare(building, &demand)
}
