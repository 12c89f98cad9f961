//! Plain data row types written by output backends.

use lift_dispatch::Policy;
use lift_sim::Series;

/// One series checkpoint: both policies' costs on a shared demand set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRow {
    pub passengers:    u64,
    pub baseline_cost: u64,
    pub adaptive_cost: u64,
}

/// One floor-to-floor move of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow {
    pub policy:     Policy,
    /// 1-based move number within the run.
    pub step:       u64,
    pub from_floor: u32,
    pub to_floor:   u32,
    /// Occupants carried during this move.
    pub load:       u32,
    /// Running cost after this move.
    pub cost:       u64,
}

/// Flatten a [`Series`] into rows, one per checkpoint.
pub fn series_rows(series: &Series) -> Vec<SeriesRow> {
    series
        .points
        .iter()
        .map(|p| SeriesRow {
            passengers:    p.passengers as u64,
            baseline_cost: p.baseline_cost,
            adaptive_cost: p.adaptive_cost,
        })
        .collect()
}
