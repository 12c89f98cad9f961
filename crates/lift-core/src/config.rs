//! Building geometry and top-level run configuration.

use crate::{Floor, LiftError, LiftResult, Passenger};

// ── Building ──────────────────────────────────────────────────────────────────

/// A single-car building: how many floors, and how many people fit in the car.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Building {
    /// Highest floor.  Floors are numbered `1..=floor_count`.
    pub floor_count: u32,

    /// Maximum simultaneous occupants.
    pub capacity: u32,
}

impl Building {
    /// Build and validate in one step.
    pub fn new(floor_count: u32, capacity: u32) -> LiftResult<Self> {
        let building = Self { floor_count, capacity };
        building.validate()?;
        Ok(building)
    }

    /// Reject geometries no run can complete in.
    ///
    /// With fewer than two floors a destination different from the origin
    /// cannot be drawn; with zero capacity nobody ever boards.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count < 2 {
            return Err(LiftError::Config(format!(
                "floor_count must be at least 2, got {}",
                self.floor_count
            )));
        }
        if self.capacity < 1 {
            return Err(LiftError::Config("capacity must be at least 1, got 0".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn top(&self) -> Floor {
        Floor(self.floor_count)
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        (1..=self.floor_count).contains(&floor.0)
    }

    /// Check that `passenger` describes a real trip inside this building.
    pub fn check_passenger(&self, passenger: &Passenger) -> LiftResult<()> {
        for floor in [passenger.origin, passenger.destination] {
            if !self.contains(floor) {
                return Err(LiftError::FloorOutOfRange {
                    passenger:   passenger.id,
                    floor,
                    floor_count: self.floor_count,
                });
            }
        }
        if passenger.origin == passenger.destination {
            return Err(LiftError::ZeroLengthTrip(passenger.id));
        }
        Ok(())
    }
}

impl Default for Building {
    fn default() -> Self {
        Self { floor_count: 10, capacity: 8 }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for a comparison or series run.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the series runner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub building: Building,

    /// Master RNG seed.  The same seed always produces identical demand.
    pub seed: u64,

    /// Number of checkpoints in a comparison series.
    pub point_count: usize,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    pub fn validate(&self) -> LiftResult<()> {
        self.building.validate()?;
        if self.point_count < 1 {
            return Err(LiftError::Config("point_count must be at least 1, got 0".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            building:    Building::default(),
            seed:        42,
            point_count: 10,
            num_threads: None,
        }
    }
}
