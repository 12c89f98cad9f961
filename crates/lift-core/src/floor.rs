//! Floor addresses and travel direction.

use std::fmt;

/// A floor address in `[1, floor_count]`.
///
/// Floors are 1-based: the ground floor is `Floor(1)`.  Range checks against
/// a concrete building live in [`Building::contains`][crate::Building::contains];
/// `Floor` itself is just a typed `u32`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    pub const GROUND: Floor = Floor(1);

    /// The floor directly above.
    #[inline]
    pub fn up(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below, never lower than [`Floor::GROUND`].
    #[inline]
    pub fn down(self) -> Floor {
        Floor(self.0.saturating_sub(1).max(1))
    }

    /// The neighbouring floor in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        match direction {
            Direction::Up   => self.up(),
            Direction::Down => self.down(),
        }
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl Default for Floor {
    fn default() -> Self {
        Floor::GROUND
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// Direction of travel for a passenger trip or a sweeping car.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    /// Direction of a trip from `origin` to `destination`.
    ///
    /// Anything that is not strictly upward counts as `Down`.
    #[inline]
    pub fn of_trip(origin: Floor, destination: Floor) -> Direction {
        if destination > origin { Direction::Up } else { Direction::Down }
    }

    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        })
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up"   => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other  => Err(format!("invalid direction {other:?}: expected \"up\" or \"down\"")),
        }
    }
}
