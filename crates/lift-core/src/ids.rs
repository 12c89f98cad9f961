//! Passenger identifiers.

use std::fmt;

/// Registration index of a passenger within one demand set.
///
/// Assigned `0..n` in the order passengers were generated or loaded, so a
/// higher id always means "registered later".
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerId(pub u32);

impl PassengerId {
    /// Position in the demand set it was registered in.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "passenger #{}", self.0)
    }
}

impl TryFrom<usize> for PassengerId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        u32::try_from(n).map(PassengerId)
    }
}
