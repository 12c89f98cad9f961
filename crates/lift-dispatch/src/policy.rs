//! The two built-in policies, selectable by name.

use std::fmt;
use std::str::FromStr;

use crate::DispatchError;

/// Names one of the built-in dispatchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// [`SweepDispatcher`][crate::SweepDispatcher].
    Baseline,
    /// [`NearestRequestDispatcher`][crate::NearestRequestDispatcher].
    Adaptive,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Baseline, Policy::Adaptive];
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::Baseline => "baseline",
            Policy::Adaptive => "adaptive",
        })
    }
}

impl FromStr for Policy {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" | "sweep"   => Ok(Policy::Baseline),
            "adaptive" | "nearest" => Ok(Policy::Adaptive),
            other => Err(DispatchError::UnknownPolicy(other.to_owned())),
        }
    }
}
