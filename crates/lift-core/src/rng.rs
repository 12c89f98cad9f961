//! Deterministic RNG wrapper for demand generation.
//!
//! # Determinism strategy
//!
//! The outermost caller picks a seed (or draws one from the OS) and hands a
//! `DemandRng` down.  Nothing inside the dispatch logic consumes randomness,
//! so a fixed seed fixes the whole run.
//!
//! Series runs give every checkpoint its own child RNG:
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! Children are derived sequentially before any work is spread across
//! threads, so parallel and sequential series produce identical demand.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded source of randomness for passenger generation.
pub struct DemandRng(SmallRng);

impl DemandRng {
    pub fn new(seed: u64) -> Self {
        DemandRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the operating system.  Only the outermost caller should
    /// reach for this; library code takes a `DemandRng` parameter.
    pub fn from_entropy() -> Self {
        DemandRng(SmallRng::from_entropy())
    }

    /// Derive a child `DemandRng` with a different seed offset — used to
    /// seed one RNG per series checkpoint deterministically from the root.
    pub fn child(&mut self, offset: u64) -> DemandRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        DemandRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
