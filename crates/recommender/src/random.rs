//! `rand`-backed random index source.

use crate::traits::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Adapts any `rand` RNG to [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source, for reproducible runs and tests
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index called with bound 0");
        if bound == 0 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }
}
