//! Deterministic RNG wrapper using PCG32.
//!
//! Every component that consumes randomness takes a `&mut DeterministicRng`
//! so that a seed fully determines the generated surface.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Returns true with probability `1 / n`.
    ///
    /// `n == 0` never succeeds.
    #[inline]
    pub fn one_in(&mut self, n: u32) -> bool {
        n > 0 && self.inner.gen_range(0..n) == 0
    }

    /// Fair coin flip.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.inner.gen::<bool>()
    }
}
