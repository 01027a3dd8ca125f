//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! The swarm owns a single `SmallRng` seeded from the run's master seed.
//! Randomness is consumed only at spawn time (initial position and heading),
//! in spawn order, so a seed plus a spawn sequence fully determines every
//! trajectory — the per-frame step is pure arithmetic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for boid construction.
///
/// Used only in single-threaded contexts; the step loop never touches it.
pub struct SwarmRng(SmallRng);

impl SwarmRng {
    pub fn new(seed: u64) -> Self {
        SwarmRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A uniform real in `[0, 1)` — the primitive the spawn logic scales by
    /// world width, height, and `2π`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }
}
