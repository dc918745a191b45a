//! Seeded random source for the simulation
//!
//! Every random draw in a tick goes through one `SimRng`, so a fixed seed
//! plus identical inputs replays the same grid.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 12345;

#[derive(Clone, Debug)]
pub struct SimRng {
    inner: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Unweighted coin flip
    #[inline]
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// `true` with probability `p` (clamped to 0..=1)
    #[inline]
    pub fn chance(&mut self, p: f32) -> bool {
        if !(p > 0.0) {
            return false;
        }
        self.inner.gen_bool(f64::from(p.min(1.0)))
    }

    /// Uniform value in `[min, max)`; returns `min` for an empty range
    #[inline]
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if !(max > min) {
            return min;
        }
        self.inner.gen_range(min..max)
    }

    /// Uniform integer in `[min, max]`
    #[inline]
    pub fn int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
