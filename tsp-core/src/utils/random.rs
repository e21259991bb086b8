#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::{Mutex, PoisonError};

/// Provides the way to use randomized values in generic way.
///
/// All stochastic decisions of the optimizers go through this trait, so a deterministic
/// implementation can be injected to reproduce a run.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool {
        if probability <= 0. {
            false
        } else if probability >= 1. {
            true
        } else {
            self.uniform_real(0., 1.) < probability
        }
    }

    /// Returns an index from the collection with probability proportional to its weight (roulette
    /// wheel selection). Items with zero, negative or non-finite weight are never returned unless
    /// there is no item with positive weight at all: then the index is chosen uniformly.
    fn weighted(&self, weights: &[Float]) -> usize {
        assert!(!weights.is_empty());

        let is_valid = |weight: Float| weight.is_finite() && weight > 0.;
        let total = weights.iter().copied().filter(|&weight| is_valid(weight)).sum::<Float>();

        if !(total.is_finite() && total > 0.) {
            return self.uniform_int(0, weights.len() as i32 - 1) as usize;
        }

        let threshold = self.uniform_real(0., total);
        let mut cumulative = 0.;
        let mut last_valid = 0;

        for (idx, &weight) in weights.iter().enumerate().filter(|(_, weight)| is_valid(**weight)) {
            cumulative += weight;
            last_valid = idx;

            if threshold < cumulative {
                return idx;
            }
        }

        // NOTE accumulated rounding error can leave the threshold slightly above the last sum
        last_valid
    }

    /// Returns RNG which can be used with `rand` crate facilities (e.g. shuffling).
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation backed by a small, fast generator.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates an instance which produces the same sequence of values for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        action(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.with_rng(|rng| rng.gen_bool(probability.clamp(0., 1.)))
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::seed_from_u64(self.with_rng(|rng| rng.next_u64()))
    }
}

/// Specifies underlying random generator type. It is an owned generator forked from the source
/// random, so it can be moved to another thread.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: SmallRng,
}

impl SeedableRng for RandomGen {
    type Seed = <SmallRng as SeedableRng>::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self { rng: SmallRng::from_seed(seed) }
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
