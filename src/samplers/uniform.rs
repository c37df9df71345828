//! Uniform random sampler drawing minimal samples without replacement.

use crate::core::Sampler;
use crate::utils::{UniformRandomGenerator, DEFAULT_SEED};

/// Uniform random sampler drawing minimal samples without replacement.
///
/// Each position is picked uniformly from the whole candidate range and
/// redrawn if it is already part of the current sample.
pub struct UniformRandomSampler {
    rng: UniformRandomGenerator,
}

impl Default for UniformRandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandomSampler {
    /// Construct a sampler seeded with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }

    /// Construct a sampler from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
        }
    }

    /// Construct a sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: UniformRandomGenerator::from_entropy(),
        }
    }
}

impl Sampler for UniformRandomSampler {
    fn sample(&mut self, population: usize, sample_size: usize, out_indices: &mut [usize]) -> bool {
        if sample_size > population || out_indices.len() < sample_size {
            return false;
        }
        if sample_size == 0 {
            return true;
        }
        self.rng
            .gen_unique(&mut out_indices[..sample_size], 0, population - 1)
    }
}
