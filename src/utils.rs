//! Miscellaneous utilities: the seedable index generator behind the uniform
//! sampler and helpers for turning inlier positions back into samples.

use rand::distributions::Uniform;
use rand::prelude::*;

/// Seed used when no explicit seed is given. Runs with identical input order
/// and settings are reproducible across processes.
pub const DEFAULT_SEED: u64 = 69997;

/// Uniform index generator over a seedable `StdRng`.
pub struct UniformRandomGenerator {
    rng: StdRng,
}

impl Default for UniformRandomGenerator {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl UniformRandomGenerator {
    /// Construct with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Construct from OS entropy; results are not reproducible.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fill `out` with pairwise distinct values from `[min, max]`, redrawing
    /// on collision.
    ///
    /// Returns `false` without touching `out` if the range holds fewer values
    /// than requested.
    pub fn gen_unique(&mut self, out: &mut [usize], min: usize, max: usize) -> bool {
        if max < min || (max - min).saturating_add(1) < out.len() {
            return false;
        }
        let dist = Uniform::new_inclusive(min, max);
        for i in 0..out.len() {
            loop {
                let candidate = self.rng.sample(&dist);
                if out[..i].iter().all(|&v| v != candidate) {
                    out[i] = candidate;
                    break;
                }
            }
        }
        true
    }
}

/// Collect references to the samples at `positions`.
pub fn gather<'a, P>(candidates: &'a [P], positions: &[usize]) -> Vec<&'a P> {
    positions.iter().map(|&i| &candidates[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_samples_within_bounds() {
        let mut rng = UniformRandomGenerator::from_seed(1234);
        let mut buf = [0usize; 5];
        assert!(rng.gen_unique(&mut buf, 0, 10));

        assert!(buf.iter().all(|&v| v <= 10));
        for i in 0..buf.len() {
            for j in (i + 1)..buf.len() {
                assert_ne!(buf[i], buf[j]);
            }
        }
    }

    #[test]
    fn unique_samples_cover_exhausted_range() {
        let mut rng = UniformRandomGenerator::from_seed(7);
        let mut buf = [0usize; 4];
        assert!(rng.gen_unique(&mut buf, 0, 3));
        buf.sort_unstable();
        assert_eq!(buf, [0, 1, 2, 3]);
    }

    #[test]
    fn refuses_range_smaller_than_request() {
        let mut rng = UniformRandomGenerator::default();
        let mut buf = [usize::MAX; 3];
        assert!(!rng.gen_unique(&mut buf, 0, 1));
        assert_eq!(buf, [usize::MAX; 3]);
    }

    #[test]
    fn deterministic_with_same_seed() {
        let mut rng1 = UniformRandomGenerator::from_seed(42);
        let mut rng2 = UniformRandomGenerator::from_seed(42);
        let (mut a1, mut a2) = ([0usize; 3], [0usize; 3]);

        for _ in 0..10 {
            assert!(rng1.gen_unique(&mut a1, 0, 100));
            assert!(rng2.gen_unique(&mut a2, 0, 100));
            assert_eq!(a1, a2);
        }
    }

    #[test]
    fn single_value_range() {
        let mut rng = UniformRandomGenerator::from_seed(1);
        let mut buf = [9usize; 1];
        assert!(rng.gen_unique(&mut buf, 4, 4));
        assert_eq!(buf, [4]);
    }

    #[test]
    fn gather_follows_positions() {
        let values = ["a", "b", "c", "d"];
        assert_eq!(gather(&values, &[3, 0, 3]), vec![&"d", &"a", &"d"]);
    }
}
