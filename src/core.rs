//! Core capability contracts of the consensus engine.
//!
//! - [`Function`]: a model that can measure its distance to a sample, carry a
//!   cost and compare itself to other instances. Its provided methods `test`
//!   and `ransac` give every model family robust fitting for free.
//! - [`Fitter`]: computes a model's parameters from a set of samples.
//! - [`Sampler`]: draws minimal sample sets as positions into the candidates.

use crate::error::FitError;
use crate::settings::RansacSettings;

/// Cost of a model that has not been scored yet. Any scored model is better.
pub const WORST_COST: f64 = f64::MAX;

/// A model over fitables of type `P`.
///
/// The implementing type is the model itself, so `copy`, `set` and
/// `better_than` work on concrete values and all dispatch stays static.
pub trait Function<P>: Clone {
    /// Quality of the last evaluation; smaller is better.
    fn cost(&self) -> f64;

    fn set_cost(&mut self, cost: f64);

    /// Minimal number of fitables needed to determine the model.
    fn min_num_fitables(&self) -> usize;

    /// Non-negative error of this model against one fitable. Must be pure.
    fn distance(&self, fitable: &P) -> f64;

    /// Independent clone of the full state, cost included.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Overwrite the full state, cost included, with `other`'s.
    fn set(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// `false` whenever this model's cost is negative, otherwise whether its
    /// cost is strictly smaller than `other`'s.
    fn better_than(&self, other: &Self) -> bool {
        if self.cost() < 0.0 {
            return false;
        }
        self.cost() < other.cost()
    }

    /// [`Function::test_with_min`] with the model's minimal sample count as
    /// the inlier floor.
    fn test(
        &mut self,
        candidates: &[P],
        inliers: &mut Vec<usize>,
        epsilon: f64,
        min_inlier_ratio: f64,
    ) -> bool {
        let min_num_inliers = self.min_num_fitables();
        self.test_with_min(candidates, inliers, epsilon, min_inlier_ratio, min_num_inliers)
    }

    /// Classify `candidates` against this model.
    ///
    /// Clears `inliers` and fills it with the positions of all candidates
    /// closer than `epsilon`. Sets `cost = 1 - |inliers| / |candidates|`
    /// whether or not the test passes. Returns whether at least
    /// `min_num_inliers` were found and their ratio exceeds
    /// `min_inlier_ratio`.
    fn test_with_min(
        &mut self,
        candidates: &[P],
        inliers: &mut Vec<usize>,
        epsilon: f64,
        min_inlier_ratio: f64,
        min_num_inliers: usize,
    ) -> bool {
        crate::scoring::test_inliers(
            self,
            candidates,
            inliers,
            epsilon,
            min_inlier_ratio,
            min_num_inliers,
        )
    }

    /// Robustly fit this model to `candidates`.
    ///
    /// On success the model is overwritten with the best hypothesis found,
    /// `inliers` holds the positions of its inliers and `Ok(true)` is
    /// returned. `Ok(false)` means no hypothesis passed; the model is left
    /// untouched and `inliers` empty. Fails only if there are fewer
    /// candidates than [`Function::min_num_fitables`].
    fn ransac<Fi, S>(
        &mut self,
        fitter: &Fi,
        candidates: &[P],
        inliers: &mut Vec<usize>,
        sampler: &mut S,
        settings: &RansacSettings,
    ) -> Result<bool, FitError>
    where
        Fi: Fitter<Self, P> + ?Sized,
        S: Sampler + ?Sized,
    {
        crate::ransac::ransac(self, fitter, candidates, inliers, sampler, settings)
            .map(|report| report.found)
    }
}

/// Computes a model's parameters from fitables.
pub trait Fitter<F: Function<P>, P> {
    /// Fit `function` to `fitables` in place.
    ///
    /// Fails with [`FitError::NotEnoughDataPoints`] when there are fewer
    /// fitables than the model needs and with
    /// [`FitError::IllDefinedDataPoints`] when they are degenerate. The
    /// model must be left untouched on failure.
    fn fit(&self, function: &mut F, fitables: &[&P]) -> Result<(), FitError>;
}

/// Sampler responsible for drawing minimal samples.
pub trait Sampler {
    /// Draw `sample_size` distinct positions in `0..population` into
    /// `out_indices`.
    ///
    /// Returns `false` if a valid sample could not be drawn.
    fn sample(&mut self, population: usize, sample_size: usize, out_indices: &mut [usize]) -> bool;
}
