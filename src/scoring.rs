//! Inlier classification and cost scoring.
//!
//! A model's cost after a test is the outlier fraction
//! `1 - |inliers| / |candidates|`, so a model explaining more of the data is
//! better regardless of how well it fits its inliers.

use crate::core::Function;

/// Fraction of candidates that are inliers; zero for an empty candidate set.
pub fn inlier_ratio(num_inliers: usize, num_candidates: usize) -> f64 {
    if num_candidates == 0 {
        return 0.0;
    }
    num_inliers as f64 / num_candidates as f64
}

/// Classify `candidates` against `model`, store the cost and report whether
/// the model passes.
///
/// A candidate is an inlier iff its distance is strictly below `epsilon`.
/// The model passes iff `|inliers| >= min_num_inliers` and the inlier ratio
/// is strictly above `min_inlier_ratio`.
pub fn test_inliers<F, P>(
    model: &mut F,
    candidates: &[P],
    inliers: &mut Vec<usize>,
    epsilon: f64,
    min_inlier_ratio: f64,
    min_num_inliers: usize,
) -> bool
where
    F: Function<P>,
{
    inliers.clear();
    inliers.extend(
        candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| model.distance(candidate) < epsilon)
            .map(|(i, _)| i),
    );

    let ratio = inlier_ratio(inliers.len(), candidates.len());
    model.set_cost((1.0 - ratio).clamp(0.0, 1.0));

    inliers.len() >= min_num_inliers && ratio > min_inlier_ratio
}
