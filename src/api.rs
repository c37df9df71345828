//! High-level estimation helpers.
//!
//! These run the consensus search and then re-fit the winning model to all
//! of its inliers, which is how the search result is normally consumed.

use log::debug;

use crate::core::{Fitter, Function, Sampler};
use crate::error::EstimationError;
use crate::estimators::{AffineFitter2D, RigidFitter2D, TranslationFitter};
use crate::models::{
    AffineModel2D, PointMatch2D, PointMatch3D, RigidModel2D, TranslationModel3D,
};
use crate::ransac::{ransac, RansacReport};
use crate::samplers::UniformRandomSampler;
use crate::settings::RansacSettings;
use crate::utils::gather;

/// Result of a successful estimation.
#[derive(Debug, Clone)]
pub struct EstimationResult<M> {
    /// The estimated model, re-fitted to all inliers.
    pub model: M,
    /// Positions of the inliers in the candidate slice.
    pub inliers: Vec<usize>,
    /// Outlier fraction of the winning hypothesis.
    pub cost: f64,
    /// Diagnostics of the search.
    pub report: RansacReport,
}

/// Validate `settings`, search for `model` and polish the winner.
///
/// Returns `Ok(None)` when no hypothesis passed. If the final re-fit on the
/// inliers fails, the hypothesis from the search is returned unchanged.
pub fn estimate<F, P, Fi, S>(
    mut model: F,
    fitter: &Fi,
    candidates: &[P],
    sampler: &mut S,
    settings: &RansacSettings,
) -> Result<Option<EstimationResult<F>>, EstimationError>
where
    F: Function<P>,
    Fi: Fitter<F, P> + ?Sized,
    S: Sampler + ?Sized,
{
    settings.validate()?;

    let mut inliers = Vec::new();
    let report = ransac(&mut model, fitter, candidates, &mut inliers, sampler, settings)?;
    if !report.found {
        return Ok(None);
    }

    let cost = model.cost();
    let mut polished = model.copy();
    match fitter.fit(&mut polished, &gather(candidates, &inliers)) {
        Ok(()) => model.set(&polished),
        Err(e) => debug!("estimate: final fit on {} inliers failed: {e}", inliers.len()),
    }

    Ok(Some(EstimationResult {
        model,
        inliers,
        cost,
        report,
    }))
}

/// Estimate a 3D translation from point correspondences.
///
/// Each call draws from a fresh sampler seeded with
/// [`DEFAULT_SEED`](crate::utils::DEFAULT_SEED), so repeated calls on the
/// same input repeat the same trials. Use [`estimate`] with a long-lived
/// sampler to continue one random stream across calls.
pub fn estimate_translation_3d(
    matches: &[PointMatch3D],
    settings: &RansacSettings,
) -> Result<Option<EstimationResult<TranslationModel3D>>, EstimationError> {
    estimate(
        TranslationModel3D::default(),
        &TranslationFitter,
        matches,
        &mut UniformRandomSampler::new(),
        settings,
    )
}

/// Estimate a planar affine transform from point correspondences.
///
/// Each call draws from a fresh sampler seeded with
/// [`DEFAULT_SEED`](crate::utils::DEFAULT_SEED), so repeated calls on the
/// same input repeat the same trials. Use [`estimate`] with a long-lived
/// sampler to continue one random stream across calls.
pub fn estimate_affine_2d(
    matches: &[PointMatch2D],
    settings: &RansacSettings,
) -> Result<Option<EstimationResult<AffineModel2D>>, EstimationError> {
    estimate(
        AffineModel2D::default(),
        &AffineFitter2D,
        matches,
        &mut UniformRandomSampler::new(),
        settings,
    )
}

/// Estimate a planar rigid transform from point correspondences.
///
/// Each call draws from a fresh sampler seeded with
/// [`DEFAULT_SEED`](crate::utils::DEFAULT_SEED), so repeated calls on the
/// same input repeat the same trials. Use [`estimate`] with a long-lived
/// sampler to continue one random stream across calls.
pub fn estimate_rigid_2d(
    matches: &[PointMatch2D],
    settings: &RansacSettings,
) -> Result<Option<EstimationResult<RigidModel2D>>, EstimationError> {
    estimate(
        RigidModel2D::default(),
        &RigidFitter2D,
        matches,
        &mut UniformRandomSampler::new(),
        settings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FitError, SettingsError};
    use crate::test_utils::{MeanFitter, Offset};

    #[test]
    fn invalid_settings_are_rejected_before_searching() {
        let settings = RansacSettings::default().with_min_inlier_ratio(-0.1);
        let err = estimate(
            Offset::default(),
            &MeanFitter,
            &[1.0, 2.0],
            &mut UniformRandomSampler::new(),
            &settings,
        )
        .unwrap_err();
        assert_eq!(
            err,
            EstimationError::Settings(SettingsError::InlierRatioOutOfRange(-0.1))
        );
    }

    #[test]
    fn not_enough_candidates_propagates() {
        let empty: [f64; 0] = [];
        let err = estimate(
            Offset::default(),
            &MeanFitter,
            &empty,
            &mut UniformRandomSampler::new(),
            &RansacSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err, EstimationError::Fit(FitError::not_enough(0, 1)));
    }

    #[test]
    fn polishes_on_all_inliers() {
        let candidates = [1.0, 1.2, 0.8, 1.1, 0.9, 50.0, -50.0];
        let settings = RansacSettings::new(30, 0.5, 0.5);
        let result = estimate(
            Offset::default(),
            &MeanFitter,
            &candidates,
            &mut UniformRandomSampler::from_seed(4),
            &settings,
        )
        .unwrap()
        .expect("cluster should be found");

        assert_eq!(result.inliers, vec![0, 1, 2, 3, 4]);
        assert!((result.model.value - 1.0).abs() < 1e-12);
        assert_eq!(result.cost, 1.0 - 5.0 / 7.0);
        assert!(result.report.found);
    }

    #[test]
    fn wrappers_start_from_the_default_seed() {
        use crate::models::PointMatch;
        use nalgebra::Point2;

        let mut matches: Vec<PointMatch2D> = (0..8)
            .map(|i| {
                let p = Point2::new(i as f64, (i * i) as f64);
                PointMatch::new(p, Point2::new(p.x + 2.0, p.y - 1.0))
            })
            .collect();
        matches.push(PointMatch::new(Point2::new(3.0, 3.0), Point2::new(40.0, 7.0)));
        matches.push(PointMatch::new(Point2::new(-4.0, 1.0), Point2::new(0.0, -30.0)));
        let settings = RansacSettings::new(20, 0.01, 0.5);

        let first = estimate_rigid_2d(&matches, &settings).unwrap().unwrap();
        let second = estimate_rigid_2d(&matches, &settings).unwrap().unwrap();
        let explicit = estimate(
            RigidModel2D::default(),
            &RigidFitter2D,
            &matches,
            &mut UniformRandomSampler::new(),
            &settings,
        )
        .unwrap()
        .unwrap();

        assert_eq!(first.report, second.report);
        assert_eq!(first.report, explicit.report);
        assert_eq!(first.inliers, explicit.inliers);
        assert_eq!(first.model, explicit.model);
    }

    #[test]
    fn nothing_found_is_none() {
        let candidates = [0.0, 10.0, 20.0, 30.0];
        let settings = RansacSettings::new(10, 0.5, 0.5);
        let result = estimate(
            Offset::default(),
            &MeanFitter,
            &candidates,
            &mut UniformRandomSampler::new(),
            &settings,
        )
        .unwrap();
        assert!(result.is_none());
    }
}
