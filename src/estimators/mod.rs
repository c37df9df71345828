//! Fitters for the reference model families.
//!
//! All fitters are weighted least-squares solvers over [`PointMatch`]es and
//! leave the model untouched when they fail.

pub mod affine;
pub mod rigid;
pub mod translation;

pub use affine::AffineFitter2D;
pub use rigid::RigidFitter2D;
pub use translation::TranslationFitter;

use nalgebra::{Point, SVector};

use crate::core::Function;
use crate::error::FitError;
use crate::models::PointMatch;

/// Fail with `NotEnoughDataPoints` if `fitables` cannot determine `model`.
fn require_min<F, const D: usize>(model: &F, fitables: &[&PointMatch<D>]) -> Result<(), FitError>
where
    F: Function<PointMatch<D>>,
{
    let required = model.min_num_fitables();
    if fitables.len() < required {
        return Err(FitError::not_enough(fitables.len(), required));
    }
    Ok(())
}

/// Weighted centroids of the source and target points.
fn weighted_centroids<const D: usize>(
    fitables: &[&PointMatch<D>],
) -> Result<(Point<f64, D>, Point<f64, D>), FitError> {
    let mut pc = SVector::<f64, D>::zeros();
    let mut qc = SVector::<f64, D>::zeros();
    let mut ws = 0.0;
    for m in fitables {
        pc += m.p1.coords * m.weight;
        qc += m.p2.coords * m.weight;
        ws += m.weight;
    }
    if !ws.is_finite() || ws <= 0.0 {
        return Err(FitError::ill_defined(format!(
            "sum of weights must be positive, got {ws}"
        )));
    }
    Ok((Point::from(pc / ws), Point::from(qc / ws)))
}
