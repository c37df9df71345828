//! Planar rigid fitter: closed-form weighted Procrustes.

use nalgebra::{Isometry2, Translation2, UnitComplex};

use super::{require_min, weighted_centroids};
use crate::core::Fitter;
use crate::error::FitError;
use crate::models::{PointMatch2D, RigidModel2D};

/// Fits a [`RigidModel2D`]; the rotation angle follows from the weighted
/// sums of dot and cross products of the centered point pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RigidFitter2D;

impl Fitter<RigidModel2D, PointMatch2D> for RigidFitter2D {
    fn fit(&self, function: &mut RigidModel2D, fitables: &[&PointMatch2D]) -> Result<(), FitError> {
        require_min(function, fitables)?;
        let (pc, qc) = weighted_centroids(fitables)?;

        let mut cos = 0.0;
        let mut sin = 0.0;
        let mut spread_p = 0.0;
        let mut spread_q = 0.0;
        for m in fitables {
            let d = m.p1 - pc;
            let e = m.p2 - qc;
            cos += m.weight * d.dot(&e);
            sin += m.weight * (d.x * e.y - d.y * e.x);
            spread_p += m.weight * d.norm_squared();
            spread_q += m.weight * e.norm_squared();
        }
        // |(cos, sin)| is bounded by sqrt(spread_p * spread_q).
        if cos.hypot(sin) <= f64::EPSILON * (spread_p * spread_q).sqrt() {
            return Err(FitError::ill_defined(
                "rotation undefined, source or target points coincide",
            ));
        }

        let rotation = UnitComplex::new(sin.atan2(cos));
        let translation = qc.coords - (rotation * pc).coords;
        function.isometry = Isometry2::from_parts(Translation2::from(translation), rotation);
        Ok(())
    }
}
