//! Planar affine fitter: weighted linear least squares.

use nalgebra::Matrix2;

use super::{require_min, weighted_centroids};
use crate::core::Fitter;
use crate::error::FitError;
use crate::models::{AffineModel2D, PointMatch2D};

/// Fits an [`AffineModel2D`] minimizing the weighted squared transfer error.
///
/// With centered coordinates `d = p1 - pc` and `e = p2 - qc` the linear part
/// solves `M * A = B` with `A = sum(w d d^T)` and `B = sum(w e d^T)`; the
/// translation then maps `pc` onto `qc`. Collinear or coincident sources make
/// `A` singular.
#[derive(Debug, Default, Clone, Copy)]
pub struct AffineFitter2D;

impl Fitter<AffineModel2D, PointMatch2D> for AffineFitter2D {
    fn fit(&self, function: &mut AffineModel2D, fitables: &[&PointMatch2D]) -> Result<(), FitError> {
        require_min(function, fitables)?;
        let (pc, qc) = weighted_centroids(fitables)?;

        let mut a = Matrix2::<f64>::zeros();
        let mut b = Matrix2::<f64>::zeros();
        for m in fitables {
            let d = m.p1 - pc;
            let e = m.p2 - qc;
            a += d * d.transpose() * m.weight;
            b += e * d.transpose() * m.weight;
        }

        let det = a.determinant();
        if det.abs() <= f64::EPSILON * a[(0, 0)] * a[(1, 1)] {
            return Err(FitError::ill_defined(
                "affine matrix not invertible, points are collinear or coincident",
            ));
        }
        let a_inv = a
            .try_inverse()
            .ok_or_else(|| FitError::ill_defined("affine matrix not invertible"))?;

        let matrix = b * a_inv;
        function.translation = qc.coords - matrix * pc.coords;
        function.matrix = matrix;
        Ok(())
    }
}
