//! Translation fitter: weighted mean displacement.

use super::{require_min, weighted_centroids};
use crate::core::Fitter;
use crate::error::FitError;
use crate::models::{PointMatch, TranslationModel};

/// Fits a [`TranslationModel`] as the weighted mean of `p2 - p1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TranslationFitter;

impl<const D: usize> Fitter<TranslationModel<D>, PointMatch<D>> for TranslationFitter {
    fn fit(
        &self,
        function: &mut TranslationModel<D>,
        fitables: &[&PointMatch<D>],
    ) -> Result<(), FitError> {
        require_min(function, fitables)?;
        let (pc, qc) = weighted_centroids(fitables)?;
        function.translation = qc - pc;
        Ok(())
    }
}
