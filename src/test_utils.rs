//! Toy one-dimensional model shared by the unit tests.

use std::cell::Cell;

use crate::core::{Fitter, Function, Sampler, WORST_COST};
use crate::error::FitError;

/// Constant model: every sample should equal `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Offset {
    pub value: f64,
    pub min: usize,
    cost: f64,
}

impl Default for Offset {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Offset {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            min: 1,
            cost: WORST_COST,
        }
    }

    pub fn with_min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }
}

impl Function<f64> for Offset {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    fn min_num_fitables(&self) -> usize {
        self.min
    }

    fn distance(&self, fitable: &f64) -> f64 {
        (fitable - self.value).abs()
    }
}

/// Mean of the samples. NaN samples are ill-defined.
pub struct MeanFitter;

impl Fitter<Offset, f64> for MeanFitter {
    fn fit(&self, function: &mut Offset, fitables: &[&f64]) -> Result<(), FitError> {
        if fitables.len() < function.min_num_fitables() || fitables.is_empty() {
            return Err(FitError::not_enough(
                fitables.len(),
                function.min_num_fitables().max(1),
            ));
        }
        if fitables.iter().any(|v| v.is_nan()) {
            return Err(FitError::ill_defined("NaN sample"));
        }
        function.value = fitables.iter().copied().sum::<f64>() / fitables.len() as f64;
        Ok(())
    }
}

/// Always degenerate; counts how often it was asked.
#[derive(Default)]
pub struct DegenerateFitter {
    pub calls: Cell<usize>,
}

impl Fitter<Offset, f64> for DegenerateFitter {
    fn fit(&self, _function: &mut Offset, _fitables: &[&f64]) -> Result<(), FitError> {
        self.calls.set(self.calls.get() + 1);
        Err(FitError::ill_defined("always degenerate"))
    }
}

/// Fits minimal sets like [`MeanFitter`] but declares every larger set
/// ill-defined, so every trial dies in refinement.
pub struct MinimalOnlyFitter;

impl Fitter<Offset, f64> for MinimalOnlyFitter {
    fn fit(&self, function: &mut Offset, fitables: &[&f64]) -> Result<(), FitError> {
        if fitables.len() > function.min_num_fitables() {
            return Err(FitError::ill_defined("refit refused"));
        }
        MeanFitter.fit(function, fitables)
    }
}

/// Always draws the leading positions `0..sample_size`.
pub struct LeadingSampler;

impl Sampler for LeadingSampler {
    fn sample(&mut self, population: usize, sample_size: usize, out_indices: &mut [usize]) -> bool {
        if sample_size > population || out_indices.len() < sample_size {
            return false;
        }
        for (i, slot) in out_indices[..sample_size].iter_mut().enumerate() {
            *slot = i;
        }
        true
    }
}
