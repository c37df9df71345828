//! Error types shared by fitters and the consensus search.

use thiserror::Error;

/// Failure to fit a model to a set of fitables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Fewer samples than the model needs to be determined at all.
    #[error(
        "{actual} data points are not enough to solve the function, at least {required} data points required"
    )]
    NotEnoughDataPoints { actual: usize, required: usize },

    /// The samples are numerically degenerate for this model family
    /// (coincident or collinear points, singular system, zero weight).
    #[error("ill-defined data points: {0}")]
    IllDefinedDataPoints(String),
}

impl FitError {
    pub fn not_enough(actual: usize, required: usize) -> Self {
        FitError::NotEnoughDataPoints { actual, required }
    }

    pub fn ill_defined(reason: impl Into<String>) -> Self {
        FitError::IllDefinedDataPoints(reason.into())
    }
}

/// Rejected search configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("min_inlier_ratio must lie in [0, 1], got {0}")]
    InlierRatioOutOfRange(f64),

    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
}

/// Error returned by the high-level estimation helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
