//! # Consensus - generic RANSAC model fitting
//!
//! `consensus` fits a parametric model to a set of noisy samples while
//! tolerating an unknown fraction of outliers. The engine knows nothing about
//! geometry: any type implementing [`Function`] (the model) together with a
//! [`Fitter`] (the solver) gets random sample consensus with iterative inlier
//! refinement for free.
//!
//! ## Quick Start
//!
//! ```rust
//! use consensus::{estimate_translation_3d, PointMatch, RansacSettings};
//! use nalgebra::Point3;
//!
//! let matches: Vec<_> = (0..10)
//!     .map(|i| {
//!         let p = Point3::new(i as f64, i as f64, i as f64);
//!         PointMatch::new(p, Point3::new(p.x + 1.0, p.y + 2.0, p.z + 3.0))
//!     })
//!     .collect();
//!
//! let settings = RansacSettings::new(10, 0.001, 0.3);
//! let result = estimate_translation_3d(&matches, &settings).unwrap().unwrap();
//! assert_eq!(result.inliers.len(), 10);
//! ```
//!
//! ## Extending the Library
//!
//! Implement [`Function`] for your model type and [`Fitter`] for its solver:
//!
//! ```rust
//! use consensus::{FitError, Fitter, Function, RansacSettings, UniformRandomSampler, WORST_COST};
//!
//! // Every sample should equal `value`.
//! #[derive(Clone)]
//! struct Level {
//!     value: f64,
//!     cost: f64,
//! }
//!
//! impl Function<f64> for Level {
//!     fn cost(&self) -> f64 {
//!         self.cost
//!     }
//!     fn set_cost(&mut self, cost: f64) {
//!         self.cost = cost;
//!     }
//!     fn min_num_fitables(&self) -> usize {
//!         1
//!     }
//!     fn distance(&self, sample: &f64) -> f64 {
//!         (sample - self.value).abs()
//!     }
//! }
//!
//! struct LevelFitter;
//!
//! impl Fitter<Level, f64> for LevelFitter {
//!     fn fit(&self, level: &mut Level, samples: &[&f64]) -> Result<(), FitError> {
//!         if samples.is_empty() {
//!             return Err(FitError::not_enough(0, 1));
//!         }
//!         level.value = samples.iter().copied().sum::<f64>() / samples.len() as f64;
//!         Ok(())
//!     }
//! }
//!
//! let samples = [2.0, 2.1, 1.9, 40.0, 2.0, -7.0];
//! let mut level = Level { value: 0.0, cost: WORST_COST };
//! let mut inliers = Vec::new();
//! let found = level
//!     .ransac(
//!         &LevelFitter,
//!         &samples,
//!         &mut inliers,
//!         &mut UniformRandomSampler::new(),
//!         &RansacSettings::new(20, 0.5, 0.5),
//!     )
//!     .unwrap();
//! assert!(found);
//! assert_eq!(inliers, vec![0, 1, 2, 4]);
//! ```
//!
//! ## Modules
//!
//! - **[`core`](crate::core)**: the `Function`, `Fitter` and `Sampler` contracts
//! - **[`ransac`]**: the consensus search and its `Ransac` context
//! - **[`scoring`]**: inlier classification and cost
//! - **[`samplers`]**: minimal-sample strategies
//! - **[`settings`]**: search configuration
//! - **[`models`]**, **[`estimators`]**: reference model families and fitters
//! - **[`api`]**: one-call estimation helpers

pub mod api;
pub mod core;
pub mod error;
pub mod estimators;
pub mod models;
pub mod ransac;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use api::{
    estimate, estimate_affine_2d, estimate_rigid_2d, estimate_translation_3d, EstimationResult,
};
pub use crate::core::{Fitter, Function, Sampler, WORST_COST};
pub use error::{EstimationError, FitError, SettingsError};
pub use estimators::{AffineFitter2D, RigidFitter2D, TranslationFitter};
pub use models::{
    AffineModel2D, PointMatch, PointMatch2D, PointMatch3D, RigidModel2D, TranslationModel,
    TranslationModel2D, TranslationModel3D,
};
pub use ransac::{Ransac, RansacReport};
pub use samplers::UniformRandomSampler;
pub use settings::RansacSettings;
pub use utils::DEFAULT_SEED;
