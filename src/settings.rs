//! Configuration for the consensus search.

use crate::error::SettingsError;

/// Parameters of one `ransac` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RansacSettings {
    /// Number of trials; every trial consumes one unit, including trials
    /// voided by degenerate samples.
    pub iterations: usize,
    /// Maximal per-sample distance for a sample to count as inlier (strict).
    pub epsilon: f64,
    /// Minimal ratio |inliers| / |candidates| (strict), in \[0, 1\].
    pub min_inlier_ratio: f64,
    /// Minimal absolute number of inliers for acceptance. `None` uses the
    /// model's minimal sample count.
    pub min_num_inliers: Option<usize>,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            iterations: 1000,
            epsilon: 1.0,
            min_inlier_ratio: 0.1,
            min_num_inliers: None,
        }
    }
}

impl RansacSettings {
    pub fn new(iterations: usize, epsilon: f64, min_inlier_ratio: f64) -> Self {
        Self {
            iterations,
            epsilon,
            min_inlier_ratio,
            min_num_inliers: None,
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_min_inlier_ratio(mut self, ratio: f64) -> Self {
        self.min_inlier_ratio = ratio;
        self
    }

    pub fn with_min_num_inliers(mut self, min_num_inliers: usize) -> Self {
        self.min_num_inliers = Some(min_num_inliers);
        self
    }

    /// Resolve the inlier floor against a model's minimal sample count.
    pub fn min_num_inliers_or(&self, min_num_fitables: usize) -> usize {
        self.min_num_inliers.unwrap_or(min_num_fitables)
    }

    /// Reject settings that can never produce a meaningful search.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.min_inlier_ratio) {
            return Err(SettingsError::InlierRatioOutOfRange(self.min_inlier_ratio));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SettingsError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let cfg = RansacSettings::default();
        assert_eq!(cfg.iterations, 1000);
        assert!((cfg.epsilon - 1.0).abs() < 1e-12);
        assert!((cfg.min_inlier_ratio - 0.1).abs() < 1e-12);
        assert_eq!(cfg.min_num_inliers, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn min_num_inliers_falls_back_to_model_minimum() {
        let cfg = RansacSettings::default();
        assert_eq!(cfg.min_num_inliers_or(3), 3);
        assert_eq!(cfg.with_min_num_inliers(7).min_num_inliers_or(3), 7);
    }

    #[test]
    fn validate_rejects_bad_ratio_and_epsilon() {
        let cfg = RansacSettings::new(10, 0.5, 1.5);
        assert_eq!(
            cfg.validate(),
            Err(SettingsError::InlierRatioOutOfRange(1.5))
        );

        let cfg = RansacSettings::default().with_epsilon(f64::NAN);
        assert!(matches!(cfg.validate(), Err(SettingsError::InvalidEpsilon(_))));

        let cfg = RansacSettings::default().with_epsilon(-1.0);
        assert_eq!(cfg.validate(), Err(SettingsError::InvalidEpsilon(-1.0)));
    }
}
