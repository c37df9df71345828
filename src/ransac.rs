//! Random sample consensus with iterative inlier refinement.
//!
//! Each trial fits a working copy of the model to a minimal random sample,
//! tests it against all candidates and then re-fits it to its own inliers for
//! as long as the inlier set keeps growing. The hypothesis with the lowest
//! cost over the whole trial budget wins.

use log::{debug, trace};

use crate::core::{Fitter, Function, Sampler, WORST_COST};
use crate::error::FitError;
use crate::samplers::UniformRandomSampler;
use crate::settings::RansacSettings;
use crate::utils::gather;

/// Summary of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RansacReport {
    /// Whether any trial was accepted.
    pub found: bool,
    /// Trials consumed; always equals the configured budget.
    pub trials: usize,
    /// Trials voided because a sample could not be drawn or fitted.
    pub degenerate: usize,
    /// Trials that replaced the best hypothesis so far.
    pub accepted: usize,
    /// Re-fits on inlier sets, summed over all trials.
    pub refinements: usize,
}

/// Outcome of a single trial.
enum Trial {
    /// The hypothesis survived refinement; `good` is the last test result.
    Evaluated { good: bool },
    /// A fit failed; the hypothesis must not be compared.
    Abandoned(FitError),
    /// The sampler could not draw a minimal set.
    NoSample,
}

/// Run one trial on `trial`, leaving its inliers in `tmp_inliers`.
#[allow(clippy::too_many_arguments)]
fn run_trial<F, P, Fi, S>(
    trial: &mut F,
    fitter: &Fi,
    candidates: &[P],
    sampler: &mut S,
    sample: &mut [usize],
    tmp_inliers: &mut Vec<usize>,
    settings: &RansacSettings,
    min_num_inliers: usize,
    refinements: &mut usize,
) -> Trial
where
    F: Function<P>,
    Fi: Fitter<F, P> + ?Sized,
    S: Sampler + ?Sized,
{
    if !sampler.sample(candidates.len(), sample.len(), sample) {
        return Trial::NoSample;
    }

    if let Err(e) = fitter.fit(trial, &gather(candidates, sample)) {
        return Trial::Abandoned(e);
    }

    let mut num_inliers = 0;
    let mut good = trial.test(
        candidates,
        tmp_inliers,
        settings.epsilon,
        settings.min_inlier_ratio,
    );
    while good && num_inliers < tmp_inliers.len() {
        num_inliers = tmp_inliers.len();
        *refinements += 1;
        if let Err(e) = fitter.fit(trial, &gather(candidates, tmp_inliers)) {
            return Trial::Abandoned(e);
        }
        good = trial.test_with_min(
            candidates,
            tmp_inliers,
            settings.epsilon,
            settings.min_inlier_ratio,
            min_num_inliers,
        );
    }

    Trial::Evaluated { good }
}

/// Search `candidates` for the model explaining most of them.
///
/// See [`Function::ransac`]. Only a candidate set smaller than the model's
/// minimal sample count is an error; every failure inside a trial voids
/// just that trial.
pub fn ransac<F, P, Fi, S>(
    model: &mut F,
    fitter: &Fi,
    candidates: &[P],
    inliers: &mut Vec<usize>,
    sampler: &mut S,
    settings: &RansacSettings,
) -> Result<RansacReport, FitError>
where
    F: Function<P>,
    Fi: Fitter<F, P> + ?Sized,
    S: Sampler + ?Sized,
{
    let min_num_fitables = model.min_num_fitables();
    if candidates.len() < min_num_fitables {
        debug!(
            "ransac: {} candidates, model needs {}",
            candidates.len(),
            min_num_fitables
        );
        return Err(FitError::not_enough(candidates.len(), min_num_fitables));
    }
    let min_num_inliers = settings.min_num_inliers_or(min_num_fitables);

    let mut best = model.copy();
    best.set_cost(WORST_COST);
    let mut trial = model.copy();

    let mut sample = vec![0usize; min_num_fitables];
    let mut tmp_inliers = Vec::with_capacity(candidates.len());
    let mut report = RansacReport::default();

    inliers.clear();

    while report.trials < settings.iterations {
        let outcome = run_trial(
            &mut trial,
            fitter,
            candidates,
            sampler,
            &mut sample,
            &mut tmp_inliers,
            settings,
            min_num_inliers,
            &mut report.refinements,
        );
        report.trials += 1;

        match outcome {
            Trial::NoSample => {
                report.degenerate += 1;
                trace!("trial {}: no sample drawn", report.trials);
            }
            Trial::Abandoned(e) => {
                report.degenerate += 1;
                trace!("trial {}: abandoned ({e})", report.trials);
            }
            Trial::Evaluated { good } => {
                if good && trial.better_than(&best) && tmp_inliers.len() >= min_num_inliers {
                    trace!(
                        "trial {}: accepted, {} inliers, cost {:.4}",
                        report.trials,
                        tmp_inliers.len(),
                        trial.cost()
                    );
                    best.set(&trial);
                    inliers.clone_from(&tmp_inliers);
                    report.accepted += 1;
                }
            }
        }
    }

    report.found = report.accepted > 0;
    if report.found {
        model.set(&best);
    }

    debug!(
        "ransac: {} trials, {} degenerate, {} accepted, {} inliers of {}",
        report.trials,
        report.degenerate,
        report.accepted,
        inliers.len(),
        candidates.len()
    );

    Ok(report)
}

/// Search context owning the settings and the random source, so repeated
/// searches draw from one continuing random stream.
pub struct Ransac<S: Sampler = UniformRandomSampler> {
    pub settings: RansacSettings,
    pub sampler: S,
    /// Report of the most recent search.
    pub last_report: Option<RansacReport>,
}

impl Default for Ransac<UniformRandomSampler> {
    fn default() -> Self {
        Self::new(RansacSettings::default())
    }
}

impl Ransac<UniformRandomSampler> {
    /// Context with a default-seeded uniform sampler.
    pub fn new(settings: RansacSettings) -> Self {
        Self::with_sampler(settings, UniformRandomSampler::new())
    }
}

impl<S: Sampler> Ransac<S> {
    pub fn with_sampler(settings: RansacSettings, sampler: S) -> Self {
        Self {
            settings,
            sampler,
            last_report: None,
        }
    }

    /// Run one search; see [`ransac`].
    pub fn run<F, P, Fi>(
        &mut self,
        model: &mut F,
        fitter: &Fi,
        candidates: &[P],
        inliers: &mut Vec<usize>,
    ) -> Result<RansacReport, FitError>
    where
        F: Function<P>,
        Fi: Fitter<F, P> + ?Sized,
    {
        let report = ransac(
            model,
            fitter,
            candidates,
            inliers,
            &mut self.sampler,
            &self.settings,
        )?;
        self.last_report = Some(report);
        Ok(report)
    }
}
