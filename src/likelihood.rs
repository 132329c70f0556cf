use crate::config::ModelConfig;
use crate::data::Observation;
use crate::error::ModelError;
use crate::float_trait::Float;
use crate::model::{DistortionKind, ExposureGrid, HotColdParams, NPARAMS};
use crate::prior::{LnPrior, LnPriorTrait};
use crate::sampler::LnProbEvaluator;

use ndarray::Zip;

fn ln_likelihood_with_grid<T: Float>(
    observation: &Observation<T>,
    grid: &ExposureGrid<T>,
    params: &HotColdParams<T>,
    kind: DistortionKind,
) -> T {
    let chi2 = Zip::from(observation.t())
        .and(observation.flux())
        .and(observation.ivar())
        .fold(T::zero(), |chi2, &t, &flux, &ivar| {
            let residual = flux - (T::one() - grid.mean_deficit(t, params, kind));
            chi2 + ivar * residual * residual
        });
    -T::half() * chi2
}

/// Gaussian log-likelihood of the observation given the hot-cold model
///
/// `-chi^2 / 2` with inverse variances as weights, the normalisation constant is omitted.
/// Model fluxes are exposure averages over `k` sub-samples, see
/// [integrate_deficits](crate::model::integrate_deficits).
pub fn ln_likelihood<T: Float>(
    observation: &Observation<T>,
    params: &HotColdParams<T>,
    k: usize,
    kind: DistortionKind,
) -> Result<T, ModelError> {
    let grid = ExposureGrid::new(observation.exptime(), k)?;
    Ok(ln_likelihood_with_grid(observation, &grid, params, kind))
}

/// Log-posterior of the hot-cold model for a fixed observation
///
/// Stateless after construction: every method is a pure function of the parameter vector, so
/// a single instance could be shared by all walkers of an ensemble sampler, including across
/// threads. Parameter vectors use the [HotColdParams] layout.
#[derive(Clone, Debug)]
pub struct HotColdPosterior<'a> {
    observation: Observation<'a, f64>,
    prior: LnPrior,
    config: ModelConfig,
    grid: ExposureGrid<f64>,
}

impl<'a> HotColdPosterior<'a> {
    /// Uses [ModelConfig::likelihood_oversampling] sub-samples per exposure
    pub fn new(
        observation: Observation<'a, f64>,
        prior: LnPrior,
        config: ModelConfig,
    ) -> Result<Self, ModelError> {
        let grid = ExposureGrid::new(observation.exptime(), config.likelihood_oversampling)?;
        Ok(Self {
            observation,
            prior,
            config,
            grid,
        })
    }

    /// Flat prior and default [ModelConfig]
    pub fn with_defaults(observation: Observation<'a, f64>) -> Result<Self, ModelError> {
        Self::new(observation, LnPrior::default(), ModelConfig::default())
    }

    #[inline]
    pub fn observation(&self) -> &Observation<'a, f64> {
        &self.observation
    }

    #[inline]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn ln_likelihood(&self, params: &[f64; NPARAMS]) -> f64 {
        ln_likelihood_with_grid(
            &self.observation,
            &self.grid,
            &HotColdParams::from_array(params),
            self.config.distortion,
        )
    }

    pub fn ln_prior(&self, params: &[f64; NPARAMS]) -> f64 {
        self.prior.ln_prior(params)
    }

    /// `ln_prior + ln_likelihood`, `-inf` without evaluating the likelihood when the prior is
    /// not finite
    pub fn ln_posterior(&self, params: &[f64; NPARAMS]) -> f64 {
        let ln_prior = self.ln_prior(params);
        if !ln_prior.is_finite() {
            return f64::NEG_INFINITY;
        }
        ln_prior + self.ln_likelihood(params)
    }
}

impl LnProbEvaluator<NPARAMS> for HotColdPosterior<'_> {
    fn ln_prob(&self, params: &[f64; NPARAMS]) -> f64 {
        self.ln_posterior(params)
    }
}
