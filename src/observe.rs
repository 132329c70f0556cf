use crate::config::ModelConfig;
use crate::data::Observation;
use crate::error::{ModelError, ObservationError};
use crate::float_trait::Float;
use crate::model::{DistortionKind, HotColdParams, model_fluxes};

use ndarray::{Array1, ArrayView1};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Synthetic noisy fluxes of the hot-cold model
///
/// Noiseless exposure-averaged fluxes (see [crate::model::integrate_deficits] for `exptime`, `k`
/// and `kind`) plus independent Gaussian noise of standard deviation `sigma`. All randomness
/// comes from `rng`, so a seeded generator reproduces the output exactly.
pub fn observe<T, R>(
    t: ArrayView1<T>,
    exptime: T,
    sigma: T,
    params: &HotColdParams<T>,
    k: usize,
    kind: DistortionKind,
    rng: &mut R,
) -> Result<Array1<T>, ModelError>
where
    T: Float,
    StandardNormal: Distribution<T>,
    R: Rng + ?Sized,
{
    let mut fluxes = model_fluxes(t, exptime, params, k, kind)?;
    fluxes.mapv_inplace(|flux| {
        let eps: T = rng.sample(StandardNormal);
        flux + sigma * eps
    });
    Ok(fluxes)
}

/// Synthetic [Observation] with inverse variances `sigma^-2`
///
/// Uses [ModelConfig::synthesis_oversampling] samples per exposure. `sigma` must be positive and
/// finite, `exptime` must be valid for [Observation::new].
pub fn observe_record<'a, T, R>(
    t: impl Into<Array1<T>>,
    exptime: T,
    sigma: T,
    params: &HotColdParams<T>,
    config: &ModelConfig,
    rng: &mut R,
) -> Result<Observation<'a, T>, ModelError>
where
    T: Float,
    StandardNormal: Distribution<T>,
    R: Rng + ?Sized,
{
    if !(sigma.is_finite() && sigma > T::zero()) {
        return Err(ObservationError::InvalidNoiseLevel.into());
    }
    let t = t.into();
    let fluxes = observe(
        t.view(),
        exptime,
        sigma,
        params,
        config.synthesis_oversampling,
        config.distortion,
        rng,
    )?;
    tracing::debug!(
        n = t.len(),
        k = config.synthesis_oversampling,
        sigma = %sigma,
        "synthetic observation generated"
    );
    let ivar = Array1::from_elem(t.len(), sigma.powi(-2));
    Ok(Observation::new(t, fluxes, ivar, exptime)?)
}
