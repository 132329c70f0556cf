//! Ensemble MCMC over the log-posterior
//!
//! The model side of the analysis is a [LnProbEvaluator]: a pure, thread-safe function of the
//! parameter vector. Samplers are plugged in through [McmcSampler], [EmceeSampler] is the
//! bundled affine-invariant implementation.
//!
//! # Parameter spaces
//!
//! Walkers are moved in a dimensionless space `u = (x - center) / scale` where `center` and
//! `scale` are the per-parameter mean and standard deviation of the initial ensemble. All
//! parameters are O(1) there, which keeps single-precision walker positions meaningful for
//! parameters like a 731.55-day offset perturbed at the `1e-5` level. The evaluator and the
//! returned [Chain] always see the physical parameters.

pub mod chain;
pub use chain::Chain;

pub mod emcee;
pub use emcee::EmceeSampler;

pub mod ensemble;
pub use ensemble::Ensemble;

pub mod evaluator;
pub use evaluator::{LnProbEvaluator, evaluate_ensemble};

use crate::error::SamplerError;

/// Ensemble sampler which draws from the distribution defined by a [LnProbEvaluator]
pub trait McmcSampler {
    /// Run the sampler starting from `initial` and return every visited position
    fn sample<E, const NPARAMS: usize>(
        &self,
        evaluator: &E,
        initial: &Ensemble<NPARAMS>,
    ) -> Result<Chain<NPARAMS>, SamplerError>
    where
        E: LnProbEvaluator<NPARAMS> + ?Sized;
}
