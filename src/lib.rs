#![doc = include_str!("../README.md")]

pub mod config;
pub use config::{DEFAULT_LIKELIHOOD_OVERSAMPLING, DEFAULT_SYNTHESIS_OVERSAMPLING, ModelConfig};

mod data;
pub use data::{DataSample, Observation};

mod error;
pub use error::{ModelError, ObservationError, SamplerError};

mod float_trait;
pub use float_trait::Float;

mod likelihood;
pub use likelihood::{HotColdPosterior, ln_likelihood};

pub mod model;
pub use model::{
    DistortionKind, DistortionParams, EclipseParams, HotColdParams, NPARAMS, distort_times,
    eclipse_deficit, eclipse_deficits, integrate_deficits, model_fluxes, time_delays,
};

mod observe;
pub use observe::{observe, observe_record};

pub mod prior;
pub use prior::{LnPrior, LnPrior1D};

pub mod sampler;
pub use sampler::{
    Chain, EmceeSampler, Ensemble, LnProbEvaluator, McmcSampler, evaluate_ensemble,
};

mod types;

pub use ndarray;
