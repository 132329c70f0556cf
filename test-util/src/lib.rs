//! Fiducial hot-cold experiment: four years of 30-minute cadence photometry with 27-minute
//! exposures of an eclipsing binary on a five-year light-travel-time orbit.
//!
//! Primitive constants and arrays are safe to use from the unit tests of `stellar-clocks`
//! itself, typed helpers are for integration tests and benchmarks.

use ndarray::Array1;
use rand::prelude::*;
use stellar_clocks::{
    DistortionKind, Ensemble, HotColdParams, HotColdPosterior, LnPrior, ModelConfig, NPARAMS,
    Observation, observe_record,
};

/// Interval between consecutive exposures, days
pub const CADENCE: f64 = 1.0 / 48.0;

/// Exposure duration, days
pub const EXPTIME: f64 = 27.0 / 1440.0;

/// Per-sample flux noise
pub const SIGMA: f64 = 1e-5;

/// Survey duration, days
pub const SURVEY_DURATION: f64 = 4.1 * 365.0;

/// Eclipse period, offset, depth, duration, ingress/egress time, distortion period, cosine and
/// sine light-travel-time amplitudes
pub const TRUE_PARAMS: [f64; NPARAMS] = [
    6.5534,
    731.55,
    0.005235,
    0.32322,
    0.05232,
    365.25 * 5.0,
    2.34 / 86400.0,
    0.0,
];

/// Standard deviation of the initial walker ball around [TRUE_PARAMS]
pub const INITIAL_SCALE: [f64; NPARAMS] = [1e-5; NPARAMS];

/// Observation times `[begin, end)` on the survey cadence
pub fn times_between(begin: f64, end: f64) -> Vec<f64> {
    Array1::range(begin, end, CADENCE).to_vec()
}

/// Observation times of the whole survey
pub fn survey_times() -> Vec<f64> {
    times_between(0.0, SURVEY_DURATION)
}

pub fn true_params() -> HotColdParams<f64> {
    HotColdParams::from_array(&TRUE_PARAMS)
}

/// Seeded synthetic observation of the true model at times `t`
pub fn observation(t: Vec<f64>, seed: u64) -> Observation<'static, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    observe_record(
        t,
        EXPTIME,
        SIGMA,
        &true_params(),
        &ModelConfig::default(),
        &mut rng,
    )
    .unwrap()
}

/// Seeded synthetic observation of the whole survey
pub fn survey_observation(seed: u64) -> Observation<'static, f64> {
    observation(survey_times(), seed)
}

/// Flat-prior posterior of a seeded synthetic observation at times `t`
pub fn posterior(t: Vec<f64>, seed: u64, kind: DistortionKind) -> HotColdPosterior<'static> {
    let config = ModelConfig {
        distortion: kind,
        ..ModelConfig::default()
    };
    HotColdPosterior::new(observation(t, seed), LnPrior::none(), config).unwrap()
}

/// Walker ball of [INITIAL_SCALE] around [TRUE_PARAMS]
pub fn initial_ensemble(nwalkers: usize, seed: u64) -> Ensemble<NPARAMS> {
    let mut rng = StdRng::seed_from_u64(seed);
    Ensemble::perturbed(&TRUE_PARAMS, &INITIAL_SCALE, nwalkers, &mut rng)
}
