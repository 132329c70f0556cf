use crate::error::SamplerError;
use crate::sampler::{Chain, Ensemble, LnProbEvaluator, McmcSampler};

use emcee::{EnsembleSampler, Guess, Prob};
use macro_const::macro_const;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

macro_const! {
    const DOC: &str = r#"
Affine-invariant ensemble sampler of Goodman & Weare (2010)

Adapter to the [emcee](https://crates.io/crates/emcee) crate. `nwalkers` walkers perform
`niterations` stretch moves each, the random generator is seeded with `seed` so the chain is
reproducible. The number of walkers must be even and at least twice the number of parameters.

`emcee` works in single precision, so walkers move in the dimensionless space described in
[crate::sampler] and log-probabilities are rounded to `f32` before the acceptance test.
"#;
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename = "Emcee", default)]
pub struct EmceeSampler {
    pub nwalkers: usize,
    pub niterations: usize,
    pub seed: u64,
}

impl EmceeSampler {
    pub fn new(nwalkers: usize, niterations: usize, seed: u64) -> Self {
        Self {
            nwalkers,
            niterations,
            seed,
        }
    }

    #[inline]
    pub fn default_nwalkers() -> usize {
        16
    }

    #[inline]
    pub fn default_niterations() -> usize {
        512
    }

    #[inline]
    pub fn default_seed() -> u64 {
        0
    }

    pub fn doc() -> &'static str {
        DOC
    }

    fn check_nwalkers(&self, nparams: usize) -> Result<(), SamplerError> {
        let minimum = 2 * nparams;
        if self.nwalkers % 2 != 0 || self.nwalkers < minimum {
            return Err(SamplerError::InvalidWalkerNumber {
                actual: self.nwalkers,
                minimum,
            });
        }
        Ok(())
    }
}

impl Default for EmceeSampler {
    fn default() -> Self {
        Self::new(
            Self::default_nwalkers(),
            Self::default_niterations(),
            Self::default_seed(),
        )
    }
}

impl McmcSampler for EmceeSampler {
    fn sample<E, const NPARAMS: usize>(
        &self,
        evaluator: &E,
        initial: &Ensemble<NPARAMS>,
    ) -> Result<Chain<NPARAMS>, SamplerError>
    where
        E: LnProbEvaluator<NPARAMS> + ?Sized,
    {
        self.check_nwalkers(NPARAMS)?;
        if initial.len() != self.nwalkers {
            return Err(SamplerError::EnsembleSizeMismatch {
                expected: self.nwalkers,
                actual: initial.len(),
            });
        }
        let prob = DimensionlessLnProb::new(evaluator, initial)?;
        let guesses: Vec<_> = initial
            .walkers()
            .iter()
            .map(|x| prob.to_dimensionless(x))
            .collect();

        tracing::info!(
            nwalkers = self.nwalkers,
            niterations = self.niterations,
            nparams = NPARAMS,
            seed = self.seed,
            "starting emcee run"
        );

        let mut sampler = EnsembleSampler::new(self.nwalkers, NPARAMS, &prob)
            .map_err(|e| SamplerError::Emcee(e.to_string()))?;
        sampler.seed(&[self.seed as _]);

        let mut chain = Chain::new(self.nwalkers);
        let mut push_error = None;
        sampler
            .sample(&guesses, self.niterations, |step| {
                if push_error.is_some() {
                    return;
                }
                let positions: Vec<_> = step.pos.iter().map(|g| prob.to_physical(g)).collect();
                let ln_probs: Vec<_> = step.lnprob.iter().map(|&p| p as f64).collect();
                if let Err(e) = chain.push_step(&positions, &ln_probs) {
                    push_error = Some(e);
                }
            })
            .map_err(|e| SamplerError::Emcee(e.to_string()))?;
        if let Some(e) = push_error {
            return Err(e);
        }

        match chain.best() {
            Some((_, best_ln_prob)) => tracing::info!(
                nsteps = chain.nsteps(),
                best_ln_prob,
                acceptance_fraction = chain.acceptance_fraction(),
                "emcee run finished"
            ),
            None => tracing::warn!(
                nsteps = chain.nsteps(),
                "emcee run finished without finite log-probability"
            ),
        }

        Ok(chain)
    }
}

/// Log-probability in the dimensionless walker space `u = (x - center) / scale`
struct DimensionlessLnProb<'e, E: ?Sized, const NPARAMS: usize> {
    evaluator: &'e E,
    center: [f64; NPARAMS],
    scale: [f64; NPARAMS],
}

impl<'e, E, const NPARAMS: usize> DimensionlessLnProb<'e, E, NPARAMS>
where
    E: LnProbEvaluator<NPARAMS> + ?Sized,
{
    fn new(evaluator: &'e E, initial: &Ensemble<NPARAMS>) -> Result<Self, SamplerError> {
        let center = initial.center()?;
        let scale = initial.spread()?;
        if let Some(index) = scale.iter().position(|s| !(s.is_finite() && *s > 0.0)) {
            return Err(SamplerError::InvalidScale { index });
        }
        Ok(Self {
            evaluator,
            center,
            scale,
        })
    }

    fn to_dimensionless(&self, x: &[f64; NPARAMS]) -> Guess {
        let values: Vec<f32> = x
            .iter()
            .zip(self.center.iter().zip(self.scale.iter()))
            .map(|(&x, (&center, &scale))| ((x - center) / scale) as f32)
            .collect();
        Guess::new(&values)
    }

    fn to_physical(&self, guess: &Guess) -> [f64; NPARAMS] {
        std::array::from_fn(|i| self.center[i] + self.scale[i] * guess.values[i] as f64)
    }
}

impl<E, const NPARAMS: usize> Prob for DimensionlessLnProb<'_, E, NPARAMS>
where
    E: LnProbEvaluator<NPARAMS> + ?Sized,
{
    fn lnlike(&self, params: &Guess) -> f32 {
        self.evaluator.ln_prob(&self.to_physical(params)) as f32
    }

    // Priors are part of the evaluator
    fn lnprior(&self, _params: &Guess) -> f32 {
        0.0
    }
}
