use crate::error::SamplerError;

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Positions of all walkers of an ensemble sampler
#[derive(Clone, Debug, PartialEq)]
pub struct Ensemble<const NPARAMS: usize> {
    walkers: Vec<[f64; NPARAMS]>,
}

impl<const NPARAMS: usize> Ensemble<NPARAMS> {
    pub fn new(walkers: Vec<[f64; NPARAMS]>) -> Self {
        Self { walkers }
    }

    /// Gaussian ball around `center`, `scale` is the standard deviation of every coordinate
    pub fn perturbed<R: Rng + ?Sized>(
        center: &[f64; NPARAMS],
        scale: &[f64; NPARAMS],
        nwalkers: usize,
        rng: &mut R,
    ) -> Self {
        let walkers = (0..nwalkers)
            .map(|_| {
                std::array::from_fn(|i| {
                    let z: f64 = StandardNormal.sample(rng);
                    center[i] + scale[i] * z
                })
            })
            .collect();
        Self { walkers }
    }

    #[inline]
    pub fn walkers(&self) -> &[[f64; NPARAMS]] {
        &self.walkers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walkers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walkers.is_empty()
    }

    pub fn into_inner(self) -> Vec<[f64; NPARAMS]> {
        self.walkers
    }

    /// Per-parameter mean of the walkers
    pub fn center(&self) -> Result<[f64; NPARAMS], SamplerError> {
        if self.is_empty() {
            return Err(SamplerError::EmptyChain);
        }
        let n = self.len() as f64;
        Ok(std::array::from_fn(|i| {
            self.walkers.iter().map(|w| w[i]).sum::<f64>() / n
        }))
    }

    /// Per-parameter population standard deviation of the walkers
    pub fn spread(&self) -> Result<[f64; NPARAMS], SamplerError> {
        let center = self.center()?;
        let n = self.len() as f64;
        Ok(std::array::from_fn(|i| {
            let var = self
                .walkers
                .iter()
                .map(|w| (w[i] - center[i]).powi(2))
                .sum::<f64>()
                / n;
            var.sqrt()
        }))
    }
}

impl<const NPARAMS: usize> From<Vec<[f64; NPARAMS]>> for Ensemble<NPARAMS> {
    fn from(walkers: Vec<[f64; NPARAMS]>) -> Self {
        Self::new(walkers)
    }
}
