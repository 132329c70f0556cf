use crate::error::SamplerError;
use crate::sampler::Ensemble;

use itertools::Itertools;
use rand::Rng;

/// Walker positions and log-probabilities of every sampler step
///
/// Storage is step-major: the flat chain lists all walkers of the first step, then all walkers
/// of the second step and so on.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain<const NPARAMS: usize> {
    nwalkers: usize,
    positions: Vec<[f64; NPARAMS]>,
    ln_probs: Vec<f64>,
}

impl<const NPARAMS: usize> Chain<NPARAMS> {
    pub fn new(nwalkers: usize) -> Self {
        Self {
            nwalkers,
            positions: vec![],
            ln_probs: vec![],
        }
    }

    /// Append a step, both slices must have a value for every walker
    pub fn push_step(
        &mut self,
        positions: &[[f64; NPARAMS]],
        ln_probs: &[f64],
    ) -> Result<(), SamplerError> {
        for actual in [positions.len(), ln_probs.len()] {
            if actual != self.nwalkers {
                return Err(SamplerError::EnsembleSizeMismatch {
                    expected: self.nwalkers,
                    actual,
                });
            }
        }
        self.positions.extend_from_slice(positions);
        self.ln_probs.extend_from_slice(ln_probs);
        Ok(())
    }

    #[inline]
    pub fn nwalkers(&self) -> usize {
        self.nwalkers
    }

    pub fn nsteps(&self) -> usize {
        if self.nwalkers == 0 {
            0
        } else {
            self.positions.len() / self.nwalkers
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn flatchain(&self) -> &[[f64; NPARAMS]] {
        &self.positions
    }

    /// Log-probabilities in the [flatchain](Self::flatchain) order
    #[inline]
    pub fn ln_probs(&self) -> &[f64] {
        &self.ln_probs
    }

    pub fn step(&self, index: usize) -> Option<&[[f64; NPARAMS]]> {
        let begin = index.checked_mul(self.nwalkers)?;
        self.positions.get(begin..begin + self.nwalkers)
    }

    /// Walker positions after the last step
    pub fn last(&self) -> Option<Ensemble<NPARAMS>> {
        let nsteps = self.nsteps();
        if nsteps == 0 {
            return None;
        }
        self.step(nsteps - 1).map(|walkers| Ensemble::new(walkers.to_vec()))
    }

    /// Sample with the largest finite log-probability
    pub fn best(&self) -> Option<([f64; NPARAMS], f64)> {
        self.positions
            .iter()
            .zip(self.ln_probs.iter())
            .filter(|(_, ln_prob)| ln_prob.is_finite())
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(position, &ln_prob)| (*position, ln_prob))
    }

    /// Fraction of walker moves which changed the position between consecutive steps
    pub fn acceptance_fraction(&self) -> Option<f64> {
        if self.nsteps() < 2 {
            return None;
        }
        let accepted = self
            .positions
            .chunks(self.nwalkers)
            .tuple_windows()
            .map(|(previous, current)| {
                previous
                    .iter()
                    .zip(current.iter())
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum::<usize>();
        let moves = (self.nsteps() - 1) * self.nwalkers;
        Some(accepted as f64 / moves as f64)
    }

    /// Per-parameter mean over the flat chain
    pub fn mean(&self) -> Option<[f64; NPARAMS]> {
        if self.is_empty() {
            return None;
        }
        let n = self.positions.len() as f64;
        Some(std::array::from_fn(|i| {
            self.positions.iter().map(|p| p[i]).sum::<f64>() / n
        }))
    }

    /// Flat chain of the last `fraction` of the steps, at least one step
    pub fn tail(&self, fraction: f64) -> Result<&[[f64; NPARAMS]], SamplerError> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(SamplerError::InvalidTailFraction(fraction.to_string()));
        }
        let nsteps = self.nsteps();
        if nsteps == 0 {
            return Err(SamplerError::EmptyChain);
        }
        let tail_steps = ((fraction * nsteps as f64).ceil() as usize).clamp(1, nsteps);
        let begin = (nsteps - tail_steps) * self.nwalkers;
        Ok(&self.positions[begin..])
    }

    /// Fresh ensemble of `nwalkers` positions drawn with replacement from the
    /// [tail](Self::tail) of the chain
    ///
    /// Used between burn-in rounds to restart a larger ensemble from the region the previous
    /// round has converged to.
    pub fn resample_tail<R: Rng + ?Sized>(
        &self,
        fraction: f64,
        nwalkers: usize,
        rng: &mut R,
    ) -> Result<Ensemble<NPARAMS>, SamplerError> {
        let tail = self.tail(fraction)?;
        let walkers = (0..nwalkers)
            .map(|_| tail[rng.random_range(0..tail.len())])
            .collect();
        Ok(Ensemble::new(walkers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    fn chain() -> Chain<2> {
        let mut chain = Chain::new(2);
        for step in 0..8 {
            let x = step as f64;
            chain
                .push_step(&[[x, 0.0], [x, 1.0]], &[-x, -x - 0.5])
                .unwrap();
        }
        chain
    }

    #[test]
    fn layout() {
        let chain = chain();
        assert_eq!(chain.nwalkers(), 2);
        assert_eq!(chain.nsteps(), 8);
        assert_eq!(chain.flatchain().len(), 16);
        assert_eq!(chain.flatchain()[3], [1.0, 1.0]);
        assert_eq!(chain.ln_probs()[3], -1.5);
        assert_eq!(chain.step(7).unwrap(), &[[7.0, 0.0], [7.0, 1.0]]);
        assert!(chain.step(8).is_none());
        assert_eq!(
            chain.last().unwrap(),
            Ensemble::new(vec![[7.0, 0.0], [7.0, 1.0]])
        );
        assert_eq!(chain.mean().unwrap(), [3.5, 0.5]);
        assert_eq!(chain.acceptance_fraction(), Some(1.0));
    }

    #[test]
    fn size_mismatch() {
        let mut chain = Chain::new(2);
        assert_eq!(
            chain.push_step(&[[0.0, 0.0]], &[0.0]),
            Err(SamplerError::EnsembleSizeMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert!(chain.is_empty());
    }

    #[test]
    fn best_skips_non_finite() {
        let mut chain = Chain::new(2);
        chain
            .push_step(&[[0.0], [1.0]], &[f64::NAN, -3.0])
            .unwrap();
        chain
            .push_step(&[[2.0], [3.0]], &[f64::NEG_INFINITY, -2.0])
            .unwrap();
        assert_eq!(chain.best(), Some(([3.0], -2.0)));
        assert_eq!(chain.acceptance_fraction(), Some(1.0));

        chain
            .push_step(&[[2.0], [4.0]], &[f64::NEG_INFINITY, -2.5])
            .unwrap();
        assert_eq!(chain.acceptance_fraction(), Some(0.75));
    }

    #[test]
    fn tail() {
        let chain = chain();
        let tail = chain.tail(0.25).unwrap();
        assert_eq!(tail.len(), 4);
        assert!(tail.iter().all(|p| p[0] >= 6.0));
        assert_eq!(chain.tail(1.0).unwrap().len(), 16);
        assert_eq!(chain.tail(1e-9).unwrap().len(), 2);
        assert!(matches!(
            chain.tail(0.0),
            Err(SamplerError::InvalidTailFraction(_))
        ));
        assert!(matches!(
            chain.tail(f64::NAN),
            Err(SamplerError::InvalidTailFraction(_))
        ));
        assert_eq!(Chain::<2>::new(2).tail(0.5), Err(SamplerError::EmptyChain));
    }

    #[test]
    fn resample_tail() {
        let mut rng = StdRng::seed_from_u64(0);
        let ensemble = chain().resample_tail(0.25, 32, &mut rng).unwrap();
        assert_eq!(ensemble.len(), 32);
        assert!(ensemble.walkers().iter().all(|p| p[0] >= 6.0));
    }
}
