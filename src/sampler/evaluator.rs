use rayon::prelude::*;

/// Log-probability density up to an additive constant
///
/// Implementations must be pure functions of the parameter vector so a single instance can be
/// shared by all walkers and threads. `-inf` marks a rejected vector.
pub trait LnProbEvaluator<const NPARAMS: usize>: Sync {
    fn ln_prob(&self, params: &[f64; NPARAMS]) -> f64;
}

impl<F, const NPARAMS: usize> LnProbEvaluator<NPARAMS> for F
where
    F: Fn(&[f64; NPARAMS]) -> f64 + Sync,
{
    #[inline]
    fn ln_prob(&self, params: &[f64; NPARAMS]) -> f64 {
        self(params)
    }
}

/// Evaluate every walker of an ensemble in parallel, the output order follows the input
pub fn evaluate_ensemble<E, const NPARAMS: usize>(
    evaluator: &E,
    walkers: &[[f64; NPARAMS]],
) -> Vec<f64>
where
    E: LnProbEvaluator<NPARAMS> + ?Sized,
{
    walkers.par_iter().map(|w| evaluator.ln_prob(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_evaluator() {
        let ln_prob = |x: &[f64; 2]| -0.5 * (x[0] * x[0] + x[1] * x[1]);
        let walkers: Vec<[f64; 2]> = (0..100).map(|i| [i as f64, -(i as f64)]).collect();
        let actual = evaluate_ensemble(&ln_prob, &walkers);
        let desired: Vec<f64> = walkers.iter().map(|w| -(w[0] * w[0])).collect();
        assert_eq!(actual, desired);
    }

    #[test]
    fn empty_ensemble() {
        let ln_prob = |_: &[f64; 3]| 0.0;
        assert!(evaluate_ensemble::<_, 3>(&ln_prob, &[]).is_empty());
    }
}
