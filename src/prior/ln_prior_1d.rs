use enum_dispatch::enum_dispatch;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[enum_dispatch]
pub trait LnPrior1DTrait: Clone + Debug + Serialize + DeserializeOwned + PartialEq {
    /// Natural logarithm of the prior density at x
    fn ln_prior_1d(&self, x: f64) -> f64;
}

/// Natural logarithm of prior for a single component of the parameter vector
#[enum_dispatch(LnPrior1DTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[non_exhaustive]
pub enum LnPrior1D {
    None(NoneLnPrior1D),
    LogNormal(LogNormalLnPrior1D),
    LogUniform(LogUniformLnPrior1D),
    Normal(NormalLnPrior1D),
    Uniform(UniformLnPrior1D),
}

impl LnPrior1D {
    pub fn none() -> Self {
        NoneLnPrior1D {}.into()
    }

    pub fn log_normal(mu: f64, std: f64) -> Self {
        LogNormalLnPrior1D::new(mu, std).into()
    }

    pub fn log_uniform(left: f64, right: f64) -> Self {
        LogUniformLnPrior1D::new(left, right).into()
    }

    pub fn normal(mu: f64, std: f64) -> Self {
        NormalLnPrior1D::new(mu, std).into()
    }

    pub fn uniform(left: f64, right: f64) -> Self {
        UniformLnPrior1D::new(left, right).into()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NoneLnPrior1D {}

impl LnPrior1DTrait for NoneLnPrior1D {
    fn ln_prior_1d(&self, _x: f64) -> f64 {
        0.0
    }
}

fn gaussian_ln_prob_coeff(std: f64) -> f64 {
    assert!(
        std.is_finite() && std > 0.0,
        "std must be positive and finite"
    );
    -f64::ln(std) - 0.5 * f64::ln(std::f64::consts::TAU)
}

/// Normal distribution of `ln(x)`
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(into = "GaussianParameters", from = "GaussianParameters")]
pub struct LogNormalLnPrior1D {
    mu: f64,
    inv_std2: f64,
    ln_prob_coeff: f64,
}

impl LogNormalLnPrior1D {
    pub fn new(mu: f64, std: f64) -> Self {
        assert!(mu.is_finite(), "mu must be finite");
        Self {
            mu,
            inv_std2: std.powi(-2),
            ln_prob_coeff: gaussian_ln_prob_coeff(std),
        }
    }
}

impl LnPrior1DTrait for LogNormalLnPrior1D {
    fn ln_prior_1d(&self, x: f64) -> f64 {
        if !(x > 0.0) {
            return f64::NEG_INFINITY;
        }
        let ln_x = f64::ln(x);
        self.ln_prob_coeff - 0.5 * (self.mu - ln_x).powi(2) * self.inv_std2 - ln_x
    }
}

impl From<LogNormalLnPrior1D> for GaussianParameters {
    fn from(f: LogNormalLnPrior1D) -> Self {
        Self {
            mu: f.mu,
            std: f.inv_std2.recip().sqrt(),
        }
    }
}

impl From<GaussianParameters> for LogNormalLnPrior1D {
    fn from(f: GaussianParameters) -> Self {
        Self::new(f.mu, f.std)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(into = "GaussianParameters", from = "GaussianParameters")]
pub struct NormalLnPrior1D {
    mu: f64,
    inv_std2: f64,
    ln_prob_coeff: f64,
}

impl NormalLnPrior1D {
    pub fn new(mu: f64, std: f64) -> Self {
        assert!(mu.is_finite(), "mu must be finite");
        Self {
            mu,
            inv_std2: std.powi(-2),
            ln_prob_coeff: gaussian_ln_prob_coeff(std),
        }
    }
}

impl LnPrior1DTrait for NormalLnPrior1D {
    fn ln_prior_1d(&self, x: f64) -> f64 {
        self.ln_prob_coeff - 0.5 * (self.mu - x).powi(2) * self.inv_std2
    }
}

impl From<NormalLnPrior1D> for GaussianParameters {
    fn from(f: NormalLnPrior1D) -> Self {
        Self {
            mu: f.mu,
            std: f.inv_std2.recip().sqrt(),
        }
    }
}

impl From<GaussianParameters> for NormalLnPrior1D {
    fn from(f: GaussianParameters) -> Self {
        Self::new(f.mu, f.std)
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "GaussianLnPrior1D")]
struct GaussianParameters {
    mu: f64,
    std: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(into = "RangeParameters", from = "RangeParameters")]
pub struct UniformLnPrior1D {
    left: f64,
    right: f64,
    ln_prob: f64,
}

impl UniformLnPrior1D {
    pub fn new(left: f64, right: f64) -> Self {
        assert!(
            left.is_finite() && right.is_finite(),
            "range must be finite"
        );
        assert!(left < right, "right must be larger than left");
        Self {
            left,
            right,
            ln_prob: -f64::ln(right - left),
        }
    }
}

impl LnPrior1DTrait for UniformLnPrior1D {
    fn ln_prior_1d(&self, x: f64) -> f64 {
        if (self.left..=self.right).contains(&x) {
            self.ln_prob
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl From<UniformLnPrior1D> for RangeParameters {
    fn from(f: UniformLnPrior1D) -> Self {
        Self {
            range: f.left..=f.right,
        }
    }
}

impl From<RangeParameters> for UniformLnPrior1D {
    fn from(f: RangeParameters) -> Self {
        Self::new(*f.range.start(), *f.range.end())
    }
}

/// Uniform distribution of `ln(x)`
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(into = "RangeParameters", from = "RangeParameters")]
pub struct LogUniformLnPrior1D {
    ln_left: f64,
    ln_right: f64,
    ln_prob_coeff: f64,
}

impl LogUniformLnPrior1D {
    pub fn new(left: f64, right: f64) -> Self {
        assert!(
            left > 0.0 && right.is_finite(),
            "range must be positive and finite"
        );
        assert!(left < right, "right must be larger than left");
        let ln_left = f64::ln(left);
        let ln_right = f64::ln(right);
        Self {
            ln_left,
            ln_right,
            ln_prob_coeff: -f64::ln(ln_right - ln_left),
        }
    }
}

impl LnPrior1DTrait for LogUniformLnPrior1D {
    fn ln_prior_1d(&self, x: f64) -> f64 {
        let ln_x = f64::ln(x);
        if (self.ln_left..=self.ln_right).contains(&ln_x) {
            self.ln_prob_coeff - ln_x
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl From<LogUniformLnPrior1D> for RangeParameters {
    fn from(f: LogUniformLnPrior1D) -> Self {
        Self {
            range: f.ln_left.exp()..=f.ln_right.exp(),
        }
    }
}

impl From<RangeParameters> for LogUniformLnPrior1D {
    fn from(f: RangeParameters) -> Self {
        Self::new(*f.range.start(), *f.range.end())
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RangeLnPrior1D")]
struct RangeParameters {
    range: std::ops::RangeInclusive<f64>,
}
