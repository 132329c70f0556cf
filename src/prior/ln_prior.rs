use crate::model::{HotColdParams, NPARAMS};
use crate::prior::ln_prior_1d::{LnPrior1D, LnPrior1DTrait};

use enum_dispatch::enum_dispatch;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[enum_dispatch]
pub trait LnPriorTrait: Clone + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Natural logarithm of the prior at params, `-inf` rejects the parameter vector
    fn ln_prior(&self, params: &[f64; NPARAMS]) -> f64;
}

/// Natural logarithm of prior of the hot-cold parameter vector
///
/// The default is the flat [LnPrior::none], which is what the likelihood-only analysis uses.
#[enum_dispatch(LnPriorTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[non_exhaustive]
pub enum LnPrior {
    None(NoneLnPrior),
    IndComponents(IndComponentsLnPrior),
    Physical(PhysicalLnPrior),
}

impl LnPrior {
    pub fn none() -> Self {
        NoneLnPrior {}.into()
    }

    pub fn ind_components(components: [LnPrior1D; NPARAMS]) -> Self {
        IndComponentsLnPrior { components }.into()
    }

    pub fn physical() -> Self {
        PhysicalLnPrior {}.into()
    }

    pub fn as_func(&self) -> impl '_ + Fn(&[f64; NPARAMS]) -> f64 {
        |params| self.ln_prior(params)
    }
}

impl Default for LnPrior {
    fn default() -> Self {
        Self::none()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NoneLnPrior {}

impl LnPriorTrait for NoneLnPrior {
    fn ln_prior(&self, _params: &[f64; NPARAMS]) -> f64 {
        0.0
    }
}

/// Product of independent priors, one per parameter in [HotColdParams] order
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    into = "IndComponentsLnPriorSerde",
    try_from = "IndComponentsLnPriorSerde"
)]
pub struct IndComponentsLnPrior {
    pub components: [LnPrior1D; NPARAMS],
}

impl LnPriorTrait for IndComponentsLnPrior {
    fn ln_prior(&self, params: &[f64; NPARAMS]) -> f64 {
        params
            .iter()
            .zip(self.components.iter())
            .map(|(&x, ln_prior)| ln_prior.ln_prior_1d(x))
            .sum()
    }
}

impl JsonSchema for IndComponentsLnPrior {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        IndComponentsLnPriorSerde::schema_name()
    }

    fn json_schema(r#gen: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        IndComponentsLnPriorSerde::json_schema(r#gen)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "IndComponentsLnPrior")]
struct IndComponentsLnPriorSerde {
    components: Vec<LnPrior1D>,
}

impl From<IndComponentsLnPrior> for IndComponentsLnPriorSerde {
    fn from(value: IndComponentsLnPrior) -> Self {
        Self {
            components: value.components.into(),
        }
    }
}

impl TryFrom<IndComponentsLnPriorSerde> for IndComponentsLnPrior {
    type Error = &'static str;

    fn try_from(value: IndComponentsLnPriorSerde) -> Result<Self, Self::Error> {
        Ok(Self {
            components: value
                .components
                .try_into()
                .map_err(|_| "wrong size of the IndComponentsLnPrior.components")?,
        })
    }
}

/// Flat prior over physically meaningful parameter vectors
///
/// Zero for vectors passing [HotColdParams::is_physical], `-inf` otherwise.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PhysicalLnPrior {}

impl LnPriorTrait for PhysicalLnPrior {
    fn ln_prior(&self, params: &[f64; NPARAMS]) -> f64 {
        if HotColdParams::from_array(params).is_physical() {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const PARAMS: [f64; NPARAMS] = [6.5534, 731.55, 0.005235, 0.32322, 0.05232, 1826.25, 2.7e-5, 0.0];

    #[test]
    fn none_is_zero() {
        let prior = LnPrior::none();
        assert_eq!(prior.ln_prior(&PARAMS), 0.0);
        assert_eq!(prior.ln_prior(&[f64::NAN; NPARAMS]), 0.0);
        assert_eq!(LnPrior::default(), prior);
    }

    #[test]
    fn ind_components() {
        let mut components: [LnPrior1D; NPARAMS] = std::array::from_fn(|_| LnPrior1D::none());
        components[2] = LnPrior1D::uniform(0.0, 0.1);
        components[4] = LnPrior1D::log_uniform(1e-3, 1.0);
        let prior = LnPrior::ind_components(components);
        assert!(prior.ln_prior(&PARAMS).is_finite());

        let mut negative_depth = PARAMS;
        negative_depth[2] = -0.005;
        assert_eq!(prior.ln_prior(&negative_depth), f64::NEG_INFINITY);
    }

    #[test]
    fn physical() {
        let prior = LnPrior::physical();
        assert_eq!(prior.ln_prior(&PARAMS), 0.0);

        let mut gress_too_long = PARAMS;
        gress_too_long[4] = 0.5;
        assert_eq!(prior.ln_prior(&gress_too_long), f64::NEG_INFINITY);

        let mut negative_period = PARAMS;
        negative_period[0] = -6.5534;
        assert_eq!(prior.ln_prior(&negative_period), f64::NEG_INFINITY);
    }

    #[test]
    fn as_func() {
        let prior = LnPrior::physical();
        let func = prior.as_func();
        assert_eq!(func(&PARAMS), 0.0);
    }

    #[test]
    fn serialization() {
        let mut components: [LnPrior1D; NPARAMS] = std::array::from_fn(|_| LnPrior1D::none());
        components[0] = LnPrior1D::normal(6.5534, 1e-4);
        let priors = [
            LnPrior::none(),
            LnPrior::physical(),
            LnPrior::ind_components(components),
        ];
        for prior in priors {
            let json = serde_json::to_string(&prior).unwrap();
            let deserialized: LnPrior = serde_json::from_str(&json).unwrap();
            assert_relative_eq!(
                prior.ln_prior(&PARAMS),
                deserialized.ln_prior(&PARAMS),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn wrong_number_of_components() {
        let json = r#"{"IndComponents":{"components":[{"None":{}}]}}"#;
        assert!(serde_json::from_str::<LnPrior>(json).is_err());
    }
}
