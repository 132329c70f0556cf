use crate::model::DistortionKind;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Oversampling factor used to synthesise observations
pub const DEFAULT_SYNTHESIS_OVERSAMPLING: usize = 21;

/// Oversampling factor used by the likelihood, smaller because it runs once per proposal
pub const DEFAULT_LIKELIHOOD_OVERSAMPLING: usize = 5;

/// Numerical settings of the forward model
///
/// Exposure time is a property of the data and lives in [crate::Observation], not here.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct ModelConfig {
    /// Midpoint-rule samples per exposure for synthetic observations
    pub synthesis_oversampling: usize,
    /// Midpoint-rule samples per exposure for the likelihood
    pub likelihood_oversampling: usize,
    pub distortion: DistortionKind,
}

impl ModelConfig {
    pub fn new(
        synthesis_oversampling: usize,
        likelihood_oversampling: usize,
        distortion: DistortionKind,
    ) -> Self {
        Self {
            synthesis_oversampling,
            likelihood_oversampling,
            distortion,
        }
    }

    #[inline]
    pub fn default_synthesis_oversampling() -> usize {
        DEFAULT_SYNTHESIS_OVERSAMPLING
    }

    #[inline]
    pub fn default_likelihood_oversampling() -> usize {
        DEFAULT_LIKELIHOOD_OVERSAMPLING
    }

    #[inline]
    pub fn default_distortion() -> DistortionKind {
        DistortionKind::default()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(
            Self::default_synthesis_oversampling(),
            Self::default_likelihood_oversampling(),
            Self::default_distortion(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.synthesis_oversampling, 21);
        assert_eq!(config.likelihood_oversampling, 5);
        assert_eq!(config.distortion, DistortionKind::Degenerate);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: ModelConfig =
            serde_json::from_str(r#"{"distortion": "Orthogonal"}"#).unwrap();
        assert_eq!(
            config,
            ModelConfig::new(21, 5, DistortionKind::Orthogonal)
        );
    }

    #[test]
    fn json_schema() {
        let schema = schemars::schema_for!(ModelConfig);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("likelihood_oversampling"));
    }
}
