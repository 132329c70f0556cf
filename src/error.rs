/// Error returned from [crate::Observation] constructors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ObservationError {
    #[error("{name} has length {actual}, but time has length {expected}")]
    ShapeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("inverse variance must be positive and finite, got invalid value at index {index}")]
    NonPositiveInverseVariance { index: usize },

    #[error("{name} must be finite, got non-finite value at index {index}")]
    NonFinite { name: &'static str, index: usize },

    #[error("exposure time must be non-negative and finite")]
    InvalidExposureTime,

    #[error("noise level must be positive and finite to derive inverse variances")]
    InvalidNoiseLevel,
}

/// Error returned from the forward model
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("oversampling factor must be positive")]
    ZeroOversampling,

    #[error(transparent)]
    Observation(#[from] ObservationError),
}

/// Error returned from [crate::EmceeSampler] and [crate::Chain]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SamplerError {
    #[error(
        "ensemble sampler requires an even number of walkers of at least {minimum}, got {actual}"
    )]
    InvalidWalkerNumber { actual: usize, minimum: usize },

    #[error("initial ensemble has {actual} walkers, sampler is configured for {expected}")]
    EnsembleSizeMismatch { expected: usize, actual: usize },

    #[error("parameter scale must be positive and finite, got invalid value at index {index}")]
    InvalidScale { index: usize },

    #[error("chain is empty")]
    EmptyChain,

    #[error("tail fraction must be in (0, 1], got {0}")]
    InvalidTailFraction(String),

    #[error("emcee sampler failed: {0}")]
    Emcee(String),
}
