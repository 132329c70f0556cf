//! Priors of the hot-cold parameter vector
//!
//! The flat [LnPrior::none] reproduces a likelihood-only analysis. Parameter bounds and
//! positivity are not enforced by the forward model, so this is the place to reject
//! non-physical vectors, e.g. with [LnPrior::physical].

pub mod ln_prior;
pub use ln_prior::{LnPrior, LnPriorTrait};

pub mod ln_prior_1d;
pub use ln_prior_1d::{LnPrior1D, LnPrior1DTrait};
