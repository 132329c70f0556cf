//! Forward model of a periodically eclipsed star with light-travel-time timing drift
//!
//! The instantaneous model is a trapezoidal eclipse ([eclipse_deficit]) evaluated at the
//! apparent time ([distort]) of the observation. Observed fluxes are exposure averages of it,
//! computed with a midpoint rule ([integrate_deficits]): the trapezoid has kinks at the contact
//! points, and point sampling would bias depth and duration whenever an exposure straddles one.

mod distortion;
pub use distortion::{distort, distort_times, time_delays};

mod eclipse;
pub use eclipse::{eclipse_deficit, eclipse_deficits};

mod integrate;
pub use integrate::{integrate_deficits, model_fluxes};

mod params;
pub use params::{DistortionKind, DistortionParams, EclipseParams, HotColdParams, NPARAMS};

mod quadrature;
pub use quadrature::ExposureGrid;

mod recurrent_sin_cos;
pub use recurrent_sin_cos::RecurrentSinCos;
