use crate::float_trait::Float;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Length of the full parameter vector, see [HotColdParams]
pub const NPARAMS: usize = 8;

/// Ephemeris and shape of the trapezoidal eclipse
///
/// All values are in days except `depth`, which is the dimensionless fractional flux drop at
/// mid-eclipse.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
pub struct EclipseParams<T> {
    /// Orbital ("hot") period
    pub period: T,
    /// Time of the eclipse centre used as the phase origin
    pub offset: T,
    pub depth: T,
    /// Full eclipse duration measured between the mid-points of ingress and egress
    pub duration: T,
    /// Duration of the ingress and of the egress
    pub gress: T,
}

/// Light-travel-time perturbation of the observed time
#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
pub struct DistortionParams<T> {
    /// Period of the timing modulation ("cold" period), days
    pub period: T,
    /// Amplitude of the cosine term, days
    pub a_amp: T,
    /// Amplitude of the second term, days, see [DistortionKind]
    pub b_amp: T,
}

/// How `b_amp` enters the timing distortion
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub enum DistortionKind {
    /// Both amplitudes multiply the same cosine, only `a_amp + b_amp` is constrained by data
    #[default]
    Degenerate,
    /// `b_amp` multiplies the sine of the phase, so the two amplitudes are orthogonal
    Orthogonal,
}

/// Full parameter vector of the hot-cold model
///
/// Positional layout, used by [HotColdParams::from_array], [HotColdParams::to_array] and every
/// sampler-facing function:
///
/// | index | name          | units |
/// |-------|---------------|-------|
/// | 0     | `hot_period`  | d     |
/// | 1     | `offset`      | d     |
/// | 2     | `depth`       | -     |
/// | 3     | `duration`    | d     |
/// | 4     | `gress`       | d     |
/// | 5     | `cold_period` | d     |
/// | 6     | `a_amp`       | d     |
/// | 7     | `b_amp`       | d     |
#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
pub struct HotColdParams<T> {
    pub eclipse: EclipseParams<T>,
    pub distortion: DistortionParams<T>,
}

impl<T> HotColdParams<T>
where
    T: Float,
{
    pub const NPARAMS: usize = NPARAMS;

    pub fn from_array(a: &[T; NPARAMS]) -> Self {
        Self {
            eclipse: EclipseParams {
                period: a[0],
                offset: a[1],
                depth: a[2],
                duration: a[3],
                gress: a[4],
            },
            distortion: DistortionParams {
                period: a[5],
                a_amp: a[6],
                b_amp: a[7],
            },
        }
    }

    pub fn to_array(&self) -> [T; NPARAMS] {
        let e = &self.eclipse;
        let d = &self.distortion;
        [
            e.period, e.offset, e.depth, e.duration, e.gress, d.period, d.a_amp, d.b_amp,
        ]
    }

    pub fn names() -> [&'static str; NPARAMS] {
        [
            "hot_period",
            "offset",
            "depth",
            "duration",
            "gress",
            "cold_period",
            "a_amp",
            "b_amp",
        ]
    }

    pub fn descriptions() -> [&'static str; NPARAMS] {
        [
            "period of the eclipses, days",
            "time of the eclipse centre, days",
            "fractional flux drop at mid-eclipse",
            "eclipse duration at half depth, days",
            "ingress and egress duration, days",
            "period of the light-travel-time modulation, days",
            "amplitude of the cosine timing term, days",
            "amplitude of the second timing term, days",
        ]
    }

    /// Are all values finite, both periods positive, and the eclipse shape non-negative with
    /// `gress <= duration`?
    ///
    /// The forward model accepts any values, this check is meant for priors.
    pub fn is_physical(&self) -> bool {
        let e = &self.eclipse;
        let d = &self.distortion;
        self.to_array().iter().all(|x| x.is_finite())
            && e.period > T::zero()
            && d.period > T::zero()
            && e.depth >= T::zero()
            && e.gress >= T::zero()
            && e.duration >= e.gress
    }
}

impl<T> From<[T; NPARAMS]> for HotColdParams<T>
where
    T: Float,
{
    fn from(a: [T; NPARAMS]) -> Self {
        Self::from_array(&a)
    }
}

impl<T> From<HotColdParams<T>> for [T; NPARAMS]
where
    T: Float,
{
    fn from(p: HotColdParams<T>) -> Self {
        p.to_array()
    }
}
