use crate::float_trait::Float;
use crate::model::params::{DistortionKind, DistortionParams};

use ndarray::{Array1, ArrayView1};

/// Phase of the timing modulation, radians
#[inline]
pub(crate) fn distortion_phase<T: Float>(t: T, p: &DistortionParams<T>) -> T {
    T::two() * T::PI() * t / p.period
}

/// Apparent time given precomputed `sin` and `cos` of the modulation phase
#[inline]
pub(crate) fn distort_sin_cos<T: Float>(
    t: T,
    (sin, cos): (T, T),
    p: &DistortionParams<T>,
    kind: DistortionKind,
) -> T {
    match kind {
        DistortionKind::Degenerate => t - p.a_amp * cos - p.b_amp * cos,
        DistortionKind::Orthogonal => t - p.a_amp * cos - p.b_amp * sin,
    }
}

/// Apparent time of the eclipse clock at time `t`
///
/// `t - a_amp cos(2 pi t / period)` minus the `b_amp` term, which is either another cosine
/// ([DistortionKind::Degenerate]) or a sine ([DistortionKind::Orthogonal]).
#[inline]
pub fn distort<T: Float>(t: T, p: &DistortionParams<T>, kind: DistortionKind) -> T {
    distort_sin_cos(t, distortion_phase(t, p).sin_cos(), p, kind)
}

/// [distort] evaluated for every time
pub fn distort_times<T: Float>(
    t: ArrayView1<T>,
    p: &DistortionParams<T>,
    kind: DistortionKind,
) -> Array1<T> {
    t.mapv(|t| distort(t, p, kind))
}

/// Light-travel-time delays `t - distort(t)`, the curve that the timing modulation adds to the
/// eclipse ephemeris
pub fn time_delays<T: Float>(
    t: ArrayView1<T>,
    p: &DistortionParams<T>,
    kind: DistortionKind,
) -> Array1<T> {
    t.mapv(|t| t - distort(t, p, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use ndarray::Array1;

    const DAY_SECONDS: f64 = 86400.0;

    fn params(a_amp: f64, b_amp: f64) -> DistortionParams<f64> {
        DistortionParams {
            period: 365.25 * 5.0,
            a_amp,
            b_amp,
        }
    }

    #[test]
    fn zero_amplitude_is_identity() {
        let t = Array1::linspace(-1000.0, 3000.0, 1001);
        for kind in [DistortionKind::Degenerate, DistortionKind::Orthogonal] {
            assert_eq!(distort_times(t.view(), &params(0.0, 0.0), kind), t);
        }
    }

    #[test]
    fn cosine_delay() {
        let p = params(2.34 / DAY_SECONDS, 0.0);
        assert_abs_diff_eq!(distort(0.0, &p, DistortionKind::Degenerate), -p.a_amp);
        let quarter = 0.25 * p.period;
        assert_abs_diff_eq!(
            distort(quarter, &p, DistortionKind::Degenerate),
            quarter,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            distort(0.5 * p.period, &p, DistortionKind::Degenerate),
            0.5 * p.period + p.a_amp,
            epsilon = 1e-12
        );
    }

    #[test]
    fn degenerate_amplitudes_add_up() {
        let t = Array1::linspace(0.0, 4.1 * 365.0, 500);
        let split = distort_times(t.view(), &params(1e-5, 2e-5), DistortionKind::Degenerate);
        let merged = distort_times(t.view(), &params(3e-5, 0.0), DistortionKind::Degenerate);
        assert_abs_diff_eq!(split, merged, epsilon = 1e-12);
    }

    #[test]
    fn orthogonal_uses_sine() {
        let p = params(0.0, 1e-4);
        let quarter = 0.25 * p.period;
        assert_abs_diff_eq!(
            distort(quarter, &p, DistortionKind::Orthogonal),
            quarter - p.b_amp,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(distort(0.0, &p, DistortionKind::Orthogonal), 0.0);
        assert_abs_diff_eq!(distort(0.0, &p, DistortionKind::Degenerate), -p.b_amp);
    }

    #[test]
    fn delays_are_periodic_and_bounded() {
        let p = params(2.34 / DAY_SECONDS, 1.0 / DAY_SECONDS);
        let t = Array1::linspace(0.0, 2.0 * p.period, 2001);
        for kind in [DistortionKind::Degenerate, DistortionKind::Orthogonal] {
            let delays = time_delays(t.view(), &p, kind);
            assert!(delays.iter().all(|d| d.abs() <= p.a_amp + p.b_amp + 1e-11));
            assert_abs_diff_eq!(delays[0], delays[1000], epsilon = 1e-10);
            assert_abs_diff_eq!(delays[0], delays[2000], epsilon = 1e-10);
        }
    }
}
