use crate::float_trait::Float;
use crate::model::params::EclipseParams;

use ndarray::{Array1, ArrayView1};

/// Floored modulo, the result has the sign of `period`
#[inline]
pub(crate) fn floor_mod<T: Float>(x: T, period: T) -> T {
    let r = x % period;
    if r != T::zero() && (r < T::zero()) != (period < T::zero()) {
        r + period
    } else {
        r
    }
}

/// Distance from the nearest eclipse centre
#[inline]
fn phase_distance<T: Float>(t: T, period: T, offset: T) -> T {
    let mut phase = floor_mod(t - offset, period);
    if phase > T::half() * period {
        phase -= period;
    }
    phase.abs()
}

/// Fractional flux deficit of the trapezoidal eclipse at time `t`
///
/// The deficit is `depth` while the phase distance from the eclipse centre is smaller than
/// `(duration - gress) / 2`, decreases linearly to zero at `(duration + gress) / 2` and is zero
/// further away. Zero `gress` gives a box-shaped eclipse, `gress > duration` gives a triangle
/// clipped below `depth`. Non-finite phase gives zero.
#[inline]
pub fn eclipse_deficit<T: Float>(t: T, p: &EclipseParams<T>) -> T {
    let d = phase_distance(t, p.period, p.offset);
    let inner = T::half() * (p.duration - p.gress);
    let outer = T::half() * (p.duration + p.gress);
    if d < inner {
        p.depth
    } else if d < outer {
        p.depth / p.gress * (outer - d)
    } else {
        T::zero()
    }
}

/// [eclipse_deficit] evaluated for every time
pub fn eclipse_deficits<T: Float>(t: ArrayView1<T>, p: &EclipseParams<T>) -> Array1<T> {
    t.mapv(|t| eclipse_deficit(t, p))
}
