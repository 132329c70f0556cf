use crate::error::ModelError;
use crate::float_trait::Float;
use crate::model::distortion::{distort_sin_cos, distortion_phase};
use crate::model::eclipse::eclipse_deficit;
use crate::model::params::{DistortionKind, HotColdParams};
use crate::model::quadrature::ExposureGrid;
use crate::model::recurrent_sin_cos::RecurrentSinCos;

use ndarray::{Array1, ArrayView1};

impl<T: Float> ExposureGrid<T> {
    /// Exposure-averaged eclipse deficit of a single observation centred at `t`
    ///
    /// Every sub-sample is shifted by the timing distortion before the eclipse shape is
    /// evaluated. The distortion phase of consecutive sub-samples differs by a constant, so it is
    /// advanced by rotation rather than by a `sin_cos` call per sample.
    pub fn mean_deficit(&self, t: T, params: &HotColdParams<T>, kind: DistortionKind) -> T {
        let distortion = &params.distortion;
        let phases = RecurrentSinCos::new(
            distortion_phase(t + self.first(), distortion),
            distortion_phase(self.step(), distortion),
        );
        let sum: T = self
            .offsets()
            .zip(phases)
            .map(|(dt, sin_cos)| {
                let apparent = distort_sin_cos(t + dt, sin_cos, distortion, kind);
                eclipse_deficit(apparent, &params.eclipse)
            })
            .sum();
        sum * self.weight()
    }
}

/// Fractional flux deficit averaged over the exposure of every observation
///
/// `k` is the number of midpoint-rule sub-samples per exposure, see [ExposureGrid]. The cost is
/// `t.len() * k` eclipse-shape evaluations.
pub fn integrate_deficits<T: Float>(
    t: ArrayView1<T>,
    exptime: T,
    params: &HotColdParams<T>,
    k: usize,
    kind: DistortionKind,
) -> Result<Array1<T>, ModelError> {
    let grid = ExposureGrid::new(exptime, k)?;
    Ok(t.mapv(|t| grid.mean_deficit(t, params, kind)))
}

/// Noiseless relative flux, `1 - ` [integrate_deficits]
pub fn model_fluxes<T: Float>(
    t: ArrayView1<T>,
    exptime: T,
    params: &HotColdParams<T>,
    k: usize,
    kind: DistortionKind,
) -> Result<Array1<T>, ModelError> {
    let grid = ExposureGrid::new(exptime, k)?;
    Ok(t.mapv(|t| T::one() - grid.mean_deficit(t, params, kind)))
}
