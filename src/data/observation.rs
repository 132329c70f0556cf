use crate::data::DataSample;
use crate::error::ObservationError;
use crate::float_trait::Float;

use ndarray::ArrayView1;

/// Observed light curve together with the exposure time of its samples
///
/// The record is validated once at construction and then shared read-only by every likelihood
/// evaluation, so it is safe to use from several threads at once.
#[derive(Clone, Debug)]
pub struct Observation<'a, T>
where
    T: Float,
{
    t: DataSample<'a, T>,
    flux: DataSample<'a, T>,
    ivar: DataSample<'a, T>,
    exptime: T,
}

impl<'a, T> Observation<'a, T>
where
    T: Float,
{
    /// Construct [`Observation`] from array-like objects
    ///
    /// `t` is time, `flux` is relative flux, `ivar` is inverse variance of `flux`, `exptime` is
    /// the exposure duration of every sample, in the same units as `t`.
    ///
    /// All arrays must have the same length, `t` and `flux` must be finite, `ivar` must be
    /// positive and finite, `exptime` must be non-negative and finite. Input arrays could be
    /// [`ndarray::Array1`], [`ndarray::ArrayView1`], 1-D [`ndarray::CowArray`], `Vec<T>` or `&[T]`.
    pub fn new(
        t: impl Into<DataSample<'a, T>>,
        flux: impl Into<DataSample<'a, T>>,
        ivar: impl Into<DataSample<'a, T>>,
        exptime: T,
    ) -> Result<Self, ObservationError> {
        let t = t.into();
        let flux = flux.into();
        let ivar = ivar.into();

        for (name, sample) in [("flux", &flux), ("inverse variance", &ivar)] {
            if sample.len() != t.len() {
                return Err(ObservationError::ShapeMismatch {
                    name,
                    expected: t.len(),
                    actual: sample.len(),
                });
            }
        }
        for (name, sample) in [("time", &t), ("flux", &flux)] {
            if let Some(index) = sample.position_not(|x| x.is_finite()) {
                return Err(ObservationError::NonFinite { name, index });
            }
        }
        if let Some(index) = ivar.position_not(|x| x.is_finite() && x > T::zero()) {
            return Err(ObservationError::NonPositiveInverseVariance { index });
        }
        if !(exptime.is_finite() && exptime >= T::zero()) {
            return Err(ObservationError::InvalidExposureTime);
        }

        Ok(Self {
            t,
            flux,
            ivar,
            exptime,
        })
    }

    /// Number of samples
    #[inline]
    pub fn lenu(&self) -> usize {
        self.t.len()
    }

    #[inline]
    pub fn t(&self) -> ArrayView1<'_, T> {
        self.t.view()
    }

    #[inline]
    pub fn flux(&self) -> ArrayView1<'_, T> {
        self.flux.view()
    }

    #[inline]
    pub fn ivar(&self) -> ArrayView1<'_, T> {
        self.ivar.view()
    }

    #[inline]
    pub fn exptime(&self) -> T {
        self.exptime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_inverse_variance() {
        let t: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let flux = vec![1.0; 100];
        let ivar = vec![1.0; 99];
        let err = Observation::new(&t, &flux, &ivar, 0.01).unwrap_err();
        assert_eq!(
            err,
            ObservationError::ShapeMismatch {
                name: "inverse variance",
                expected: 100,
                actual: 99,
            }
        );
    }

    #[test]
    fn mismatched_flux() {
        let t = [0.0_f64, 1.0, 2.0];
        let flux = [1.0, 1.0];
        let ivar = [1.0, 1.0, 1.0];
        let err = Observation::new(&t, &flux, &ivar, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ObservationError::ShapeMismatch { name: "flux", .. }
        ));
    }

    #[test]
    fn non_positive_inverse_variance() {
        let t = [0.0_f64, 1.0, 2.0];
        let flux = [1.0, 1.0, 1.0];
        let ivar = [1.0, 0.0, 1.0];
        assert_eq!(
            Observation::new(&t, &flux, &ivar, 0.0).unwrap_err(),
            ObservationError::NonPositiveInverseVariance { index: 1 }
        );
        let ivar = [1.0, 1.0, f64::INFINITY];
        assert_eq!(
            Observation::new(&t, &flux, &ivar, 0.0).unwrap_err(),
            ObservationError::NonPositiveInverseVariance { index: 2 }
        );
    }

    #[test]
    fn non_finite_flux() {
        let t = [0.0_f64, 1.0];
        let flux = [f64::NAN, 1.0];
        let ivar = [1.0, 1.0];
        assert_eq!(
            Observation::new(&t, &flux, &ivar, 0.0).unwrap_err(),
            ObservationError::NonFinite {
                name: "flux",
                index: 0
            }
        );
    }

    #[test]
    fn invalid_exposure_time() {
        let t = [0.0_f32];
        for exptime in [-1.0, f32::NAN, f32::INFINITY] {
            assert_eq!(
                Observation::new(&t, &t, &[1.0_f32], exptime).unwrap_err(),
                ObservationError::InvalidExposureTime
            );
        }
    }

    #[test]
    fn accessors() {
        let obs = Observation::new(vec![0.0_f64, 1.0], vec![1.0, 0.9], vec![4.0, 4.0], 0.5).unwrap();
        assert_eq!(obs.lenu(), 2);
        assert_eq!(obs.flux()[1], 0.9);
        assert_eq!(obs.ivar()[0], 4.0);
        assert_eq!(obs.exptime(), 0.5);
    }
}
