use crate::error::ModelError;
use crate::float_trait::Float;

/// Midpoint-rule grid over a single exposure window
///
/// `k` offsets `-exptime / 2 + (j + 1/2) exptime / k`, `j = 0..k`, symmetric around the
/// exposure centre and uniformly weighted. Zero `exptime` gives `k` coincident samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExposureGrid<T> {
    first: T,
    step: T,
    k: usize,
}

impl<T: Float> ExposureGrid<T> {
    pub fn new(exptime: T, k: usize) -> Result<Self, ModelError> {
        if k == 0 {
            return Err(ModelError::ZeroOversampling);
        }
        let step = exptime / T::from_count(k);
        Ok(Self {
            first: T::half() * (step - exptime),
            step,
            k,
        })
    }

    /// Offset of the first sample from the exposure centre
    #[inline]
    pub fn first(&self) -> T {
        self.first
    }

    /// Distance between adjacent samples
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.k == 0
    }

    /// Uniform quadrature weight of a single sample
    #[inline]
    pub fn weight(&self) -> T {
        T::from_count(self.k).recip()
    }

    pub fn offsets(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.k).map(move |j| self.first + self.step * T::from_count(j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn symmetric_midpoints() {
        let grid = ExposureGrid::new(1.0_f64, 4).unwrap();
        let offsets: Vec<_> = grid.offsets().collect();
        assert_relative_eq!(&offsets[..], &[-0.375, -0.125, 0.125, 0.375][..]);
        assert_relative_eq!(grid.weight(), 0.25);
    }

    #[test]
    fn odd_grid_has_central_sample() {
        let exptime = 27.0 / 1440.0;
        let grid = ExposureGrid::new(exptime, 21).unwrap();
        let offsets: Vec<f64> = grid.offsets().collect();
        assert_eq!(offsets.len(), 21);
        assert_relative_eq!(offsets[10], 0.0, epsilon = 1e-15);
        assert_relative_eq!(offsets[0], -offsets[20], epsilon = 1e-15);
        assert!(offsets[20] < 0.5 * exptime);
    }

    #[test]
    fn zero_exposure() {
        let grid = ExposureGrid::new(0.0_f32, 5).unwrap();
        assert!(grid.offsets().all(|x| x == 0.0));
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn zero_oversampling() {
        assert_eq!(
            ExposureGrid::new(1.0_f64, 0).unwrap_err(),
            ModelError::ZeroOversampling
        );
    }
}
