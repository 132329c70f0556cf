use crate::float_trait::Float;
use crate::types::CowArray1;

use ndarray::{Array1, ArrayView1, Zip};

/// A single [`Observation`](crate::Observation) column
///
/// Borrows the input where possible: slices, vectors, and 1-D [`ndarray`] arrays and views
/// could be converted into it.
#[derive(Clone, Debug)]
pub struct DataSample<'a, T>
where
    T: Float,
{
    pub sample: CowArray1<'a, T>,
}

impl<'a, T> DataSample<'a, T>
where
    T: Float,
{
    pub fn new(sample: CowArray1<'a, T>) -> Self {
        Self { sample }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    #[inline]
    pub fn view(&self) -> ArrayView1<'_, T> {
        self.sample.view()
    }

    /// Index of the first value not satisfying `predicate`
    pub(crate) fn position_not(&self, predicate: impl Fn(T) -> bool) -> Option<usize> {
        self.sample.iter().position(|&x| !predicate(x))
    }

    /// Returns true if all values are finite. Always true for the empty sample
    pub fn is_all_finite(&self) -> bool {
        Zip::from(&self.sample).all(|x| x.is_finite())
    }
}

impl<'a, T, Slice: ?Sized> From<&'a Slice> for DataSample<'a, T>
where
    T: Float,
    Slice: AsRef<[T]>,
{
    fn from(s: &'a Slice) -> Self {
        ArrayView1::from(s).into()
    }
}

impl<'a, T> From<Vec<T>> for DataSample<'a, T>
where
    T: Float,
{
    fn from(v: Vec<T>) -> Self {
        Array1::from(v).into()
    }
}

impl<'a, T> From<ArrayView1<'a, T>> for DataSample<'a, T>
where
    T: Float,
{
    fn from(a: ArrayView1<'a, T>) -> Self {
        Self::new(a.into())
    }
}

impl<'a, T> From<Array1<T>> for DataSample<'a, T>
where
    T: Float,
{
    fn from(a: Array1<T>) -> Self {
        Self::new(a.into())
    }
}

impl<'a, T> From<CowArray1<'a, T>> for DataSample<'a, T>
where
    T: Float,
{
    fn from(a: CowArray1<'a, T>) -> Self {
        Self::new(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_borrows() {
        let x = [1.0_f64, 2.0, 3.0];
        let ds: DataSample<_> = DataSample::from(&x);
        assert!(ds.sample.is_view());
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn from_vec_owns() {
        let ds: DataSample<f32> = vec![1.0, 2.0].into();
        assert!(ds.sample.is_owned());
        assert!(!ds.is_empty());
    }

    #[test]
    fn finiteness() {
        let ds: DataSample<f64> = vec![1.0, f64::NAN].into();
        assert!(!ds.is_all_finite());
        assert_eq!(ds.position_not(f64::is_finite), Some(1));

        let empty: DataSample<f64> = Vec::new().into();
        assert!(empty.is_all_finite());
    }
}
