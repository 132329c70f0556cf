use crate::float_trait::Float;

/// Iterator over `(sin, cos)` of an arithmetic progression of angles
///
/// Yields `sin(first), cos(first)` and then advances the angle by `step` with a rotation, so
/// only two pairs of trigonometric functions are evaluated however many angles are taken. The
/// rounding error grows linearly with the number of steps, it is negligible for the short
/// progressions of an exposure grid.
pub struct RecurrentSinCos<T> {
    increment: (T, T),
    current: (T, T),
}

impl<T: Float> RecurrentSinCos<T> {
    pub fn new(first: T, step: T) -> Self {
        Self {
            increment: step.sin_cos(),
            current: first.sin_cos(),
        }
    }
}

impl<T: Float> Iterator for RecurrentSinCos<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        let previous = self.current;
        let (sin_step, cos_step) = self.increment;
        let (sin, cos) = self.current;
        self.current = (sin_step * cos + cos_step * sin, cos_step * cos - sin_step * sin);
        Some(previous)
    }
}
