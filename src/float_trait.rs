use conv::prelude::*;
use ndarray::{NdFloat, ScalarOperand};
use num_traits::{FloatConst, NumAssignOps};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// Floating point trait used by the forward model, implemented for [f32] and [f64]
pub trait Float:
    'static
    + Sized
    + num_traits::Float
    + FloatConst
    + NumAssignOps
    + NdFloat
    + ScalarOperand
    + ApproxFrom<usize>
    + ValueInto<f64>
    + Sum
    + Debug
    + Display
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + JsonSchema
{
    fn half() -> Self;

    fn two() -> Self;

    /// Approximate conversion from a count, exact for every count the model uses
    #[inline]
    fn from_count(n: usize) -> Self {
        n.approx().unwrap()
    }
}

impl Float for f32 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }
}

impl Float for f64 {
    #[inline]
    fn half() -> Self {
        0.5
    }

    #[inline]
    fn two() -> Self {
        2.0
    }
}
