use std::fmt::Debug;

use nalgebra::Scalar;

pub mod utils;

pub use num_traits::Float;

/// Coordinate type accepted for input geometry, usually `f32` or `f64`.
pub trait FloatScalar: Float + Scalar + Debug + Send + Sync {}

impl<T> FloatScalar for T where T: Float + Scalar + Debug + Send + Sync {}
