use nalgebra::Point2;

use ::error::{RasterError, RasterResult};
use ::numeric::FloatScalar;

/// Number of grid cells per input coordinate unit.
///
/// A ratio of 2 puts grid points at every half unit, and a ratio of 0.5 at every two units.
/// Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRatio<T>(T);

impl<T> GridRatio<T> where T: FloatScalar {
    /// Throws `RasterError::InvalidGridRatio` for zero, negative or non-finite ratios.
    pub fn new(ratio: T) -> RasterResult<GridRatio<T>> {
        if ratio.is_finite() && ratio > T::zero() {
            Ok(GridRatio(ratio))
        } else {
            throw!(RasterError::InvalidGridRatio(ratio.to_f64().unwrap_or(::std::f64::NAN)));
        }
    }

    /// An omitted ratio means the default of 1. An explicit ratio must be valid.
    pub fn resolve(ratio: Option<T>) -> RasterResult<GridRatio<T>> {
        match ratio {
            Some(ratio) => GridRatio::new(ratio),
            None => Ok(GridRatio::default()),
        }
    }

    #[inline]
    pub fn get(&self) -> T { self.0 }

    /// Scale a point from input units to grid units
    #[inline]
    pub fn scale(&self, point: Point2<T>) -> Point2<T> {
        Point2::new(point.x * self.0, point.y * self.0)
    }
}

impl<T> Default for GridRatio<T> where T: FloatScalar {
    #[inline]
    fn default() -> GridRatio<T> {
        GridRatio(T::one())
    }
}
