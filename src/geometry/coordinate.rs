use nalgebra::Point2;
use smallvec::SmallVec;

use ::numeric::FloatScalar;

/// Raw coordinates of a single input point.
///
/// Input points can carry any number of components, but only the first two, `x` and `y`,
/// take part in rasterization. A trailing `z`, or anything after it, is kept but never read.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates<T>(SmallVec<[T; 3]>);

impl<T> Coordinates<T> where T: FloatScalar {
    pub fn new<I>(components: I) -> Coordinates<T> where I: IntoIterator<Item = T> {
        Coordinates(components.into_iter().collect())
    }

    /// Number of components, including any ignored ones
    #[inline]
    pub fn len(&self) -> usize { self.0.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// The `x, y` plane position of this point, or `None` if it has fewer than two components.
    #[inline]
    pub fn to_point2(&self) -> Option<Point2<T>> {
        match *self.0.as_slice() {
            [x, y, ..] => Some(Point2::new(x, y)),
            _ => None,
        }
    }
}

impl<T> From<[T; 2]> for Coordinates<T> where T: FloatScalar {
    fn from(xy: [T; 2]) -> Coordinates<T> {
        Coordinates(SmallVec::from_slice(&xy))
    }
}

impl<T> From<[T; 3]> for Coordinates<T> where T: FloatScalar {
    fn from(xyz: [T; 3]) -> Coordinates<T> {
        Coordinates(SmallVec::from_slice(&xyz))
    }
}

impl<T> From<(T, T)> for Coordinates<T> where T: FloatScalar {
    fn from((x, y): (T, T)) -> Coordinates<T> {
        Coordinates::from([x, y])
    }
}

impl<T> From<Vec<T>> for Coordinates<T> where T: FloatScalar {
    fn from(components: Vec<T>) -> Coordinates<T> {
        Coordinates(SmallVec::from_vec(components))
    }
}

impl<T> From<Point2<T>> for Coordinates<T> where T: FloatScalar {
    fn from(point: Point2<T>) -> Coordinates<T> {
        Coordinates::from([point.x, point.y])
    }
}
