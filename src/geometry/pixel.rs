use serde::ser::{Serialize, Serializer};

/// Integer grid coordinate produced by rasterization.
///
/// This is a grid cell, not a color sample.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pixel {
    pub x: i64,
    pub y: i64,
}

impl Pixel {
    #[inline]
    pub fn new(x: i64, y: i64) -> Pixel {
        Pixel { x, y }
    }

    /// Checks if `other` is at most one grid step away on each axis.
    ///
    /// A pixel is considered its own neighbor.
    #[inline]
    pub fn is_neighbor(&self, other: &Pixel) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl From<(i64, i64)> for Pixel {
    #[inline]
    fn from((x, y): (i64, i64)) -> Pixel {
        Pixel::new(x, y)
    }
}

impl From<Pixel> for (i64, i64) {
    #[inline]
    fn from(pixel: Pixel) -> (i64, i64) {
        (pixel.x, pixel.y)
    }
}

/// Pixels serialize as `[x, y]`
impl Serialize for Pixel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        (self.x, self.y).serialize(serializer)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_neighbors() {
        let p = Pixel::new(3, -2);

        assert!(p.is_neighbor(&Pixel::new(4, -1)));
        assert!(p.is_neighbor(&Pixel::new(3, -3)));
        assert!(p.is_neighbor(&p));
        assert!(!p.is_neighbor(&Pixel::new(5, -2)));
        assert!(!p.is_neighbor(&Pixel::new(3, 0)));
    }

    #[test]
    fn test_serialize_as_pair() {
        let json = ::serde_json::to_string(&Pixel::new(-1, 7)).unwrap();

        assert_eq!(json, "[-1,7]");
    }
}
