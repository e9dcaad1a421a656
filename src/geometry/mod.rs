//! Grid and input geometry structures

pub mod pixel;
pub mod coordinate;
pub mod ratio;

pub use self::pixel::Pixel;
pub use self::coordinate::Coordinates;
pub use self::ratio::GridRatio;
