use std::slice;

use serde::ser::{Serialize, Serializer, SerializeStruct};

use ::error::{RasterError, RasterResult, InputShapeError};
use ::diagnostics::{Diagnostics, LogDiagnostics, Notice};
use ::geometry::{GridRatio, Pixel};
use ::numeric::FloatScalar;
use ::primitive::LineInput;

use super::segment::plot_segment;

/// One continuous run of pixels covering every segment of a line.
///
/// No two adjacent pixels are the same cell.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RasterizedPath {
    pub pixels: Vec<Pixel>,
}

impl RasterizedPath {
    #[inline]
    pub fn len(&self) -> usize { self.pixels.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.pixels.is_empty() }

    #[inline]
    pub fn iter(&self) -> slice::Iter<Pixel> { self.pixels.iter() }

    #[inline]
    pub fn into_pixels(self) -> Vec<Pixel> { self.pixels }

    /// Checks that each pixel is exactly one grid step from the one before it.
    pub fn is_connected(&self) -> bool {
        self.pixels.windows(2).all(|pair| pair[0] != pair[1] && pair[0].is_neighbor(&pair[1]))
    }
}

impl<'a> IntoIterator for &'a RasterizedPath {
    type Item = &'a Pixel;
    type IntoIter = slice::Iter<'a, Pixel>;

    fn into_iter(self) -> slice::Iter<'a, Pixel> { self.pixels.iter() }
}

/// Serializes as `{"pixels": [[x, y], ...]}`
impl Serialize for RasterizedPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("RasterizedPath", 1)?;
        state.serialize_field("pixels", &self.pixels)?;
        state.end()
    }
}

/// Rasterize a polyline, or a curve's control polygon, into one continuous path.
///
/// `grid_ratio` defaults to 1 when omitted. Curve notices are logged as warnings.
///
/// Throws `RasterError::InvalidGridRatio` for an explicit ratio that is zero, negative or not finite.
pub fn rasterize_path<T>(line: &LineInput<T>, grid_ratio: Option<T>) -> RasterResult<RasterizedPath> where T: FloatScalar {
    rasterize_path_with(line, grid_ratio, &LogDiagnostics)
}

/// Same as [`rasterize_path`](fn.rasterize_path.html), but sends notices to `diagnostics`.
pub fn rasterize_path_with<T, D: ?Sized>(line: &LineInput<T>,
                                         grid_ratio: Option<T>,
                                         diagnostics: &D) -> RasterResult<RasterizedPath> where T: FloatScalar,
                                                                                                D: Diagnostics {
    let ratio = GridRatio::resolve(grid_ratio)?;

    rasterize_scaled(line, ratio, diagnostics)
}

/// Rasterize a line with an already validated gridding ratio.
///
/// Each pair of consecutive points is scaled and rasterized as its own segment. Every segment
/// after the first starts on the cell the previous one ended on, so that cell is only kept once.
///
/// Throws `InputShapeError::MalformedPoint` if any point has fewer than two coordinates,
/// before anything is rasterized or any notice is sent.
pub fn rasterize_scaled<T, D: ?Sized>(line: &LineInput<T>,
                                      ratio: GridRatio<T>,
                                      diagnostics: &D) -> RasterResult<RasterizedPath> where T: FloatScalar,
                                                                                             D: Diagnostics {
    let mut scaled = Vec::with_capacity(line.points().len());

    for (index, coordinates) in line.points().iter().enumerate() {
        match coordinates.to_point2() {
            Some(point) => scaled.push(ratio.scale(point)),
            None => { throw!(RasterError::InputShape(InputShapeError::MalformedPoint { index })); }
        }
    }

    if let LineInput::Curve { ref control_points } = *line {
        diagnostics.notice(Notice::CurveApproximated { control_points: control_points.len() });
    }

    let mut pixels = Vec::new();

    for (i, segment) in scaled.windows(2).enumerate() {
        let mut shared_start = i > 0;

        plot_segment(segment[0], segment[1], |pixel| {
            if shared_start {
                shared_start = false;
            } else {
                pixels.push(pixel);
            }
        });
    }

    debug!("Rasterized {} with {} points into {} pixels", line.kind(), scaled.len(), pixels.len());

    Ok(RasterizedPath { pixels })
}
