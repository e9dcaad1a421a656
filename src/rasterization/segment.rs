use nalgebra::Point2;

use ::geometry::Pixel;
use ::numeric::FloatScalar;
use ::numeric::utils::to_grid;

/// Uses Bresenham's algorithm to walk the grid cells of a line, from `start` to `end`.
///
/// [http://members.chello.at/easyfilter/bresenham.pdf](http://members.chello.at/easyfilter/bresenham.pdf)
///
/// Endpoints are rounded onto the grid (halves toward positive infinity) before stepping,
/// so a call with real endpoints walks exactly like a call between the rounded ones.
/// Both rounded endpoints are always plotted, once, even when they are the same cell.
/// Every plotted cell is one step away from the last, horizontally, vertically or diagonally.
///
/// Nothing is plotted if an endpoint is not finite, lies outside the `i64` grid,
/// or is too far from the other endpoint for the error term to fit in an `i64`.
pub fn plot_segment<T, F>(start: Point2<T>, end: Point2<T>, plot: F) where T: FloatScalar,
                                                                           F: FnMut(Pixel) {
    match (to_grid(start.x), to_grid(start.y), to_grid(end.x), to_grid(end.y)) {
        (Some(x0), Some(y0), Some(x1), Some(y1)) => draw_line_bresenham(x0, y0, x1, y1, plot),
        _ => (),
    }
}

/// Absolute distance between two grid lines, if the doubled error term built from it can't overflow.
#[inline]
fn span(from: i64, to: i64) -> Option<i64> {
    let span = to.checked_sub(from)?.checked_abs()?;

    span.checked_mul(4).map(|_| span)
}

/// Integer Bresenham between two grid cells, valid in all octants.
///
/// Plots nothing if either axis spans more than a quarter of the `i64` range.
pub fn draw_line_bresenham<F>(mut x0: i64, mut y0: i64, x1: i64, y1: i64, mut plot: F) where F: FnMut(Pixel) {
    let (dx, dy) = match (span(x0, x1), span(y0, y1)) {
        (Some(dx), Some(dy)) => (dx, -dy),
        _ => return,
    };

    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx + dy;

    // dy <= 0 <= dx, so every iteration either steps or stops
    loop {
        plot(Pixel::new(x0, y0));

        let e2 = 2 * err;

        if e2 >= dy {
            if x0 == x1 { break; }

            err += dy;
            x0 += sx;
        }

        if e2 <= dx {
            if y0 == y1 { break; }

            err += dx;
            y0 += sy;
        }
    }
}

/// Rasterize a single segment into the ordered grid cells along it.
///
/// See [`plot_segment`](fn.plot_segment.html) for how endpoints are treated.
pub fn rasterize_segment<T>(start_x: T, start_y: T, end_x: T, end_y: T) -> Vec<Pixel> where T: FloatScalar {
    let mut pixels = Vec::new();

    plot_segment(Point2::new(start_x, start_y), Point2::new(end_x, end_y), |pixel| pixels.push(pixel));

    pixels
}

#[cfg(test)]
mod test {
    use super::*;

    fn pixels(coords: &[(i64, i64)]) -> Vec<Pixel> {
        coords.iter().cloned().map(Pixel::from).collect()
    }

    #[test]
    fn test_diagonal_unit_lines() {
        assert_eq!(rasterize_segment(0.0, 0.0, 1.0, 1.0), pixels(&[(0, 0), (1, 1)]));
        assert_eq!(rasterize_segment(1.0, 1.0, 0.0, 0.0), pixels(&[(1, 1), (0, 0)]));
        assert_eq!(rasterize_segment(1.0, 0.0, 0.0, 1.0), pixels(&[(1, 0), (0, 1)]));
        assert_eq!(rasterize_segment(0.0, 1.0, 1.0, 0.0), pixels(&[(0, 1), (1, 0)]));
    }

    #[test]
    fn test_axis_aligned_lines() {
        assert_eq!(rasterize_segment(0.0, 0.0, 1.0, 0.0), pixels(&[(0, 0), (1, 0)]));
        assert_eq!(rasterize_segment(0.0, 0.0, 0.0, 1.0), pixels(&[(0, 0), (0, 1)]));
        assert_eq!(rasterize_segment(3.0, 2.0, 0.0, 2.0), pixels(&[(3, 2), (2, 2), (1, 2), (0, 2)]));
        assert_eq!(rasterize_segment(-1.0, 1.0, -1.0, -1.0), pixels(&[(-1, 1), (-1, 0), (-1, -1)]));
    }

    #[test]
    fn test_partial_overlap() {
        assert_eq!(rasterize_segment(0.0, 0.0, 5.0, 4.0),
                   pixels(&[(0, 0), (1, 1), (2, 2), (3, 2), (4, 3), (5, 4)]));

        assert_eq!(rasterize_segment(5.0, 4.0, 0.0, 0.0),
                   pixels(&[(5, 4), (4, 3), (3, 2), (2, 2), (1, 1), (0, 0)]));
    }

    #[test]
    fn test_single_point() {
        assert_eq!(rasterize_segment(0.0, 0.0, 0.0, 0.0), pixels(&[(0, 0)]));
        assert_eq!(rasterize_segment(2.2f32, -3.4, 1.8, -2.6), pixels(&[(2, -3)]));
    }

    #[test]
    fn test_non_integer_endpoints() {
        assert_eq!(rasterize_segment(0.0, 0.49, 1.0, 0.49), pixels(&[(0, 0), (1, 0)]));
        assert_eq!(rasterize_segment(0.0, 0.51, 1.0, 0.51), pixels(&[(0, 1), (1, 1)]));
        assert_eq!(rasterize_segment(0.0, 0.49, 1.0, 1.49), pixels(&[(0, 0), (1, 1)]));
        assert_eq!(rasterize_segment(0.49, 0.0, 0.49, 1.0), pixels(&[(0, 0), (0, 1)]));
        assert_eq!(rasterize_segment(0.51, 0.0, 0.51, 1.0), pixels(&[(1, 0), (1, 1)]));
        assert_eq!(rasterize_segment(0.49, 0.0, 1.49, 1.0), pixels(&[(0, 0), (1, 1)]));
    }

    // Used to come out one cell off when the error term was seeded from unrounded deltas.
    #[test]
    fn test_half_integer_regressions() {
        assert_eq!(rasterize_segment(0.0, 0.51, 1.0, 1.49), pixels(&[(0, 1), (1, 1)]));
        assert_eq!(rasterize_segment(0.0, 0.49, 2.0, 1.0), pixels(&[(0, 0), (1, 1), (2, 1)]));
        assert_eq!(rasterize_segment(0.0, 0.51, 2.0, 0.0), pixels(&[(0, 1), (1, 0), (2, 0)]));
        assert_eq!(rasterize_segment(0.0, 0.49, 3.0, 0.51), pixels(&[(0, 0), (1, 0), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_steps_are_connected() {
        let ends = [(0.0, 0.0), (7.0, 3.0), (-4.0, 9.0), (-6.3, -2.7), (2.5, -8.5), (0.4, 0.6)];

        for &(x0, y0) in &ends {
            for &(x1, y1) in &ends {
                let line = rasterize_segment(x0, y0, x1, y1);

                assert_eq!(line[0], Pixel::new(to_grid(x0).unwrap(), to_grid(y0).unwrap()));
                assert_eq!(line[line.len() - 1], Pixel::new(to_grid(x1).unwrap(), to_grid(y1).unwrap()));

                let (dx, dy) = (line[0].x.abs_diff(line[line.len() - 1].x),
                                line[0].y.abs_diff(line[line.len() - 1].y));

                assert_eq!(line.len() as u64, ::std::cmp::max(dx, dy) + 1);

                for pair in line.windows(2) {
                    assert!(pair[0].is_neighbor(&pair[1]));
                    assert!(pair[0] != pair[1]);
                }
            }
        }
    }

    #[test]
    fn test_non_finite_plots_nothing() {
        assert!(rasterize_segment(::std::f64::NAN, 0.0, 1.0, 1.0).is_empty());
        assert!(rasterize_segment(0.0, 0.0, ::std::f64::INFINITY, 1.0).is_empty());
    }

    #[test]
    fn test_overflowing_span_plots_nothing() {
        let mut plotted = 0;

        plot_segment(Point2::new(-5e18f64, 0.0), Point2::new(5e18, 0.0), |_| plotted += 1);
        assert_eq!(plotted, 0);

        assert!(rasterize_segment(0.0, -5e18f64, 0.0, 5e18).is_empty());
        assert!(rasterize_segment(0.0, 0.0, 3e18f64, 1.0).is_empty());

        let mut last = None;
        draw_line_bresenham(::std::i64::MAX - 2, ::std::i64::MIN, ::std::i64::MAX, ::std::i64::MIN + 1, |p| last = Some(p));
        assert_eq!(last, Some(Pixel::new(::std::i64::MAX, ::std::i64::MIN + 1)));
    }
}
