use std::fmt;

use ::geometry::Coordinates;
use ::numeric::FloatScalar;

/// Shapes of line input that can be rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Straight segments between consecutive points
    Polyline,
    /// A curve, rasterized only as its control polygon
    Curve,
}

impl LineKind {
    /// The primitive tag naming this shape
    pub fn tag(&self) -> &'static str {
        match *self {
            LineKind::Polyline => "polyline",
            LineKind::Curve => "curve",
        }
    }

    /// Name of the field holding this shape's points
    pub fn points_field(&self) -> &'static str {
        match *self {
            LineKind::Polyline => "points",
            LineKind::Curve => "controlPoints",
        }
    }

    pub fn from_tag(tag: &str) -> Option<LineKind> {
        match tag {
            "polyline" => Some(LineKind::Polyline),
            "curve" => Some(LineKind::Curve),
            _ => None,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A line to be rasterized.
#[derive(Debug, Clone, PartialEq)]
pub enum LineInput<T> {
    Polyline {
        points: Vec<Coordinates<T>>,
    },
    /// Only the straight lines between consecutive control points are rasterized,
    /// never the true curve.
    Curve {
        control_points: Vec<Coordinates<T>>,
    },
}

impl<T> LineInput<T> where T: FloatScalar {
    pub fn polyline<I, P>(points: I) -> LineInput<T> where I: IntoIterator<Item = P>,
                                                           P: Into<Coordinates<T>> {
        LineInput::Polyline { points: points.into_iter().map(Into::into).collect() }
    }

    pub fn curve<I, P>(control_points: I) -> LineInput<T> where I: IntoIterator<Item = P>,
                                                                P: Into<Coordinates<T>> {
        LineInput::Curve { control_points: control_points.into_iter().map(Into::into).collect() }
    }

    pub fn kind(&self) -> LineKind {
        match *self {
            LineInput::Polyline { .. } => LineKind::Polyline,
            LineInput::Curve { .. } => LineKind::Curve,
        }
    }

    /// The points connected by straight segments during rasterization
    pub fn points(&self) -> &[Coordinates<T>] {
        match *self {
            LineInput::Polyline { ref points } => points,
            LineInput::Curve { ref control_points } => control_points,
        }
    }
}
