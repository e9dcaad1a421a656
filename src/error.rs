//! Error types

use std::error::Error;
use std::fmt;

use trace_error::TraceResult;

use ::primitive::LineKind;

/// Ways a line input can fail to describe a rasterizable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum InputShapeError {
    /// The input was not an object at all, such as a bare array.
    NotAnObject,
    /// No `primitive` tag was given.
    MissingPrimitive,
    /// The `primitive` tag names a shape that can't be rasterized.
    UnknownPrimitive(String),
    /// The tag was recognized, but its point field is absent or not a list.
    MissingPoints(LineKind),
    /// The point at `index` is not a list of at least two numbers.
    MalformedPoint { index: usize },
}

impl fmt::Display for InputShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InputShapeError::NotAnObject => write!(f, "Input must be a polyline or curve object"),
            InputShapeError::MissingPrimitive => write!(f, "Input has no primitive tag"),
            InputShapeError::UnknownPrimitive(ref tag) => write!(f, "Unknown primitive {:?}, expected polyline or curve", tag),
            InputShapeError::MissingPoints(kind) => write!(f, "{} input requires a {} list", kind, kind.points_field()),
            InputShapeError::MalformedPoint { index } => write!(f, "Point {} must have at least x and y coordinates", index),
        }
    }
}

impl Error for InputShapeError {}

#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// The line input has no recognized shape
    InputShape(InputShapeError),
    /// Gridding ratios must be positive and finite
    InvalidGridRatio(f64),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RasterError::InputShape(ref err) => write!(f, "Invalid line input: {}", err),
            RasterError::InvalidGridRatio(ratio) => write!(f, "{} is not a valid gridding ratio", ratio),
        }
    }
}

impl Error for RasterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            RasterError::InputShape(ref err) => Some(err),
            RasterError::InvalidGridRatio(_) => None,
        }
    }
}

impl From<InputShapeError> for RasterError {
    #[inline]
    fn from(err: InputShapeError) -> RasterError {
        RasterError::InputShape(err)
    }
}

pub type RasterResult<T> = TraceResult<T, RasterError>;
