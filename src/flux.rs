//! Flux JSON primitives
//!
//! Lines arrive as objects tagged with a `primitive` name:
//!
//! ```text
//! {"primitive": "polyline", "points": [[0, 0, 0], [1, 1, 0]]}
//! {"primitive": "curve", "controlPoints": [[0, 0], [1, 2], [2, 0]]}
//! ```
//!
//! and results go back out as `{"pixels": [[x, y], ...]}`.

use serde_json::Value;

use ::diagnostics::{Diagnostics, LogDiagnostics};
use ::error::{InputShapeError, RasterError, RasterResult};
use ::geometry::Coordinates;
use ::primitive::{LineInput, LineKind};
use ::rasterization::{rasterize_path_with, RasterizedPath};

/// Read a Flux polyline or curve object.
///
/// Anything other than an object with a known `primitive` tag and a list of points
/// for that tag throws `RasterError::InputShape`.
pub fn parse_line(value: &Value) -> RasterResult<LineInput<f64>> {
    let object = match *value {
        Value::Object(ref object) => object,
        _ => { throw!(RasterError::from(InputShapeError::NotAnObject)); }
    };

    let kind = match object.get("primitive") {
        None | Some(&Value::Null) => { throw!(RasterError::from(InputShapeError::MissingPrimitive)); }
        Some(&Value::String(ref tag)) => match LineKind::from_tag(tag) {
            Some(kind) => kind,
            None => { throw!(RasterError::from(InputShapeError::UnknownPrimitive(tag.clone()))); }
        },
        Some(other) => { throw!(RasterError::from(InputShapeError::UnknownPrimitive(other.to_string()))); }
    };

    let points = match object.get(kind.points_field()) {
        Some(&Value::Array(ref points)) => parse_points(points)?,
        _ => { throw!(RasterError::from(InputShapeError::MissingPoints(kind))); }
    };

    Ok(match kind {
        LineKind::Polyline => LineInput::Polyline { points },
        LineKind::Curve => LineInput::Curve { control_points: points },
    })
}

fn parse_points(points: &[Value]) -> RasterResult<Vec<Coordinates<f64>>> {
    let mut parsed = Vec::with_capacity(points.len());

    for (index, point) in points.iter().enumerate() {
        let components = match *point {
            Value::Array(ref components) => components.iter().map(Value::as_f64).collect::<Option<Vec<f64>>>(),
            _ => None,
        };

        match components {
            Some(ref components) if components.len() >= 2 => parsed.push(Coordinates::from(components.clone())),
            _ => { throw!(RasterError::from(InputShapeError::MalformedPoint { index })); }
        }
    }

    Ok(parsed)
}

/// Convert a rasterized path into `{"pixels": [[x, y], ...]}`
pub fn to_value(path: &RasterizedPath) -> Value {
    let pixels: Vec<Value> = path.iter().map(|pixel| json!([pixel.x, pixel.y])).collect();

    json!({ "pixels": pixels })
}

/// Parse and rasterize a Flux line, logging any notices.
pub fn run(value: &Value, grid_ratio: Option<f64>) -> RasterResult<Value> {
    run_with(value, grid_ratio, &LogDiagnostics)
}

pub fn run_with<D: ?Sized>(value: &Value, grid_ratio: Option<f64>, diagnostics: &D) -> RasterResult<Value> where D: Diagnostics {
    let line = parse_line(value)?;

    let path = rasterize_path_with(&line, grid_ratio, diagnostics)?;

    Ok(to_value(&path))
}
