//! Bresenham rasterization of 2D vector lines onto an integer grid
//!
//! [Documentation](https://docs.rs/linegrid/)
//!
//! ### Example:
//!
//! ```
//! use linegrid::{LineInput, Pixel, rasterize_path};
//!
//! let line = LineInput::polyline(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
//!
//! let path = rasterize_path(&line, Some(2.0)).unwrap();
//!
//! assert_eq!(path.pixels, vec![Pixel::new(0, 0), Pixel::new(1, 0), Pixel::new(2, 0),
//!                              Pixel::new(2, 1), Pixel::new(2, 2)]);
//! ```
//!
//! ### Current Features:
//!
//! * Single segment rasterization with Bresenham's algorithm, in all octants.
//! * Real-valued endpoints, rounded onto the grid before stepping.
//! * Polylines and curves (as their control polygon) stitched into one continuous path,
//! with no repeated pixel at segment joins.
//! * Gridding ratio to sample lines more or less densely than their input units.
//! * Only `x` and `y` are read from input points. Any `z` or further components are ignored.
//! * Pluggable diagnostics, logging through the `log` crate by default.
//! * Flux JSON primitive input and `{"pixels": [...]}` output.
//! * Batch rasterization of many lines across a thread pool.
//!
//! ### Known Limitations
//!
//! #### Half-integer endpoints
//!
//! Each endpoint coordinate is rounded onto the grid on its own, halves going toward positive infinity,
//! before any stepping happens. Near `.5` offsets the chosen cells follow that rounding
//! rather than the true distance to the line.

#![allow(dead_code)]

extern crate num_traits;
extern crate nalgebra;
extern crate smallvec;
extern crate num_cpus;
extern crate parking_lot;
extern crate scoped_threadpool;
extern crate serde;

#[macro_use]
extern crate serde_json;

#[macro_use]
extern crate log;

#[macro_use]
extern crate trace_error;

pub mod error;
pub mod numeric;
pub mod geometry;
pub mod primitive;
pub mod diagnostics;
pub mod rasterization;
pub mod options;
pub mod parallel;
pub mod flux;

pub use error::{RasterError, RasterResult, InputShapeError};
pub use geometry::{Pixel, Coordinates, GridRatio};
pub use primitive::{LineInput, LineKind};
pub use diagnostics::{Diagnostics, Notice, LogDiagnostics, NullDiagnostics, RecordingDiagnostics};
pub use rasterization::{plot_segment, rasterize_segment,
                        rasterize_path, rasterize_path_with,
                        RasterizedPath};
pub use options::{RasterOptions, Rasterizer};
pub use parallel::rasterize_batch;
