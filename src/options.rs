//! Rasterizer configuration

use std::cmp;

use num_cpus;

use ::diagnostics::{Diagnostics, LogDiagnostics};
use ::error::RasterResult;
use ::numeric::FloatScalar;
use ::parallel::rasterize_batch;
use ::primitive::LineInput;
use ::rasterization::{rasterize_path_with, RasterizedPath};

/// Settings shared by every line a `Rasterizer` handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions<T> {
    grid_ratio: Option<T>,
    parallelism: usize,
}

impl<T> RasterOptions<T> where T: FloatScalar {
    /// Default gridding ratio of 1, and one worker thread per CPU for batches
    pub fn new() -> RasterOptions<T> {
        RasterOptions {
            grid_ratio: None,
            parallelism: num_cpus::get(),
        }
    }

    /// Set the number of grid cells per input coordinate unit.
    ///
    /// The ratio is validated when a line is rasterized.
    pub fn grid_ratio(mut self, ratio: T) -> RasterOptions<T> {
        self.grid_ratio = Some(ratio);
        self
    }

    /// Set the maximum number of worker threads used for batches. At least one is always used.
    pub fn parallelism(mut self, threads: usize) -> RasterOptions<T> {
        self.parallelism = cmp::max(1, threads);
        self
    }

    #[inline]
    pub fn get_grid_ratio(&self) -> Option<T> { self.grid_ratio }

    #[inline]
    pub fn get_parallelism(&self) -> usize { self.parallelism }
}

impl<T> Default for RasterOptions<T> where T: FloatScalar {
    fn default() -> RasterOptions<T> { RasterOptions::new() }
}

/// Rasterizes lines with fixed options, sending notices to a diagnostics sink.
pub struct Rasterizer<T, D = LogDiagnostics> {
    options: RasterOptions<T>,
    diagnostics: D,
}

impl<T> Rasterizer<T, LogDiagnostics> where T: FloatScalar {
    pub fn new(options: RasterOptions<T>) -> Rasterizer<T, LogDiagnostics> {
        Rasterizer { options, diagnostics: LogDiagnostics }
    }
}

impl<T, D> Rasterizer<T, D> where T: FloatScalar, D: Diagnostics {
    pub fn with_diagnostics(options: RasterOptions<T>, diagnostics: D) -> Rasterizer<T, D> {
        Rasterizer { options, diagnostics }
    }

    /// Returns a reference to the options
    pub fn options(&self) -> &RasterOptions<T> { &self.options }
    /// Returns a reference to the diagnostics sink
    pub fn diagnostics(&self) -> &D { &self.diagnostics }

    pub fn rasterize(&self, line: &LineInput<T>) -> RasterResult<RasterizedPath> {
        rasterize_path_with(line, self.options.grid_ratio, &self.diagnostics)
    }

    /// Rasterize many lines in parallel, returning results in input order
    pub fn rasterize_all(&self, lines: &[LineInput<T>]) -> Vec<RasterResult<RasterizedPath>> {
        rasterize_batch(lines, self.options.grid_ratio, &self.diagnostics, self.options.parallelism)
    }
}
