//! Batch rasterization across worker threads

use std::cmp;

use scoped_threadpool::Pool;

use ::diagnostics::Diagnostics;
use ::error::RasterResult;
use ::numeric::FloatScalar;
use ::primitive::LineInput;
use ::rasterization::{rasterize_path_with, RasterizedPath};

/// Rasterize independent lines on up to `threads` workers.
///
/// Results are in the same order as `lines`, and one line failing doesn't affect the others.
/// Every worker shares `diagnostics`.
pub fn rasterize_batch<T, D: ?Sized>(lines: &[LineInput<T>],
                                     grid_ratio: Option<T>,
                                     diagnostics: &D,
                                     threads: usize) -> Vec<RasterResult<RasterizedPath>> where T: FloatScalar,
                                                                                               D: Diagnostics {
    let threads = cmp::min(cmp::max(1, threads), lines.len());

    if threads <= 1 {
        return lines.iter().map(|line| rasterize_path_with(line, grid_ratio, diagnostics)).collect();
    }

    // Contiguous chunks, so each worker writes its own slice of the results
    let chunk_size = (lines.len() + threads - 1) / threads;

    let mut results: Vec<Option<RasterResult<RasterizedPath>>> = lines.iter().map(|_| None).collect();

    let mut pool = Pool::new(threads as u32);

    pool.scoped(|scope| {
        for (inputs, outputs) in lines.chunks(chunk_size).zip(results.chunks_mut(chunk_size)) {
            scope.execute(move || {
                for (line, output) in inputs.iter().zip(outputs.iter_mut()) {
                    *output = Some(rasterize_path_with(line, grid_ratio, diagnostics));
                }
            });
        }
    });

    debug!("Rasterized {} lines on {} threads", lines.len(), threads);

    results.into_iter().filter_map(|result| result).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    use ::diagnostics::{NullDiagnostics, RecordingDiagnostics};
    use ::rasterization::rasterize_path;

    #[test]
    fn test_batch_preserves_order() {
        let lines: Vec<LineInput<f64>> = (0..37).map(|i| {
            let i = i as f64;
            LineInput::polyline(vec![[0.0, 0.0], [i, i * 0.5], [i * 2.0, -i]])
        }).collect();

        let results = rasterize_batch(&lines, Some(1.5), &NullDiagnostics, 4);

        assert_eq!(results.len(), lines.len());

        for (line, result) in lines.iter().zip(results) {
            assert_eq!(result.unwrap(), rasterize_path(line, Some(1.5)).unwrap());
        }
    }

    #[test]
    fn test_batch_errors_stay_local() {
        let lines = vec![
            LineInput::polyline(vec![vec![0.0, 0.0], vec![3.0, 3.0]]),
            LineInput::polyline(vec![vec![0.0, 0.0], vec![3.0]]),
            LineInput::curve(vec![vec![1.0, 1.0], vec![1.0, 2.0]]),
        ];

        let recorder = RecordingDiagnostics::new();

        let results = rasterize_batch(&lines, None, &recorder, 3);

        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().len(), 2);
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let lines: Vec<LineInput<f32>> = Vec::new();

        assert!(rasterize_batch(&lines, None, &NullDiagnostics, 8).is_empty());
    }
}
