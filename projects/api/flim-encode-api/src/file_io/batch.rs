//! Encoding of many files at once.

use super::{try_encode_file, FileOperationResult};
use alloc::vec::Vec;
use flim_encode::{ConversionConfig, EncodeOutcome, SurfaceReader, TileEngine};
use std::path::Path;

/// Encode every file in `input_paths` with the same reader, engine and config.
///
/// With the `multithreaded` feature the files are encoded in parallel; otherwise one
/// after another. Results are returned in input order, and a failure only affects the
/// file it occurred in.
pub fn encode_batch<R, E, P>(
    reader: &R,
    engine: &E,
    input_paths: &[P],
    config: &ConversionConfig,
) -> Vec<FileOperationResult<EncodeOutcome>>
where
    R: SurfaceReader + Sync + ?Sized,
    E: TileEngine + Sync + ?Sized,
    P: AsRef<Path> + Sync,
{
    #[cfg(feature = "multithreaded")]
    {
        use rayon::prelude::*;

        input_paths
            .par_iter()
            // Files are independent and can be large; prefer maximum work stealing.
            .with_max_len(1)
            .map(|path| try_encode_file(reader, engine, path.as_ref(), config))
            .collect()
    }

    #[cfg(not(feature = "multithreaded"))]
    {
        input_paths
            .iter()
            .map(|path| try_encode_file(reader, engine, path.as_ref(), config))
            .collect()
    }
}
