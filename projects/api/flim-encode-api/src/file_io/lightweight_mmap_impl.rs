//! File I/O implementation using lightweight-mmap.

use crate::api::try_encode_slice;
use crate::file_io::FileOperationResult;
use alloc::vec::Vec;
use flim_encode::{ConversionConfig, EncodeOutcome, SurfaceReader, TileEngine};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Encode a file using a specific reader and tile engine.
///
/// The input file is memory mapped and passed to [`try_encode_slice`].
///
/// # Arguments
///
/// * `reader` - Reads the surface from the input file
/// * `engine` - Computes the tiled layout and swizzles the data
/// * `input_path` - Path to the input file
/// * `config` - Tile mode, swizzle value and sRGB hint
///
/// # Returns
///
/// The encoded texture, or an I/O or encode error. A file the reader rejects
/// fails with [`flim_encode::EncodeError::SourceUnreadable`].
pub fn try_encode_file<R, E>(
    reader: &R,
    engine: &E,
    input_path: &Path,
    config: &ConversionConfig,
) -> FileOperationResult<EncodeOutcome>
where
    R: SurfaceReader + ?Sized,
    E: TileEngine + ?Sized,
{
    let input_handle = ReadOnlyFileHandle::open(input_path)?;
    let input_size = input_handle.size()? as usize;

    // Empty files cannot be mapped.
    if input_size == 0 {
        return Ok(try_encode_slice(reader, engine, &[], config)?);
    }

    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;
    Ok(try_encode_slice(
        reader,
        engine,
        input_mapping.as_slice(),
        config,
    )?)
}

/// Encode a file, returning an empty buffer if it cannot be opened or encoded.
///
/// Out of range `tile_mode` and `swizzle` values fall back to their defaults
/// (2D tiled thin1, swizzle 0). The reason for an empty result is logged at `warn` level.
///
/// # Arguments
///
/// * `reader` - Reads the surface from the input file
/// * `engine` - Computes the tiled layout and swizzles the data
/// * `input_path` - Path to the input file
/// * `tile_mode` - Raw GX2 tile mode, `0..=16`
/// * `swizzle` - Swizzle value, `0..=7`
/// * `srgb` - Passed to the reader to select sRGB formats
pub fn encode<R, E>(
    reader: &R,
    engine: &E,
    input_path: &Path,
    tile_mode: u32,
    swizzle: u32,
    srgb: bool,
) -> Vec<u8>
where
    R: SurfaceReader + ?Sized,
    E: TileEngine + ?Sized,
{
    let config = ConversionConfig::from_raw(tile_mode, swizzle, srgb);
    match try_encode_file(reader, engine, input_path, &config) {
        Ok(outcome) => outcome.texture.into_bytes(),
        Err(error) => {
            tracing::warn!("{} was not encoded: {error}", input_path.display());
            Vec::new()
        }
    }
}

/// Encode a file and write the FLIM file to `output_path`.
///
/// # Arguments
///
/// * `reader` - Reads the surface from the input file
/// * `engine` - Computes the tiled layout and swizzles the data
/// * `input_path` - Path to the input file
/// * `output_path` - Path to the output file (will be created). The output directory must exist.
/// * `config` - Tile mode, swizzle value and sRGB hint
///
/// # Returns
///
/// The encoding outcome; nothing is written if encoding fails.
pub fn encode_file_to_file<R, E>(
    reader: &R,
    engine: &E,
    input_path: &Path,
    output_path: &Path,
    config: &ConversionConfig,
) -> FileOperationResult<EncodeOutcome>
where
    R: SurfaceReader + ?Sized,
    E: TileEngine + ?Sized,
{
    let outcome = try_encode_file(reader, engine, input_path, config)?;
    write_slice_to_file(outcome.texture.as_bytes(), output_path)?;
    Ok(outcome)
}

/// Write `data` to a new file at `output_path` through a memory mapping.
///
/// `data` must not be empty.
pub(crate) fn write_slice_to_file(data: &[u8], output_path: &Path) -> FileOperationResult<()> {
    let output_handle = ReadWriteFileHandle::create_preallocated(output_path, data.len() as i64)?;
    let mut output_mapping = ReadWriteMmap::new(&output_handle, 0, data.len())?;
    output_mapping.as_mut_slice().copy_from_slice(data);
    Ok(())
}
