//! Translation of GX2 surface formats into FLIM image formats.

use super::{FlimFormat, SurfaceFormat};
use crate::channel::{ChannelSelector, ComponentSource};
use crate::error::{EncodeError, EncodeResult};
use crate::surface::FourCC;

/// FourCC marking BC1-sized blocks that actually hold ETC1 data.
pub const FOURCC_ETC1: FourCC = FourCC(*b"ETC1");

/// Resolves the FLIM format for a raw GX2 surface format code.
///
/// Most formats map one-to-one. Three are ambiguous and use a secondary signal:
///
/// - `R8_UNORM`: an alpha slot sourced from the first channel means the data is alpha,
///   giving [`FlimFormat::A8`]; otherwise it is luminance, [`FlimFormat::L8`].
/// - `R8_G8_B8_A8_UNORM`: any slot fed by constant one drops alpha, giving
///   [`FlimFormat::Rgb8`]; otherwise [`FlimFormat::Rgba8`].
/// - `BC1_UNORM`: the [`FOURCC_ETC1`] tag gives [`FlimFormat::Etc1`]; otherwise
///   [`FlimFormat::Bc1`].
///
/// # Errors
///
/// [`EncodeError::UnsupportedFormat`] if `format_code` has no FLIM counterpart. The
/// conversion must be aborted.
pub fn resolve_flim_format(
    format_code: u32,
    fourcc: FourCC,
    selector: ChannelSelector,
) -> EncodeResult<FlimFormat> {
    let format =
        SurfaceFormat::from_raw(format_code).ok_or(EncodeError::UnsupportedFormat(format_code))?;
    Ok(translate_surface_format(format, fourcc, selector))
}

/// Infallible form of [`resolve_flim_format`] for an already validated [`SurfaceFormat`].
pub fn translate_surface_format(
    format: SurfaceFormat,
    fourcc: FourCC,
    selector: ChannelSelector,
) -> FlimFormat {
    match format {
        SurfaceFormat::R8Unorm => {
            if selector.alpha() == ComponentSource::Red {
                FlimFormat::A8
            } else {
                FlimFormat::L8
            }
        }
        SurfaceFormat::R8G8B8A8Unorm => {
            if selector.contains(ComponentSource::One) {
                FlimFormat::Rgb8
            } else {
                FlimFormat::Rgba8
            }
        }
        SurfaceFormat::Bc1Unorm => {
            if fourcc == FOURCC_ETC1 {
                FlimFormat::Etc1
            } else {
                FlimFormat::Bc1
            }
        }
        SurfaceFormat::R4G4Unorm => FlimFormat::La4,
        SurfaceFormat::R8G8Unorm => FlimFormat::La8,
        SurfaceFormat::R5G6B5Unorm => FlimFormat::Rgb565,
        SurfaceFormat::R5G5B5A1Unorm => FlimFormat::Rgb5a1,
        SurfaceFormat::R4G4B4A4Unorm => FlimFormat::Rgba4,
        SurfaceFormat::R10G10B10A2Unorm => FlimFormat::Rgb10a2,
        SurfaceFormat::R8G8B8A8Srgb => FlimFormat::Rgba8Srgb,
        SurfaceFormat::Bc1Srgb => FlimFormat::Bc1Srgb,
        SurfaceFormat::Bc2Unorm => FlimFormat::Bc2,
        SurfaceFormat::Bc2Srgb => FlimFormat::Bc2Srgb,
        SurfaceFormat::Bc3Unorm => FlimFormat::Bc3,
        SurfaceFormat::Bc3Srgb => FlimFormat::Bc3Srgb,
        SurfaceFormat::Bc4Unorm => FlimFormat::Bc4A,
        SurfaceFormat::Bc5Unorm => FlimFormat::Bc5,
    }
}
