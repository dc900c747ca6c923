//! Conversion of a whole surface, from format translation to the packed container.

use crate::channel::{validate_and_correct, ChannelCorrection, ChannelWarning};
use crate::config::ConversionConfig;
use crate::container::{pack_container, ContainerParams, EncodedTexture};
use crate::error::{EncodeError, EncodeResult};
use crate::format::{translate_surface_format, FlimFormat, SurfaceFormat};
use crate::surface::SurfaceDescriptor;
use crate::tile::{swizzle_encoding, SwizzleRequest, TileEngine};
use alloc::vec::Vec;

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOutcome {
    /// The finished FLIM file.
    pub texture: EncodedTexture,
    /// FLIM format the surface was encoded as.
    pub format: FlimFormat,
    /// How the channel ordering was handled.
    pub channel_correction: ChannelCorrection,
}

impl EncodeOutcome {
    /// Set if the channel selector did not match the format and colors may be wrong.
    pub fn channel_warning(&self) -> Option<ChannelWarning> {
        self.channel_correction.warning()
    }
}

/// Encodes a surface into a FLIM file.
///
/// Only mip level 0 is encoded; trailing mip data is discarded.
///
/// # Parameters
///
/// - `engine`: computes the tiled layout and swizzles the pixel data
/// - `surface`: the source surface
/// - `config`: tile mode and swizzle value of the output
///
/// # Errors
///
/// - [`EncodeError::SourceUnreadable`] if the surface has zero dimensions or no data
/// - [`EncodeError::UnsupportedFormat`] if the GX2 format has no FLIM counterpart
/// - [`EncodeError::DimensionsTooLarge`] if the surface is wider or taller than 65535
/// - [`EncodeError::UnsupportedDepth`] if the engine resolves a layout deeper than 1
/// - [`EncodeError::PayloadTooLarge`] if the swizzled data does not fit the container
///
/// A channel selector that does not match the format is not an error; it is reported
/// through [`EncodeOutcome::channel_warning`].
pub fn try_encode_surface<E: TileEngine + ?Sized>(
    engine: &E,
    surface: &SurfaceDescriptor,
    config: &ConversionConfig,
) -> EncodeResult<EncodeOutcome> {
    if !surface.is_readable() {
        return Err(EncodeError::SourceUnreadable);
    }

    let (width, height) = (surface.width, surface.height);
    let surface_format = SurfaceFormat::from_raw(surface.format_code)
        .ok_or(EncodeError::UnsupportedFormat(surface.format_code))?;
    let format = translate_surface_format(surface_format, surface.fourcc, surface.channel_selector);
    tracing::debug!("Encoding {width}x{height} {surface_format:?} surface as {format:?}");

    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(EncodeError::DimensionsTooLarge { width, height });
    }

    let mut pixels = surface.base_level().to_vec();
    let channel_correction = validate_and_correct(format, surface.channel_selector, &mut pixels);

    let layout = engine.resolve_layout(surface_format, width, height, config.tile_mode);
    tracing::debug!("Resolved layout {layout:?}");
    if layout.depth != 1 {
        return Err(EncodeError::UnsupportedDepth(layout.depth));
    }

    pixels.resize(layout.surface_size, 0);

    let swizzled = engine.swizzle(&SwizzleRequest {
        width,
        height,
        tiled_height: layout.tiled_height,
        format: surface_format,
        tile_mode: layout.tile_mode,
        swizzle: swizzle_encoding(config.tile_mode, config.swizzle),
        pitch: layout.pitch,
        bits_per_pixel: layout.bits_per_pixel,
        data: &pixels,
    });

    let texture = pack_container(
        swizzled,
        &ContainerParams {
            width,
            height,
            format,
            swizzle: config.swizzle,
            tile_mode: config.tile_mode,
            bits_per_pixel: layout.bits_per_pixel,
            surface_size: layout.surface_size,
        },
    )?;

    Ok(EncodeOutcome {
        texture,
        format,
        channel_correction,
    })
}

/// Encodes a surface into a FLIM file, returning an empty buffer if it cannot be encoded.
///
/// This is [`try_encode_surface`] with the error logged at `warn` level and replaced by an
/// empty result.
pub fn encode_surface<E: TileEngine + ?Sized>(
    engine: &E,
    surface: &SurfaceDescriptor,
    config: &ConversionConfig,
) -> Vec<u8> {
    match try_encode_surface(engine, surface, config) {
        Ok(outcome) => outcome.texture.into_bytes(),
        Err(error) => {
            tracing::warn!("Surface was not encoded: {error}");
            Vec::new()
        }
    }
}
