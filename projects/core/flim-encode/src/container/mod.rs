//! FLIM container serialization.
//!
//! A FLIM file is the swizzled payload, followed by the FLIM header and the `imag`
//! descriptor. See [`header`] for the exact layout.

pub mod header;
mod swizzle_tile_mode;

pub use header::*;
pub use swizzle_tile_mode::*;

use crate::config::{SwizzleValue, TileMode};
use crate::error::{EncodeError, EncodeResult};
use crate::format::FlimFormat;
use alloc::vec::Vec;

/// Base unit of the payload alignment, multiplied by the bytes per element.
pub const ALIGNMENT_UNIT: u32 = 512;

/// A finished FLIM file.
///
/// Only [`pack_container`] creates one, so the trailer is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTexture(Vec<u8>);

impl EncodedTexture {
    /// The whole file.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The swizzled image data at the start of the file.
    pub fn payload(&self) -> &[u8] {
        &self.0[..self.trailer_start()]
    }

    /// The FLIM header and image descriptor at the end of the file.
    pub fn trailer(&self) -> &[u8] {
        &self.0[self.trailer_start()..]
    }

    #[inline]
    fn trailer_start(&self) -> usize {
        self.0.len().saturating_sub(TRAILER_SIZE)
    }

    /// Take ownership of the file bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<EncodedTexture> for Vec<u8> {
    fn from(texture: EncodedTexture) -> Self {
        texture.into_bytes()
    }
}

impl AsRef<[u8]> for EncodedTexture {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Describes the image being packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerParams {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// FLIM format code
    pub format: FlimFormat,
    /// Swizzle value
    pub swizzle: SwizzleValue,
    /// Tile mode requested for the surface
    pub tile_mode: TileMode,
    /// Bits per element, from the tile layout
    pub bits_per_pixel: u32,
    /// Padded surface size, from the tile layout. Shorter payloads are zero-padded to it.
    pub surface_size: usize,
}

/// Payload alignment for a given element size: `512 * bytes per element`.
#[inline]
pub fn alignment_for(bits_per_pixel: u32) -> u16 {
    ALIGNMENT_UNIT.wrapping_mul(bits_per_pixel >> 3) as u16
}

/// Packs a swizzled payload into a FLIM file.
///
/// # Parameters
///
/// - `payload`: swizzled surface data; it becomes the start of the file
/// - `params`: image dimensions, formats and layout
///
/// # Errors
///
/// - [`EncodeError::DimensionsTooLarge`] if width or height does not fit in a [`u16`]
/// - [`EncodeError::PayloadTooLarge`] if the file size does not fit in a [`u32`]
pub fn pack_container(mut payload: Vec<u8>, params: &ContainerParams) -> EncodeResult<EncodedTexture> {
    let too_large = || EncodeError::DimensionsTooLarge {
        width: params.width,
        height: params.height,
    };
    let width = u16::try_from(params.width).map_err(|_| too_large())?;
    let height = u16::try_from(params.height).map_err(|_| too_large())?;

    if payload.len() < params.surface_size {
        payload.resize(params.surface_size, 0);
    }

    let payload_len = payload.len();
    let payload_size = u32::try_from(payload_len)
        .ok()
        .filter(|size| size.checked_add(TRAILER_SIZE as u32).is_some())
        .ok_or(EncodeError::PayloadTooLarge(payload_len))?;

    let descriptor = ImageDescriptor {
        width,
        height,
        alignment: alignment_for(params.bits_per_pixel),
        format: params.format,
        swizzle_tile_mode: SwizzleTileMode::new(params.swizzle, params.tile_mode),
        payload_size,
    };

    let mut trailer = [0u8; TRAILER_SIZE];
    descriptor.write_trailer(&mut trailer);
    payload.extend_from_slice(&trailer);

    Ok(EncodedTexture(payload))
}
