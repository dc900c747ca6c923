//! Interface to the GPU specific surface tiling code.
//!
//! Computing a tiled layout and permuting bytes into it depends on the address library of
//! the target GPU. The encoder does not implement either; callers supply a [`TileEngine`].

use crate::config::{SwizzleValue, TileMode};
use crate::format::SurfaceFormat;
use alloc::vec::Vec;

/// Value of the surface swizzle register for the 2D and 3D tile modes' bank/pipe bits.
pub const SWIZZLE_BANK_PIPE_BITS: u32 = 0xd0000;

/// Tiled memory layout of a surface, as computed by a [`TileEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileLayout {
    /// Height of the surface after padding to whole tiles, in elements.
    pub tiled_height: u32,
    /// Row pitch, in elements.
    pub pitch: u32,
    /// Bits per element; a pixel, or a 4x4 block for compressed formats.
    pub bits_per_pixel: u32,
    /// Size of the padded surface in bytes.
    pub surface_size: usize,
    /// Tile mode the engine settled on. May differ from the requested one for small surfaces.
    pub tile_mode: TileMode,
    /// Surface depth. Only 1 can be encoded.
    pub depth: u32,
}

/// Parameters of a single [`TileEngine::swizzle`] call.
#[derive(Debug, Clone, Copy)]
pub struct SwizzleRequest<'a> {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// [`TileLayout::tiled_height`]
    pub tiled_height: u32,
    /// GX2 format of the surface.
    pub format: SurfaceFormat,
    /// [`TileLayout::tile_mode`]
    pub tile_mode: TileMode,
    /// Value from [`swizzle_encoding`].
    pub swizzle: u32,
    /// [`TileLayout::pitch`]
    pub pitch: u32,
    /// [`TileLayout::bits_per_pixel`]
    pub bits_per_pixel: u32,
    /// Linear pixel data, padded to [`TileLayout::surface_size`].
    pub data: &'a [u8],
}

/// Surface layout resolution and swizzling for a GPU architecture.
///
/// Implementations must be pure; the same inputs always produce the same outputs.
pub trait TileEngine {
    /// Compute the tiled layout of a single-level 2D surface.
    fn resolve_layout(
        &self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
        tile_mode: TileMode,
    ) -> TileLayout;

    /// Reorder linear pixel data into the tiled layout described by `request`.
    fn swizzle(&self, request: &SwizzleRequest<'_>) -> Vec<u8>;
}

impl<T: TileEngine + ?Sized> TileEngine for &T {
    fn resolve_layout(
        &self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
        tile_mode: TileMode,
    ) -> TileLayout {
        (**self).resolve_layout(format, width, height, tile_mode)
    }

    fn swizzle(&self, request: &SwizzleRequest<'_>) -> Vec<u8> {
        (**self).swizzle(request)
    }
}

/// Encodes the swizzle value the way the surface swizzle register expects it.
///
/// Linear and 1D tiled modes take `swizzle << 8`; every other mode also sets
/// [`SWIZZLE_BANK_PIPE_BITS`].
pub fn swizzle_encoding(tile_mode: TileMode, swizzle: SwizzleValue) -> u32 {
    let shifted = (swizzle.get() as u32) << 8;
    if tile_mode.is_linear_or_1d() {
        shifted
    } else {
        SWIZZLE_BANK_PIPE_BITS | shifted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(1, 0, 0x0000)]
    #[case(2, 3, 0x0300)]
    #[case(3, 7, 0x0700)]
    #[case(16, 5, 0x0500)]
    #[case(0, 0, 0xd0000)]
    #[case(4, 0, 0xd0000)]
    #[case(4, 5, 0xd0500)]
    #[case(15, 7, 0xd0700)]
    fn swizzle_encoding_matches_register_layout(
        #[case] tile_mode: u32,
        #[case] swizzle: u32,
        #[case] expected: u32,
    ) {
        let tile_mode = TileMode::from_raw(tile_mode).unwrap();
        let swizzle = SwizzleValue::new(swizzle).unwrap();
        assert_eq!(swizzle_encoding(tile_mode, swizzle), expected);
    }
}
