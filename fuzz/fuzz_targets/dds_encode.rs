#![no_main]

// This fuzz test feeds arbitrary files through the DDS reader and the encoder, checking that
// every accepted file produces a well formed FLIM trailer and nothing panics.

use flim_encode::container::header::TRAILER_SIZE;
use flim_encode::{ConversionConfig, SurfaceFormat, SwizzleRequest, TileEngine, TileLayout, TileMode};
use flim_encode_api::try_encode_slice;
use flim_encode_dds::DdsSurfaceReader;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub tile_mode: u32,
    pub swizzle: u32,
    pub srgb: bool,
    pub file: Vec<u8>,
}

/// Lays surfaces out linearly and returns data unchanged.
struct IdentityTileEngine;

impl TileEngine for IdentityTileEngine {
    fn resolve_layout(
        &self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
        tile_mode: TileMode,
    ) -> TileLayout {
        TileLayout {
            tiled_height: height,
            pitch: width,
            bits_per_pixel: format.bits_per_element(),
            // Keep allocations bounded for huge headers.
            surface_size: format
                .level_size(width.min(4096), height.min(4096))
                .unwrap_or(0),
            tile_mode,
            depth: 1,
        }
    }

    fn swizzle(&self, request: &SwizzleRequest<'_>) -> Vec<u8> {
        request.data.to_vec()
    }
}

fuzz_target!(|input: Input| {
    let config = ConversionConfig::from_raw(input.tile_mode, input.swizzle, input.srgb);

    let Ok(outcome) = try_encode_slice(&DdsSurfaceReader, &IdentityTileEngine, &input.file, &config)
    else {
        return;
    };

    let bytes = outcome.texture.as_bytes();
    assert!(bytes.len() >= TRAILER_SIZE);
    assert_eq!(outcome.texture.payload().len() + TRAILER_SIZE, bytes.len());
    assert_eq!(&outcome.texture.trailer()[..4], b"FLIM");
    assert_eq!(&outcome.texture.trailer()[0x14..0x18], b"imag");
});
