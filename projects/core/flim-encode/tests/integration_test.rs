//! End to end tests for surface encoding

use flim_encode::{
    encode_surface, try_encode_surface, ChannelSelector, ConversionConfig, FlimFormat, FourCC,
    SurfaceDescriptor, SurfaceFormat, SwizzleRequest, SwizzleValue, TileEngine, TileLayout,
    TileMode,
};

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
            surface_size: format.level_size(width, height).unwrap(),
            tile_mode,
            depth: 1,
        }
    }

    fn swizzle(&self, request: &SwizzleRequest<'_>) -> Vec<u8> {
        request.data.to_vec()
    }
}

fn rgba8_64x64() -> SurfaceDescriptor {
    SurfaceDescriptor {
        width: 64,
        height: 64,
        format_code: 0x1a,
        fourcc: FourCC::NONE,
        channel_selector: ChannelSelector::RGBA,
        mip_count: 1,
        base_level_size: 64 * 64 * 4,
        pixel_data: (0..64 * 64 * 4).map(|x: u32| (x % 251) as u8).collect(),
    }
}

#[test]
fn rgba8_64x64_produces_expected_container() {
    let surface = rgba8_64x64();
    let output = encode_surface(&IdentityTileEngine, &surface, &ConversionConfig::default());

    assert!(!output.is_empty());
    let payload_len = output.len() - 0x28;
    assert_eq!(payload_len, 64 * 64 * 4);
    assert_eq!(&output[..payload_len], surface.pixel_data.as_slice());

    #[rustfmt::skip]
    let expected_trailer: [u8; 0x28] = [
        // FLIM header
        b'F', b'L', b'I', b'M', 0xFE, 0xFF, 0x00, 0x14,
        0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x40, 0x28,
        0x00, 0x01, 0x00, 0x00,
        // imag descriptor: 64x64, alignment 2048, RGBA8, swizzle 0 / tile mode 4
        b'i', b'm', b'a', b'g', 0x00, 0x00, 0x00, 0x10,
        0x00, 0x40, 0x00, 0x40, 0x08, 0x00, 0x09, 0x04,
        0x00, 0x00, 0x40, 0x00,
    ];
    assert_eq!(&output[payload_len..], &expected_trailer);
}

#[test]
fn bgra8_input_is_swapped_to_rgba8() {
    let mut surface = rgba8_64x64();
    surface.channel_selector = ChannelSelector::from_raw([2, 1, 0, 3]).unwrap();

    let outcome =
        try_encode_surface(&IdentityTileEngine, &surface, &ConversionConfig::default()).unwrap();

    assert_eq!(outcome.format, FlimFormat::Rgba8);
    assert!(outcome.channel_warning().is_none());
    for (out, source) in outcome
        .texture
        .payload()
        .chunks_exact(4)
        .zip(surface.pixel_data.chunks_exact(4))
    {
        assert_eq!(out, &[source[2], source[1], source[0], source[3]]);
    }
}

#[test]
fn rgbx8_is_encoded_as_rgb8() {
    let mut surface = rgba8_64x64();
    surface.channel_selector = ChannelSelector::from_raw([0, 1, 2, 5]).unwrap();

    let config = ConversionConfig {
        tile_mode: TileMode::LinearAligned,
        swizzle: SwizzleValue::new(5).unwrap(),
        srgb: false,
    };
    let output = encode_surface(&IdentityTileEngine, &surface, &config);

    let trailer = &output[output.len() - 0x28..];
    assert_eq!(trailer[0x22], FlimFormat::Rgb8.to_u8());
    assert_eq!(trailer[0x23], 0xA1);
}

#[test]
fn unsupported_format_produces_nothing() {
    let mut surface = rgba8_64x64();
    surface.format_code = 0;

    assert!(encode_surface(&IdentityTileEngine, &surface, &ConversionConfig::default()).is_empty());
}
