//! Mapping of DDS formats onto GX2 surface formats and channel selectors.

use crate::dds::DdsFormat;
use flim_encode::SurfaceFormat;

/// Offset between a GX2 UNORM format code and its sRGB variant.
pub(crate) const GX2_SRGB_BIT: u32 = 0x400;

/// Convert a [`DdsFormat`] to the GX2 surface format code it is encoded as.
///
/// With `srgb` set, RGBA8 and BC1-BC3 data use the sRGB variant of the GX2 format. ETC1 data
/// always uses the plain BC1 code, the only one that can carry it.
pub(crate) fn dds_format_to_gx2(format: DdsFormat, srgb: bool) -> u32 {
    let (base, has_srgb_variant) = match format {
        DdsFormat::Bc1 => (SurfaceFormat::Bc1Unorm, true),
        DdsFormat::Etc1 => (SurfaceFormat::Bc1Unorm, false),
        DdsFormat::Bc2 => (SurfaceFormat::Bc2Unorm, true),
        DdsFormat::Bc3 => (SurfaceFormat::Bc3Unorm, true),
        DdsFormat::Bc4 => (SurfaceFormat::Bc4Unorm, false),
        DdsFormat::Bc5 => (SurfaceFormat::Bc5Unorm, false),
        DdsFormat::L8 | DdsFormat::A8 => (SurfaceFormat::R8Unorm, false),
        DdsFormat::L4A4 => (SurfaceFormat::R4G4Unorm, false),
        DdsFormat::L8A8 => (SurfaceFormat::R8G8Unorm, false),
        DdsFormat::B5G6R5 | DdsFormat::R5G6B5 => (SurfaceFormat::R5G6B5Unorm, false),
        DdsFormat::B5G5R5A1 | DdsFormat::R5G5B5A1 => (SurfaceFormat::R5G5B5A1Unorm, false),
        DdsFormat::B4G4R4A4 | DdsFormat::R4G4B4A4 => (SurfaceFormat::R4G4B4A4Unorm, false),
        DdsFormat::R10G10B10A2 | DdsFormat::B10G10R10A2 => {
            (SurfaceFormat::R10G10B10A2Unorm, false)
        }
        DdsFormat::R8G8B8A8
        | DdsFormat::R8G8B8X8
        | DdsFormat::B8G8R8A8
        | DdsFormat::B8G8R8X8 => (SurfaceFormat::R8G8B8A8Unorm, true),
    };

    if srgb && has_srgb_variant {
        base.to_raw() | GX2_SRGB_BIT
    } else {
        base.to_raw()
    }
}

/// Raw GX2 component selector describing how the channels of `format` map to RGBA.
pub(crate) fn dds_format_channel_selector(format: DdsFormat) -> [u8; 4] {
    match format {
        DdsFormat::Bc1 | DdsFormat::Etc1 | DdsFormat::Bc2 | DdsFormat::Bc3 => [0, 1, 2, 3],
        DdsFormat::Bc4 | DdsFormat::L8 => [0, 0, 0, 5],
        DdsFormat::Bc5 => [0, 1, 4, 5],
        DdsFormat::A8 => [5, 5, 5, 0],
        DdsFormat::L4A4 | DdsFormat::L8A8 => [0, 0, 0, 1],
        DdsFormat::B5G6R5 => [2, 1, 0, 5],
        DdsFormat::R5G6B5 => [0, 1, 2, 5],
        DdsFormat::B5G5R5A1 | DdsFormat::B4G4R4A4 => [2, 1, 0, 3],
        DdsFormat::R5G5B5A1 | DdsFormat::R4G4B4A4 => [0, 1, 2, 3],
        DdsFormat::R10G10B10A2 | DdsFormat::R8G8B8A8 => [0, 1, 2, 3],
        DdsFormat::B10G10R10A2 | DdsFormat::B8G8R8A8 => [2, 1, 0, 3],
        DdsFormat::R8G8B8X8 => [0, 1, 2, 5],
        DdsFormat::B8G8R8X8 => [2, 1, 0, 5],
    }
}
