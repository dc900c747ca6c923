use super::constants::*;
use crate::error::{ReadError, ReadResult};
use endian_writer::{EndianReader, LittleEndianReader};

/// A pixel format found in a DDS file that has a GX2 counterpart.
///
/// Uncompressed formats are named by the order of their channels in memory, lowest bits first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DdsFormat {
    /// a.k.a. DXT1
    Bc1,
    /// ETC1 data stored with BC1 sized blocks
    Etc1,
    /// a.k.a. DXT2/3
    Bc2,
    /// a.k.a. DXT4/5
    Bc3,
    /// a.k.a. ATI1
    Bc4,
    /// a.k.a. ATI2
    Bc5,
    /// 8-bit luminance
    L8,
    /// 8-bit alpha
    A8,
    /// 4-bit luminance, 4-bit alpha
    L4A4,
    /// 8-bit luminance, 8-bit alpha
    L8A8,
    /// 16-bit, blue in the low bits (`D3DFMT_R5G6B5`)
    B5G6R5,
    /// 16-bit, red in the low bits
    R5G6B5,
    /// 16-bit, blue in the low bits (`D3DFMT_A1R5G5B5`)
    B5G5R5A1,
    /// 16-bit, red in the low bits
    R5G5B5A1,
    /// 16-bit, blue in the low bits (`D3DFMT_A4R4G4B4`)
    B4G4R4A4,
    /// 16-bit, red in the low bits
    R4G4B4A4,
    /// 32-bit, red in the low bits (`D3DFMT_A2B10G10R10`)
    R10G10B10A2,
    /// 32-bit, blue in the low bits (`D3DFMT_A2R10G10B10`)
    B10G10R10A2,
    /// 32-bit, red first
    R8G8B8A8,
    /// 32-bit, red first, alpha unused
    R8G8B8X8,
    /// 32-bit, blue first
    B8G8R8A8,
    /// 32-bit, blue first, alpha unused
    B8G8R8X8,
}

/// Uncompressed formats identified by pixel format flag, bit count and channel masks.
const MASKED_FORMATS: &[(u32, u32, [u32; 4], DdsFormat)] = &[
    (DDPF_RGB, 32, R8G8B8A8_MASKS, DdsFormat::R8G8B8A8),
    (DDPF_RGB, 32, R8G8B8X8_MASKS, DdsFormat::R8G8B8X8),
    (DDPF_RGB, 32, B8G8R8A8_MASKS, DdsFormat::B8G8R8A8),
    (DDPF_RGB, 32, B8G8R8X8_MASKS, DdsFormat::B8G8R8X8),
    (DDPF_RGB, 32, R10G10B10A2_MASKS, DdsFormat::R10G10B10A2),
    (DDPF_RGB, 32, B10G10R10A2_MASKS, DdsFormat::B10G10R10A2),
    (DDPF_RGB, 16, B5G6R5_MASKS, DdsFormat::B5G6R5),
    (DDPF_RGB, 16, R5G6B5_MASKS, DdsFormat::R5G6B5),
    (DDPF_RGB, 16, B5G5R5A1_MASKS, DdsFormat::B5G5R5A1),
    (DDPF_RGB, 16, R5G5B5A1_MASKS, DdsFormat::R5G5B5A1),
    (DDPF_RGB, 16, B4G4R4A4_MASKS, DdsFormat::B4G4R4A4),
    (DDPF_RGB, 16, R4G4B4A4_MASKS, DdsFormat::R4G4B4A4),
    (DDPF_LUMINANCE, 8, L8_MASKS, DdsFormat::L8),
    (DDPF_LUMINANCE, 8, L4A4_MASKS, DdsFormat::L4A4),
    (DDPF_LUMINANCE, 16, L8A8_MASKS, DdsFormat::L8A8),
    (DDPF_ALPHA, 8, A8_MASKS, DdsFormat::A8),
];

/// The header information of a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Number of mip levels stored, at least 1
    pub mip_count: u32,
    /// Pixel format
    pub format: DdsFormat,
    /// FourCC of the legacy header, zero if the pixel format is given by masks
    pub fourcc: [u8; 4],
    /// The DX10 header names an sRGB format
    pub srgb: bool,
    /// Offset of the pixel data
    pub data_offset: usize,
}

/// Determines if the given data likely represents a DDS texture.
///
/// Checks for the `DDS ` magic and that the data is long enough to hold a header.
#[inline(always)]
pub fn likely_dds(data: &[u8]) -> bool {
    data.len() >= DDS_HEADER_SIZE
        && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == DDS_MAGIC
}

/// Parses the header of a DDS file.
///
/// # Errors
///
/// - [`ReadError::NotADds`] if the magic is missing or the header is truncated
/// - [`ReadError::InputTooShort`] if a DX10 header is announced but missing
/// - [`ReadError::UnknownFormat`] if the pixel format has no GX2 counterpart
pub fn parse_dds(data: &[u8]) -> ReadResult<DdsInfo> {
    if !likely_dds(data) {
        return Err(ReadError::NotADds);
    }

    // SAFETY: likely_dds checked data.len() >= DDS_HEADER_SIZE (128); every offset read
    // below ends at or before 0x6C.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (flags, height, width, raw_mip_count, pixel_flags, fourcc) = unsafe {
        (
            reader.read_u32_at(DDS_FLAGS_OFFSET as isize),
            reader.read_u32_at(DDS_HEIGHT_OFFSET as isize),
            reader.read_u32_at(DDS_WIDTH_OFFSET as isize),
            reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize),
            reader.read_u32_at(FOURCC_OFFSET as isize),
        )
    };

    let mip_count = if (flags & DDSD_MIPMAPCOUNT) != 0 {
        raw_mip_count.max(1)
    } else {
        1
    };

    let has_fourcc = (pixel_flags & DDPF_FOURCC) != 0;
    let (format, srgb, data_offset) = if has_fourcc && fourcc == FOURCC_DX10 {
        let header_size = DDS_HEADER_SIZE + DX10_HEADER_SIZE;
        if data.len() < header_size {
            return Err(ReadError::InputTooShort {
                expected: header_size,
                actual: data.len(),
            });
        }

        // SAFETY: We checked data.len() >= DDS_HEADER_SIZE + DX10_HEADER_SIZE (148),
        // so DX10_FORMAT_OFFSET (0x80) + 4 is safe
        let dxgi_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };
        let (format, srgb) = format_from_dxgi(dxgi_format)?;
        (format, srgb, header_size)
    } else if has_fourcc {
        (format_from_fourcc(fourcc)?, false, DDS_HEADER_SIZE)
    } else {
        (format_from_masks(data, pixel_flags)?, false, DDS_HEADER_SIZE)
    };

    Ok(DdsInfo {
        width,
        height,
        mip_count,
        format,
        fourcc: if has_fourcc {
            fourcc.to_le_bytes()
        } else {
            [0; 4]
        },
        srgb,
        data_offset,
    })
}

fn format_from_fourcc(fourcc: u32) -> ReadResult<DdsFormat> {
    Ok(match fourcc {
        FOURCC_DXT1 => DdsFormat::Bc1,
        FOURCC_ETC1 => DdsFormat::Etc1,
        FOURCC_DXT2 | FOURCC_DXT3 => DdsFormat::Bc2,
        FOURCC_DXT4 | FOURCC_DXT5 => DdsFormat::Bc3,
        FOURCC_ATI1 | FOURCC_BC4U => DdsFormat::Bc4,
        FOURCC_ATI2 | FOURCC_BC5U => DdsFormat::Bc5,
        _ => return Err(ReadError::UnknownFormat),
    })
}

/// Maps a DXGI format to a [`DdsFormat`] and whether it is sRGB.
fn format_from_dxgi(dxgi_format: u32) -> ReadResult<(DdsFormat, bool)> {
    Ok(match dxgi_format {
        DXGI_FORMAT_BC1_TYPELESS | DXGI_FORMAT_BC1_UNORM => (DdsFormat::Bc1, false),
        DXGI_FORMAT_BC1_UNORM_SRGB => (DdsFormat::Bc1, true),
        DXGI_FORMAT_BC2_TYPELESS | DXGI_FORMAT_BC2_UNORM => (DdsFormat::Bc2, false),
        DXGI_FORMAT_BC2_UNORM_SRGB => (DdsFormat::Bc2, true),
        DXGI_FORMAT_BC3_TYPELESS | DXGI_FORMAT_BC3_UNORM => (DdsFormat::Bc3, false),
        DXGI_FORMAT_BC3_UNORM_SRGB => (DdsFormat::Bc3, true),
        DXGI_FORMAT_BC4_TYPELESS | DXGI_FORMAT_BC4_UNORM => (DdsFormat::Bc4, false),
        DXGI_FORMAT_BC5_TYPELESS | DXGI_FORMAT_BC5_UNORM => (DdsFormat::Bc5, false),
        DXGI_FORMAT_R8_UNORM => (DdsFormat::L8, false),
        DXGI_FORMAT_A8_UNORM => (DdsFormat::A8, false),
        DXGI_FORMAT_R8G8_UNORM => (DdsFormat::L8A8, false),
        DXGI_FORMAT_B5G6R5_UNORM => (DdsFormat::B5G6R5, false),
        DXGI_FORMAT_B5G5R5A1_UNORM => (DdsFormat::B5G5R5A1, false),
        DXGI_FORMAT_B4G4R4A4_UNORM => (DdsFormat::B4G4R4A4, false),
        DXGI_FORMAT_R10G10B10A2_TYPELESS | DXGI_FORMAT_R10G10B10A2_UNORM => {
            (DdsFormat::R10G10B10A2, false)
        }
        DXGI_FORMAT_R8G8B8A8_TYPELESS | DXGI_FORMAT_R8G8B8A8_UNORM => (DdsFormat::R8G8B8A8, false),
        DXGI_FORMAT_R8G8B8A8_UNORM_SRGB => (DdsFormat::R8G8B8A8, true),
        DXGI_FORMAT_B8G8R8A8_TYPELESS | DXGI_FORMAT_B8G8R8A8_UNORM => (DdsFormat::B8G8R8A8, false),
        DXGI_FORMAT_B8G8R8A8_UNORM_SRGB => (DdsFormat::B8G8R8A8, true),
        DXGI_FORMAT_B8G8R8X8_TYPELESS | DXGI_FORMAT_B8G8R8X8_UNORM => (DdsFormat::B8G8R8X8, false),
        DXGI_FORMAT_B8G8R8X8_UNORM_SRGB => (DdsFormat::B8G8R8X8, true),
        _ => return Err(ReadError::UnknownFormat),
    })
}

/// Detects an uncompressed format from the pixel format flags, bit count and masks.
///
/// # Preconditions
///
/// `data` holds at least [`DDS_HEADER_SIZE`] bytes.
fn format_from_masks(data: &[u8], pixel_flags: u32) -> ReadResult<DdsFormat> {
    // SAFETY: The caller checked data.len() >= DDS_HEADER_SIZE (128), so
    // DDS_PIXELFORMAT_ABITMASK_OFFSET (0x68) + 4 is safe
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (bit_count, red, green, blue, alpha) = unsafe {
        (
            reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
            reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
        )
    };

    // The alpha mask is only meaningful when one of the alpha flags is set.
    let alpha = if (pixel_flags & (DDPF_ALPHAPIXELS | DDPF_ALPHA)) != 0 {
        alpha
    } else {
        0
    };
    let masks = [red, green, blue, alpha];

    MASKED_FORMATS
        .iter()
        .find(|(flag, bits, expected, _)| {
            (pixel_flags & flag) != 0 && *bits == bit_count && *expected == masks
        })
        .map(|&(_, _, _, format)| format)
        .ok_or(ReadError::UnknownFormat)
}
