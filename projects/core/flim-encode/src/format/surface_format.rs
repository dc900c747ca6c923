//! GX2 surface formats accepted as conversion input.

/// A GX2 surface format with a FLIM counterpart.
///
/// The discriminants are the raw GX2 format codes. Codes that are not listed here
/// (including `0x000`, `GX2_SURFACE_FORMAT_INVALID`) cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SurfaceFormat {
    /// `GX2_SURFACE_FORMAT_TC_R8_UNORM`
    R8Unorm = 0x001,
    /// `GX2_SURFACE_FORMAT_TC_R4_G4_UNORM`
    R4G4Unorm = 0x002,
    /// `GX2_SURFACE_FORMAT_TC_R8_G8_UNORM`
    R8G8Unorm = 0x007,
    /// `GX2_SURFACE_FORMAT_TCS_R5_G6_B5_UNORM`
    R5G6B5Unorm = 0x008,
    /// `GX2_SURFACE_FORMAT_TC_R5_G5_B5_A1_UNORM`
    R5G5B5A1Unorm = 0x00a,
    /// `GX2_SURFACE_FORMAT_TC_R4_G4_B4_A4_UNORM`
    R4G4B4A4Unorm = 0x00b,
    /// `GX2_SURFACE_FORMAT_TCS_R10_G10_B10_A2_UNORM`
    R10G10B10A2Unorm = 0x019,
    /// `GX2_SURFACE_FORMAT_TCS_R8_G8_B8_A8_UNORM`
    R8G8B8A8Unorm = 0x01a,
    /// `GX2_SURFACE_FORMAT_TCS_R8_G8_B8_A8_SRGB`
    R8G8B8A8Srgb = 0x41a,
    /// `GX2_SURFACE_FORMAT_T_BC1_UNORM`
    Bc1Unorm = 0x031,
    /// `GX2_SURFACE_FORMAT_T_BC1_SRGB`
    Bc1Srgb = 0x431,
    /// `GX2_SURFACE_FORMAT_T_BC2_UNORM`
    Bc2Unorm = 0x032,
    /// `GX2_SURFACE_FORMAT_T_BC2_SRGB`
    Bc2Srgb = 0x432,
    /// `GX2_SURFACE_FORMAT_T_BC3_UNORM`
    Bc3Unorm = 0x033,
    /// `GX2_SURFACE_FORMAT_T_BC3_SRGB`
    Bc3Srgb = 0x433,
    /// `GX2_SURFACE_FORMAT_T_BC4_UNORM`
    Bc4Unorm = 0x034,
    /// `GX2_SURFACE_FORMAT_T_BC5_UNORM`
    Bc5Unorm = 0x035,
}

impl SurfaceFormat {
    /// All supported formats, in ascending code order.
    pub const ALL: [SurfaceFormat; 17] = [
        Self::R8Unorm,
        Self::R4G4Unorm,
        Self::R8G8Unorm,
        Self::R5G6B5Unorm,
        Self::R5G5B5A1Unorm,
        Self::R4G4B4A4Unorm,
        Self::R10G10B10A2Unorm,
        Self::R8G8B8A8Unorm,
        Self::Bc1Unorm,
        Self::Bc2Unorm,
        Self::Bc3Unorm,
        Self::Bc4Unorm,
        Self::Bc5Unorm,
        Self::R8G8B8A8Srgb,
        Self::Bc1Srgb,
        Self::Bc2Srgb,
        Self::Bc3Srgb,
    ];

    /// Convert from a raw GX2 format code.
    ///
    /// Returns [`None`] for codes without a FLIM counterpart.
    pub fn from_raw(value: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|format| format.to_raw() == value)
    }

    /// Convert to the raw GX2 format code.
    #[inline]
    pub fn to_raw(self) -> u32 {
        self as u32
    }

    /// Whether the format stores 4x4 pixel blocks rather than individual pixels.
    pub fn is_block_compressed(self) -> bool {
        matches!(
            self,
            Self::Bc1Unorm
                | Self::Bc1Srgb
                | Self::Bc2Unorm
                | Self::Bc2Srgb
                | Self::Bc3Unorm
                | Self::Bc3Srgb
                | Self::Bc4Unorm
                | Self::Bc5Unorm
        )
    }

    /// Bits per element; a pixel for uncompressed formats, a 4x4 block otherwise.
    pub fn bits_per_element(self) -> u32 {
        match self {
            Self::R8Unorm | Self::R4G4Unorm => 8,
            Self::R8G8Unorm | Self::R5G6B5Unorm | Self::R5G5B5A1Unorm | Self::R4G4B4A4Unorm => 16,
            Self::R10G10B10A2Unorm | Self::R8G8B8A8Unorm | Self::R8G8B8A8Srgb => 32,
            Self::Bc1Unorm | Self::Bc1Srgb | Self::Bc4Unorm => 64,
            Self::Bc2Unorm
            | Self::Bc2Srgb
            | Self::Bc3Unorm
            | Self::Bc3Srgb
            | Self::Bc5Unorm => 128,
        }
    }

    /// Byte size of a single `width` x `height` surface level in this format.
    ///
    /// Block-compressed dimensions are rounded up to whole 4x4 blocks.
    /// Returns [`None`] if the size does not fit in a [`usize`].
    pub fn level_size(self, width: u32, height: u32) -> Option<usize> {
        let (elements_wide, elements_high) = if self.is_block_compressed() {
            (width.div_ceil(4), height.div_ceil(4))
        } else {
            (width, height)
        };

        (elements_wide as usize)
            .checked_mul(elements_high as usize)?
            .checked_mul((self.bits_per_element() / 8) as usize)
    }
}
