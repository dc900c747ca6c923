//! FLIM image formats produced by the encoder.

/// Image format code stored in the FLIM image descriptor.
///
/// Only the formats the translator can produce are listed; the discriminants are the
/// on-disk codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FlimFormat {
    /// 8-bit luminance
    L8 = 0x00,
    /// 8-bit alpha
    A8 = 0x01,
    /// 4-bit luminance, 4-bit alpha
    La4 = 0x02,
    /// 8-bit luminance, 8-bit alpha
    La8 = 0x03,
    /// 16-bit 5/6/5 colour
    Rgb565 = 0x05,
    /// 32-bit colour with the alpha channel ignored
    Rgb8 = 0x06,
    /// 16-bit 5/5/5 colour with 1-bit alpha
    Rgb5a1 = 0x07,
    /// 16-bit 4/4/4/4 colour
    Rgba4 = 0x08,
    /// 32-bit 8/8/8/8 colour
    Rgba8 = 0x09,
    /// Ericsson texture compression
    Etc1 = 0x0a,
    /// a.k.a. DXT1
    Bc1 = 0x0c,
    /// a.k.a. DXT2/3
    Bc2 = 0x0d,
    /// a.k.a. DXT4/5
    Bc3 = 0x0e,
    /// Single channel block compression, sampled as alpha
    Bc4A = 0x10,
    /// Two channel block compression
    Bc5 = 0x11,
    /// 32-bit 8/8/8/8 colour, sRGB
    Rgba8Srgb = 0x14,
    /// BC1, sRGB
    Bc1Srgb = 0x15,
    /// BC2, sRGB
    Bc2Srgb = 0x16,
    /// BC3, sRGB
    Bc3Srgb = 0x17,
    /// 32-bit 10/10/10/2 colour
    Rgb10a2 = 0x18,
}

impl FlimFormat {
    /// Convert to the on-disk format code.
    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}
