//! Source surface description handed to the encoder.

use crate::channel::ChannelSelector;
use alloc::vec::Vec;
use core::fmt;

/// Four byte format tag carried by some container files.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// No tag.
    pub const NONE: Self = Self([0; 4]);
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(u8::is_ascii_graphic) {
            let [a, b, c, d] = self.0;
            write!(f, "FourCC(\"{}{}{}{}\")", a as char, b as char, c as char, d as char)
        } else {
            write!(f, "FourCC({:?})", self.0)
        }
    }
}

/// A single 2D surface read from a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceDescriptor {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Raw GX2 surface format code.
    pub format_code: u32,
    /// Meaningful for block-compressed formats only.
    pub fourcc: FourCC,
    /// Which source channel feeds each output component.
    pub channel_selector: ChannelSelector,
    /// Number of mip levels in `pixel_data`, at least 1.
    pub mip_count: u32,
    /// Declared byte size of mip level 0.
    pub base_level_size: usize,
    /// Pixel data; may contain further mip levels after the base level.
    pub pixel_data: Vec<u8>,
}

impl SurfaceDescriptor {
    /// Whether the surface holds anything that can be encoded.
    pub fn is_readable(&self) -> bool {
        self.width != 0 && self.height != 0 && !self.pixel_data.is_empty()
    }

    /// Pixel data of mip level 0.
    ///
    /// If the data is shorter than [`SurfaceDescriptor::base_level_size`], all of it is returned.
    pub fn base_level(&self) -> &[u8] {
        let len = self.base_level_size.min(self.pixel_data.len());
        &self.pixel_data[..len]
    }
}
