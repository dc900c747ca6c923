//! In-place red/blue exchange for packed pixel layouts.
//!
//! Pixels are read as little endian words, the way they are stored in the source surface.
//! Every swap exchanges two equally sized bit fields, so applying a swap twice restores the
//! original data.

/// Packed pixel layout whose red and blue fields should be exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelSwap {
    /// 16-bit, 5-bit fields at bits 0-4 and 11-15.
    Rgb565,
    /// 16-bit, 5-bit fields at bits 0-4 and 10-14, 1-bit alpha at bit 15.
    Rgb5a1,
    /// 16-bit, 4-bit fields at bits 0-3 and 8-11, 4-bit alpha at bits 12-15.
    Argb4,
    /// 32-bit, bytes 0 and 2.
    Rgba8,
    /// 32-bit, 10-bit fields at bits 0-9 and 20-29, 2-bit alpha at bits 30-31.
    Bgr10a2,
}

impl ChannelSwap {
    /// Exchange the red and blue fields of every whole pixel in `data`.
    ///
    /// Trailing bytes that do not form a whole pixel are left untouched.
    pub fn apply(self, data: &mut [u8]) {
        match self {
            Self::Rgb565 => swap_fields_16(data, 11, 0x1F),
            Self::Rgb5a1 => swap_fields_16(data, 10, 0x1F),
            Self::Argb4 => swap_fields_16(data, 8, 0x0F),
            Self::Rgba8 => swap_bytes_0_2(data),
            Self::Bgr10a2 => swap_fields_32(data, 20, 0x3FF),
        }
    }
}

/// Swaps the field at bit 0 with the field at bit `high_shift` in each 16-bit pixel.
#[inline]
fn swap_fields_16(data: &mut [u8], high_shift: u32, mask: u16) {
    for pixel in data.chunks_exact_mut(2) {
        let value = u16::from_le_bytes([pixel[0], pixel[1]]);
        let low = value & mask;
        let high = (value >> high_shift) & mask;
        let rest = value & !(mask | (mask << high_shift));
        let swapped = rest | (low << high_shift) | high;
        pixel.copy_from_slice(&swapped.to_le_bytes());
    }
}

/// Swaps the field at bit 0 with the field at bit `high_shift` in each 32-bit pixel.
#[inline]
fn swap_fields_32(data: &mut [u8], high_shift: u32, mask: u32) {
    for pixel in data.chunks_exact_mut(4) {
        let value = u32::from_le_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
        let low = value & mask;
        let high = (value >> high_shift) & mask;
        let rest = value & !(mask | (mask << high_shift));
        let swapped = rest | (low << high_shift) | high;
        pixel.copy_from_slice(&swapped.to_le_bytes());
    }
}

#[inline]
fn swap_bytes_0_2(data: &mut [u8]) {
    for pixel in data.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
}
