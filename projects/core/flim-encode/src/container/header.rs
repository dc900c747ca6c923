//! Fixed layout of the FLIM file header and image descriptor.
//!
//! Both are big endian and stored after the payload:
//!
//! ```text
//! FLIM header (0x14 bytes)
//! 0x00  magic          "FLIM"
//! 0x04  byte order     u16 0xFEFF
//! 0x06  header size    u16 0x14
//! 0x08  version        u32 0x02020000
//! 0x0C  file size      u32 payload + 0x28
//! 0x10  block count    u16 1
//! 0x12  reserved       2 bytes
//!
//! imag descriptor (0x14 bytes)
//! 0x00  magic          "imag"
//! 0x04  block size     u32 16
//! 0x08  width          u16
//! 0x0A  height         u16
//! 0x0C  alignment      u16
//! 0x0E  format         u8
//! 0x0F  swizzle/tile   u8
//! 0x10  payload size   u32
//! ```

use super::SwizzleTileMode;
use crate::format::FlimFormat;
use endian_writer::{BigEndianWriter, EndianWriter};

/// `"FLIM"`
pub const FLIM_MAGIC: u32 = u32::from_be_bytes(*b"FLIM");
/// `"imag"`
pub const IMAG_MAGIC: u32 = u32::from_be_bytes(*b"imag");
/// Byte order mark, big endian.
pub const BYTE_ORDER_MARK: u16 = 0xFEFF;
/// Container version.
pub const FLIM_VERSION: u32 = 0x0202_0000;
/// Size of the FLIM header.
pub const FLIM_HEADER_SIZE: usize = 0x14;
/// Size of the image descriptor.
pub const IMAG_DESCRIPTOR_SIZE: usize = 0x14;
/// Value of the descriptor's block size field.
pub const IMAG_BLOCK_SIZE: u32 = 16;
/// Combined size of the header and descriptor that follow the payload.
pub const TRAILER_SIZE: usize = FLIM_HEADER_SIZE + IMAG_DESCRIPTOR_SIZE;

/// Fields of the image descriptor that vary per image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Required payload alignment
    pub alignment: u16,
    /// FLIM format code
    pub format: FlimFormat,
    /// Packed swizzle and tile mode
    pub swizzle_tile_mode: SwizzleTileMode,
    /// Length of the payload in bytes
    pub payload_size: u32,
}

impl ImageDescriptor {
    /// Write the FLIM header followed by this descriptor into `output`.
    ///
    /// The caller must have checked that `payload_size + TRAILER_SIZE` fits in a [`u32`].
    pub fn write_trailer(&self, output: &mut [u8; TRAILER_SIZE]) {
        // SAFETY: every write below ends at or before TRAILER_SIZE bytes into `output`.
        unsafe {
            let mut writer = BigEndianWriter::new(output.as_mut_ptr());

            // FLIM header
            writer.write_u32_at(FLIM_MAGIC, 0x00);
            writer.write_u32_at(
                ((BYTE_ORDER_MARK as u32) << 16) | FLIM_HEADER_SIZE as u32,
                0x04,
            );
            writer.write_u32_at(FLIM_VERSION, 0x08);
            writer.write_u32_at(self.payload_size + TRAILER_SIZE as u32, 0x0C);
            // Block count, then 2 reserved bytes.
            writer.write_u32_at(1 << 16, 0x10);

            // imag descriptor
            let base = FLIM_HEADER_SIZE as isize;
            writer.write_u32_at(IMAG_MAGIC, base);
            writer.write_u32_at(IMAG_BLOCK_SIZE, base + 0x04);
            writer.write_u32_at(((self.width as u32) << 16) | self.height as u32, base + 0x08);
            writer.write_u32_at(
                ((self.alignment as u32) << 16)
                    | ((self.format.to_u8() as u32) << 8)
                    | self.swizzle_tile_mode.to_u8() as u32,
                base + 0x0C,
            );
            writer.write_u32_at(self.payload_size, base + 0x10);
        }
    }
}
