//! Common test imports and utilities for DDS extension tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Common DDS test data helpers
use crate::dds::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Total size of DDS header + DX10 header (used in tests)
pub const DDS_DX10_TOTAL_HEADER_SIZE: usize = DDS_HEADER_SIZE + DX10_HEADER_SIZE;

/// Overwrite a little endian [`u32`] at `offset`.
pub fn set_u32(data: &mut [u8], offset: usize, value: u32) {
    assert!(offset + 4 <= data.len());
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(value, offset as isize);
    }
}

/// Creates a DDS file with a zeroed pixel format, `data_len` bytes of patterned pixel data
/// and room for a DX10 header if `is_dx10` is set.
fn create_dds_base(
    width: u32,
    height: u32,
    mipmap_count: u32,
    data_len: usize,
    is_dx10: bool,
) -> Vec<u8> {
    let header_size = if is_dx10 {
        DDS_DX10_TOTAL_HEADER_SIZE
    } else {
        DDS_HEADER_SIZE
    };
    let mut data = vec![0u8; header_size + data_len];
    for (index, byte) in data[header_size..].iter_mut().enumerate() {
        *byte = (index % 251) as u8;
    }

    let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT | DDSD_LINEARSIZE;
    if mipmap_count > 1 {
        flags |= DDSD_MIPMAPCOUNT;
    }

    set_u32(&mut data, 0, DDS_MAGIC);
    set_u32(&mut data, DDS_SIZE_OFFSET, 124);
    set_u32(&mut data, DDS_FLAGS_OFFSET, flags);
    set_u32(&mut data, DDS_HEIGHT_OFFSET, height);
    set_u32(&mut data, DDS_WIDTH_OFFSET, width);
    if mipmap_count > 1 {
        set_u32(&mut data, DDS_MIPMAP_COUNT_OFFSET, mipmap_count);
    }
    data
}

/// Creates a legacy DDS file with the given FourCC.
pub fn create_fourcc_dds(
    fourcc: &[u8; 4],
    width: u32,
    height: u32,
    mipmap_count: u32,
    data_len: usize,
) -> Vec<u8> {
    let mut data = create_dds_base(width, height, mipmap_count, data_len, false);
    set_u32(&mut data, DDS_PIXELFORMAT_FLAGS_OFFSET, DDPF_FOURCC);
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(fourcc);
    data
}

/// Creates a DDS file with a DX10 header naming `dxgi_format`.
pub fn create_dx10_dds(
    dxgi_format: u32,
    width: u32,
    height: u32,
    mipmap_count: u32,
    data_len: usize,
) -> Vec<u8> {
    let mut data = create_dds_base(width, height, mipmap_count, data_len, true);
    set_u32(&mut data, DDS_PIXELFORMAT_FLAGS_OFFSET, DDPF_FOURCC);
    data[FOURCC_OFFSET..FOURCC_OFFSET + 4].copy_from_slice(b"DX10");
    set_u32(&mut data, DX10_FORMAT_OFFSET, dxgi_format);
    data
}

/// Creates a legacy DDS file whose pixel format is described by bit masks.
///
/// `masks` is `[red, green, blue, alpha]`.
pub fn create_masked_dds(
    pixel_flags: u32,
    bit_count: u32,
    masks: [u32; 4],
    width: u32,
    height: u32,
    mipmap_count: u32,
    data_len: usize,
) -> Vec<u8> {
    let mut data = create_dds_base(width, height, mipmap_count, data_len, false);
    set_u32(&mut data, DDS_PIXELFORMAT_FLAGS_OFFSET, pixel_flags);
    set_u32(&mut data, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET, bit_count);
    set_u32(&mut data, DDS_PIXELFORMAT_RBITMASK_OFFSET, masks[0]);
    set_u32(&mut data, DDS_PIXELFORMAT_GBITMASK_OFFSET, masks[1]);
    set_u32(&mut data, DDS_PIXELFORMAT_BBITMASK_OFFSET, masks[2]);
    set_u32(&mut data, DDS_PIXELFORMAT_ABITMASK_OFFSET, masks[3]);
    data
}
