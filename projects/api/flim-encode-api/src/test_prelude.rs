//! Common test imports and utilities
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use flim_encode_dds::DdsSurfaceReader;
pub use rstest::rstest;
#[cfg(feature = "file-io")]
pub use tempfile::{Builder, NamedTempFile};

use flim_encode::{SurfaceFormat, SwizzleRequest, TileEngine, TileLayout, TileMode};

/// Size of a legacy DDS header, magic included.
pub const DDS_HEADER_SIZE: usize = 0x80;

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Creates a legacy DDS file holding one `R8G8B8A8` level with patterned pixel data.
pub fn create_rgba8_dds(width: u32, height: u32) -> Vec<u8> {
    let data_len = width as usize * height as usize * 4;
    let mut data = vec![0u8; DDS_HEADER_SIZE + data_len];
    for (index, byte) in data[DDS_HEADER_SIZE..].iter_mut().enumerate() {
        *byte = (index % 251) as u8;
    }

    data[0..4].copy_from_slice(b"DDS ");
    put_u32(&mut data, 0x04, 124);
    // CAPS | HEIGHT | WIDTH | PITCH | PIXELFORMAT
    put_u32(&mut data, 0x08, 0x100F);
    put_u32(&mut data, 0x0C, height);
    put_u32(&mut data, 0x10, width);
    put_u32(&mut data, 0x14, width * 4);
    put_u32(&mut data, 0x4C, 32);
    // RGB | ALPHAPIXELS
    put_u32(&mut data, 0x50, 0x41);
    put_u32(&mut data, 0x58, 32);
    put_u32(&mut data, 0x5C, 0x0000_00FF);
    put_u32(&mut data, 0x60, 0x0000_FF00);
    put_u32(&mut data, 0x64, 0x00FF_0000);
    put_u32(&mut data, 0x68, 0xFF00_0000);
    data
}

/// Helper to create a temporary input file with test data.
#[cfg(feature = "file-io")]
pub fn create_input_file_with_data(data: &[u8]) -> NamedTempFile {
    let input_file = Builder::new()
        .suffix(".dds")
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(input_file.path(), data).expect("Failed to write input data");
    input_file
}

/// Helper to create a temporary output file.
#[cfg(feature = "file-io")]
pub fn create_output_file() -> NamedTempFile {
    NamedTempFile::new().expect("Failed to create temp file")
}

/// Lays surfaces out linearly and returns data unchanged.
pub struct IdentityTileEngine;

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
