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
pub use rstest::rstest;

pub use crate::channel::ChannelSelector;
pub use crate::surface::{FourCC, SurfaceDescriptor};

use crate::config::TileMode;
use crate::format::SurfaceFormat;
use crate::tile::{SwizzleRequest, TileEngine, TileLayout};
use core::cell::Cell;

/// An `R8_G8_B8_A8_UNORM` surface with an RGBA selector and patterned pixel data.
pub(crate) fn rgba8_surface(width: u32, height: u32) -> SurfaceDescriptor {
    let size = width as usize * height as usize * 4;
    SurfaceDescriptor {
        width,
        height,
        format_code: SurfaceFormat::R8G8B8A8Unorm.to_raw(),
        fourcc: FourCC::NONE,
        channel_selector: ChannelSelector::RGBA,
        mip_count: 1,
        base_level_size: size,
        pixel_data: (0..size).map(|x| x as u8).collect(),
    }
}

fn linear_layout(format: SurfaceFormat, width: u32, height: u32, tile_mode: TileMode) -> TileLayout {
    TileLayout {
        tiled_height: height,
        pitch: width,
        bits_per_pixel: format.bits_per_element(),
        surface_size: format.level_size(width, height).unwrap(),
        tile_mode,
        depth: 1,
    }
}

/// Lays surfaces out linearly and returns data unchanged.
pub(crate) struct IdentityTileEngine;

impl TileEngine for IdentityTileEngine {
    fn resolve_layout(
        &self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
        tile_mode: TileMode,
    ) -> TileLayout {
        linear_layout(format, width, height, tile_mode)
    }

    fn swizzle(&self, request: &SwizzleRequest<'_>) -> Vec<u8> {
        request.data.to_vec()
    }
}

/// [`IdentityTileEngine`] reporting a fixed surface depth.
pub(crate) struct FixedDepthTileEngine(pub u32);

impl TileEngine for FixedDepthTileEngine {
    fn resolve_layout(
        &self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
        tile_mode: TileMode,
    ) -> TileLayout {
        TileLayout {
            depth: self.0,
            ..linear_layout(format, width, height, tile_mode)
        }
    }

    fn swizzle(&self, request: &SwizzleRequest<'_>) -> Vec<u8> {
        request.data.to_vec()
    }
}

/// [`IdentityTileEngine`] reporting a fixed padded surface size.
pub(crate) struct PaddingTileEngine(pub usize);

impl TileEngine for PaddingTileEngine {
    fn resolve_layout(
        &self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
        tile_mode: TileMode,
    ) -> TileLayout {
        TileLayout {
            surface_size: self.0,
            ..linear_layout(format, width, height, tile_mode)
        }
    }

    fn swizzle(&self, request: &SwizzleRequest<'_>) -> Vec<u8> {
        request.data.to_vec()
    }
}

/// Fails the test if called.
pub(crate) struct PanickingTileEngine;

impl TileEngine for PanickingTileEngine {
    fn resolve_layout(&self, _: SurfaceFormat, _: u32, _: u32, _: TileMode) -> TileLayout {
        panic!("resolve_layout should not be called")
    }

    fn swizzle(&self, _: &SwizzleRequest<'_>) -> Vec<u8> {
        panic!("swizzle should not be called")
    }
}

/// Parameters of a swizzle call, without the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RecordedSwizzle {
    pub format: SurfaceFormat,
    pub tile_mode: TileMode,
    pub swizzle: u32,
}

/// [`IdentityTileEngine`] remembering the last swizzle call.
#[derive(Default)]
pub(crate) struct RecordingTileEngine {
    last: Cell<Option<RecordedSwizzle>>,
}

impl RecordingTileEngine {
    pub fn last_request(&self) -> RecordedSwizzle {
        self.last.get().expect("swizzle was not called")
    }
}

impl TileEngine for RecordingTileEngine {
    fn resolve_layout(
        &self,
        format: SurfaceFormat,
        width: u32,
        height: u32,
        tile_mode: TileMode,
    ) -> TileLayout {
        linear_layout(format, width, height, tile_mode)
    }

    fn swizzle(&self, request: &SwizzleRequest<'_>) -> Vec<u8> {
        self.last.set(Some(RecordedSwizzle {
            format: request.format,
            tile_mode: request.tile_mode,
            swizzle: request.swizzle,
        }));
        request.data.to_vec()
    }
}
