//! Encodes GX2 surfaces into FLIM layout images.
//!
//! A conversion takes a [`SurfaceDescriptor`] (as produced by a [`SurfaceReader`]) and a
//! [`ConversionConfig`], and runs it through the following steps:
//!
//! 1. Translate the GX2 surface format into a [`FlimFormat`] ([`format::resolve_flim_format`]).
//! 2. Validate the channel selector against the FLIM format, swapping red and blue
//!    in the pixel data where that fixes the ordering ([`channel::validate_and_correct`]).
//! 3. Resolve the tiled layout through a [`TileEngine`].
//! 4. Swizzle the padded pixel data through the same [`TileEngine`].
//! 5. Pack the result into a FLIM container ([`container::pack_container`]).
//!
//! The tiling math is architecture specific and is supplied by the caller; this crate only
//! defines the [`TileEngine`] interface.
//!
//! # Example
//!
//! ```
//! use flim_encode::{encode_surface, ConversionConfig, SurfaceDescriptor, TileEngine};
//!
//! fn example<E: TileEngine>(engine: &E, surface: &SurfaceDescriptor) -> Vec<u8> {
//!     // Empty output means the surface was rejected.
//!     encode_surface(engine, surface, &ConversionConfig::default())
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod channel;
pub mod config;
pub mod container;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod reader;
pub mod surface;
pub mod tile;

#[cfg(feature = "bench")]
pub mod bench;

// Re-export key types
pub use channel::{ChannelCorrection, ChannelSelector, ChannelWarning, ComponentSource};
pub use config::{ConversionConfig, SwizzleValue, TileMode};
pub use container::EncodedTexture;
pub use error::{EncodeError, EncodeResult};
pub use format::{resolve_flim_format, FlimFormat, SurfaceFormat};
pub use pipeline::{encode_surface, try_encode_surface, EncodeOutcome};
pub use reader::SurfaceReader;
pub use surface::{FourCC, SurfaceDescriptor};
pub use tile::{swizzle_encoding, SwizzleRequest, TileEngine, TileLayout};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
