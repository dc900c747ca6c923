//! DDS support for the `flim-encode` crate.
//!
//! Provides [`DdsSurfaceReader`], a [`SurfaceReader`] that extracts the first surface of a
//! DDS file along with its GX2 format code and channel selector.
//!
//! # Example
//!
//! ```
//! use flim_encode_dds::DdsSurfaceReader;
//! use flim_encode::SurfaceReader;
//!
//! fn read_dimensions(file: &[u8]) -> Option<(u32, u32)> {
//!     let surface = DdsSurfaceReader.read_surface(file, false).ok()?;
//!     Some((surface.width, surface.height))
//! }
//! ```
//!
//! [`SurfaceReader`]: flim_encode::SurfaceReader
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod dds;
pub mod error;
mod reader;

pub use error::{ReadError, ReadResult};
pub use reader::DdsSurfaceReader;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
