//! High-level API for encoding texture files into FLIM layout images.
//!
//! Combines a [`SurfaceReader`] for the source container with the [`flim_encode`] pipeline.
//!
//! - [`try_encode_slice`] / [`encode_slice`] work on in-memory files.
//! - The [`file_io`] module (feature `file-io`) works on paths, memory mapping the input.
//! - [`file_io::encode_batch`] encodes many files, in parallel with feature `multithreaded`.
//!
//! # Example
//!
//! ```
//! use flim_encode::{ConversionConfig, SurfaceReader, TileEngine};
//! use flim_encode_api::encode_slice;
//!
//! fn example<R: SurfaceReader, E: TileEngine>(reader: &R, engine: &E, dds: &[u8]) -> Vec<u8> {
//!     // Empty output means the file was rejected.
//!     encode_slice(reader, engine, dds, &ConversionConfig::default())
//! }
//! ```
//!
//! [`SurfaceReader`]: flim_encode::SurfaceReader
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod api;

#[cfg(feature = "file-io")]
pub mod file_io;

pub use api::{encode_slice, try_encode_slice};
pub use flim_encode::{
    ConversionConfig, EncodeError, EncodeOutcome, EncodeResult, SwizzleValue, TileMode,
};

#[cfg(feature = "file-io")]
pub use file_io::{FileOperationError, FileOperationResult};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
