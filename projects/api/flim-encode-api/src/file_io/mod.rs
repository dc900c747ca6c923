//! File I/O operations for encoding texture files.
//!
//! Inputs are memory mapped using `lightweight-mmap`.

mod batch;
mod error;
mod lightweight_mmap_impl;

pub use batch::*;
pub use error::*;
pub use lightweight_mmap_impl::*;
