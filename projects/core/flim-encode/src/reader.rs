//! Source file readers.

use crate::surface::SurfaceDescriptor;

/// Extracts a [`SurfaceDescriptor`] from the bytes of an image container file.
///
/// Implementations live outside the core crate, one per container format.
pub trait SurfaceReader {
    /// Error produced when the file cannot be read.
    type Error: core::fmt::Debug + core::fmt::Display;

    /// Read the first surface of `data`.
    ///
    /// `srgb` selects the sRGB variant of the GX2 format where one exists.
    fn read_surface(&self, data: &[u8], srgb: bool) -> Result<SurfaceDescriptor, Self::Error>;
}
