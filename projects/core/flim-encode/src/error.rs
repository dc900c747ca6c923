//! Error types for encode operations.

use thiserror::Error;

/// Result type for encode operations
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that abort a conversion.
///
/// Every variant is fatal: the conversion produces no output at all. Channel ordering
/// problems are not errors; they are reported through [`ChannelWarning`] and the
/// conversion continues.
///
/// [`ChannelWarning`]: crate::channel::ChannelWarning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The source surface could not be read, or it has zero dimensions / no pixel data.
    #[error("Source surface could not be read or is empty")]
    SourceUnreadable,

    /// The GX2 surface format has no FLIM counterpart.
    #[error("Unsupported surface format: {0:#x}")]
    UnsupportedFormat(u32),

    /// The tile engine resolved a layout with a depth other than 1.
    #[error("Unsupported surface depth: {0} (only 2D surfaces are supported)")]
    UnsupportedDepth(u32),

    /// The surface does not fit the 16-bit dimension fields of the image descriptor.
    #[error("Surface dimensions {width}x{height} exceed the container limit of 65535")]
    DimensionsTooLarge {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },

    /// The payload does not fit the 32-bit size fields of the container.
    #[error("Payload of {0} bytes is too large for the container")]
    PayloadTooLarge(usize),
}
