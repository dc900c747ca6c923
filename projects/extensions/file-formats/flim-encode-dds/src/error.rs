//! Error types for reading DDS files.

use thiserror::Error;

/// Result type for DDS read operations
pub type ReadResult<T> = Result<T, ReadError>;

/// Errors that can occur while reading a surface from a DDS file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The data does not start with a DDS header.
    #[error("Not a DDS file")]
    NotADds,

    /// The pixel format has no GX2 counterpart.
    #[error("Unknown or unsupported DDS pixel format")]
    UnknownFormat,

    /// A component selector value is outside `0..=5`.
    #[error("Invalid channel selector: {0:?}")]
    InvalidChannelSelector([u8; 4]),

    /// The size of mip level 0 does not fit in memory.
    #[error("Surface dimensions too large: {width}x{height}")]
    DimensionsTooLarge {
        /// Width from the header
        width: u32,
        /// Height from the header
        height: u32,
    },

    /// The file ends before the data its header describes.
    #[error("Input too short: expected at least {expected} bytes, got {actual}")]
    InputTooShort {
        /// Minimum number of bytes required
        expected: usize,
        /// Number of bytes available
        actual: usize,
    },
}
