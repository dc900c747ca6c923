//! Error types for file I/O operations.

use flim_encode::EncodeError;
use thiserror::Error;

/// Result type for file operations
pub type FileOperationResult<T> = Result<T, FileOperationError>;

/// Errors that can occur during file operations.
///
/// File operations can fail due to either I/O errors (file not found, permission denied, etc.)
/// or encoding errors (unreadable source, unsupported format, etc.).
#[derive(Debug, Error)]
pub enum FileOperationError {
    /// I/O operation failed
    #[error("I/O operation failed: {0}")]
    Io(#[from] FileIoError),

    /// Encode operation failed
    #[error("Encode operation failed: {0}")]
    Encode(#[from] EncodeError),
}

/// File I/O errors that can occur with different backends
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}

// Direct From implementations for specific error types used with ? operator in file operations
impl From<lightweight_mmap::handles::HandleOpenError> for FileOperationError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::Io(FileIoError::FileHandle(e))
    }
}

impl From<lightweight_mmap::mmap::MmapError> for FileOperationError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::Io(FileIoError::MemoryMapping(e))
    }
}

impl FileOperationError {
    /// The encoding error, if this is not an I/O failure.
    pub fn encode_error(&self) -> Option<&EncodeError> {
        match self {
            Self::Encode(error) => Some(error),
            Self::Io(_) => None,
        }
    }
}
