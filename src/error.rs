//! Error types for store-zip

use std::io;

/// Result type for store-zip operations
pub type Result<T> = std::result::Result<T, StoreZipError>;

/// Error types that can occur while producing an archive
#[derive(Debug)]
pub enum StoreZipError {
    /// I/O error while writing archive bytes to a sink
    Io(io::Error),
    /// An entry's content source failed before it was fully read.
    /// Carries the entry name and the underlying source error.
    Materialize(String, io::Error),
}

impl std::fmt::Display for StoreZipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreZipError::Io(e) => write!(f, "I/O error: {}", e),
            StoreZipError::Materialize(name, e) => {
                write!(f, "Failed to materialize entry '{}': {}", name, e)
            }
        }
    }
}

impl std::error::Error for StoreZipError {}

impl From<io::Error> for StoreZipError {
    fn from(err: io::Error) -> Self {
        StoreZipError::Io(err)
    }
}
