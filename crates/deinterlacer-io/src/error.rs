//! I/O error types
//!
//! Provides a unified error type for decoding and encoding. The codec's
//! own error types never leave this crate: each call into the codec maps
//! its failure into one of the variants below, so callers only need to
//! handle `IoError`.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The input file could not be opened for reading
    #[error("file {} could not be opened: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or truncated
    #[error("file {} could not be created: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard I/O error outside of open/create (short read, flush failure)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input does not start with the PNG signature
    #[error("format error: {0}")]
    Format(String),

    /// The codec failed while reading the header or pixel rows
    #[error("decode error: {0}")]
    Decode(String),

    /// The codec failed while writing the header, rows, or trailer
    #[error("encode error: {0}")]
    Encode(String),

    /// The format is not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// An error from the core library (e.g. an illegal color/depth pair)
    #[error("core error: {0}")]
    Core(#[from] deinterlacer_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
