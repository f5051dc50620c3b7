//! Error types for the pipeline
//!
//! Library calls never terminate the process. Every failure is returned
//! as an [`Error`] and the binary is the single place that turns one into
//! a diagnostic and a failing exit status.

use thiserror::Error;

/// Pipeline error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed invocation
    #[error("{0}")]
    Usage(String),

    /// Decoding or encoding failed
    #[error(transparent)]
    Io(#[from] deinterlacer_io::IoError),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
