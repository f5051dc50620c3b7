//! Error types for deinterlacer-core
//!
//! Provides a unified error type for raster construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! the internal row layout.

use thiserror::Error;

/// Deinterlacer core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid bit depth
    #[error("invalid bit depth: {0} bits per sample")]
    InvalidDepth(u8),

    /// Invalid color type code
    #[error("invalid color type code: {0}")]
    InvalidColorType(u8),

    /// Color type and bit depth cannot be combined
    #[error("unsupported combination: {color_type:?} at {bit_depth} bits per sample")]
    UnsupportedCombination { color_type: crate::ColorType, bit_depth: u8 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A row does not have the stride length
    #[error("row {row} has {actual} bytes, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Contiguous pixel data has the wrong total size
    #[error("pixel data has {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Row count differs from the image height
    #[error("expected {expected} rows, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },
}

/// Result type alias for raster operations
pub type Result<T> = std::result::Result<T, Error>;
