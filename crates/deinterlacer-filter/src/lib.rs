//! deinterlacer-filter - Vertical smoothing
//!
//! This crate provides the filter that blends each row of a raster with
//! the original contents of the row above it, hiding the combing left
//! by interlaced capture.

pub mod smooth;

pub use smooth::{average_bytes, smooth, smoothed};
