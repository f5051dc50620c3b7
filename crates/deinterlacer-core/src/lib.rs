//! Deinterlacer Core - Raster data structures
//!
//! This crate provides the in-memory image model shared by the codec
//! adapter and the smoothing filter:
//!
//! - [`RasterBuffer`] - Row-major grid of fixed-stride byte rows
//! - [`ColorType`] / [`BitDepth`] - Structural pixel format
//! - [`stride_for`] - Row length arithmetic

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{BitDepth, ColorType, RasterBuffer, stride_for};
