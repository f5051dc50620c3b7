//! Deinterlacer - Remove interlacing combs from PNG images
//!
//! Decodes a PNG into a [`RasterBuffer`], replaces every row below the
//! first with the average of itself and the original row above, and
//! writes a non-interlaced PNG with the same format.
//!
//! # Example
//!
//! ```
//! use deinterlacer::{BitDepth, ColorType, RasterBuffer, smooth};
//!
//! let mut raster = RasterBuffer::from_rows(
//!     2, 2, ColorType::Grayscale, BitDepth::Eight,
//!     vec![vec![10, 20], vec![30, 40]],
//! ).unwrap();
//! smooth(&mut raster);
//! assert_eq!(raster.row(0), Some(&[10, 20][..]));
//! assert_eq!(raster.row(1), Some(&[20, 30][..]));
//! ```

mod error;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use deinterlacer_core::{BitDepth, ColorType, RasterBuffer, stride_for};

// Re-export domain crates as modules to avoid name conflicts
pub use deinterlacer_filter as filter;
pub use deinterlacer_io as io;

pub use deinterlacer_filter::smooth;
pub use deinterlacer_io::ImageMeta;
pub use error::{Error, Result};
pub use pipeline::{USAGE, parse_args, run, run_mem};
