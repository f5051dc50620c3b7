//! Format metadata
//!
//! Provides the metadata that travels alongside a [`RasterBuffer`]
//! through the pipeline, and header reading without decoding pixel data.

use crate::{IoError, IoResult};
use deinterlacer_core::{BitDepth, ColorType, RasterBuffer};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Image metadata read from (or written to) the PNG header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    pub color_type: ColorType,
    /// Bits per sample
    pub bit_depth: BitDepth,
    /// Whether the source file was Adam7 interlaced.
    /// Ignored on encode: output is never interlaced.
    pub interlaced: bool,
    /// Raw `PLTE` entries (RGB triples), required for indexed images
    pub palette: Option<Vec<u8>>,
    /// Raw `tRNS` chunk contents
    pub transparency: Option<Vec<u8>>,
}

impl ImageMeta {
    /// Metadata describing `raster` with no palette or transparency.
    pub fn for_raster(raster: &RasterBuffer) -> Self {
        ImageMeta {
            width: raster.width(),
            height: raster.height(),
            color_type: raster.color_type(),
            bit_depth: raster.bit_depth(),
            interlaced: false,
            palette: None,
            transparency: None,
        }
    }

    /// Check that the structural fields agree with `raster`.
    pub fn matches(&self, raster: &RasterBuffer) -> bool {
        self.width == raster.width()
            && self.height == raster.height()
            && self.color_type == raster.color_type()
            && self.bit_depth == raster.bit_depth()
    }
}

/// Read image metadata from a file path without decoding pixel data
pub fn read_header<P: AsRef<Path>>(path: P) -> IoResult<ImageMeta> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    read_header_mem(&data)
}

/// Read image metadata from bytes without decoding pixel data
pub fn read_header_mem(data: &[u8]) -> IoResult<ImageMeta> {
    if !crate::is_png_signature(data) {
        return Err(IoError::Format(
            "not a PNG image (signature mismatch)".to_string(),
        ));
    }

    #[cfg(feature = "png-format")]
    {
        crate::png::read_header_png(data)
    }

    #[cfg(not(feature = "png-format"))]
    {
        Err(IoError::UnsupportedFormat(
            "PNG support not enabled (feature: png-format)".to_string(),
        ))
    }
}
