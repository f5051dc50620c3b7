//! Raster - The decoded pixel grid
//!
//! `RasterBuffer` holds an image as an ordered sequence of rows, each row
//! an owned byte vector of the same length (the stride).
//!
//! # Row layout
//!
//! - Rows hold samples exactly as they are packed in a PNG scanline,
//!   without the per-row filter byte
//! - Sub-byte depths (1, 2, 4 bits) are packed MSB first; the last byte
//!   of a row may carry unused low bits
//! - 16-bit samples are big-endian
//! - Indexed images store palette indices, never resolved colors
//!
//! # Ownership model
//!
//! A buffer is exclusively owned. Pixel bytes are mutable through
//! [`RasterBuffer::row_mut`] and [`RasterBuffer::set`], but rows are only
//! ever handed out as slices, so their length cannot change after
//! construction. Width, height, color type, and bit depth are fixed for
//! the buffer's lifetime.

mod access;

use crate::error::{Error, Result};

/// Color type of the samples in each pixel
///
/// Discriminants are the PNG `IHDR` color type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorType {
    /// One gray sample per pixel
    Grayscale = 0,
    /// Red, green, and blue samples
    Rgb = 2,
    /// One palette index per pixel
    Indexed = 3,
    /// Gray sample followed by alpha
    GrayscaleAlpha = 4,
    /// Red, green, blue, and alpha samples
    Rgba = 6,
}

impl ColorType {
    /// Create `ColorType` from a PNG color type code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorType`] for codes other than 0, 2, 3, 4, 6.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(ColorType::Grayscale),
            2 => Ok(ColorType::Rgb),
            3 => Ok(ColorType::Indexed),
            4 => Ok(ColorType::GrayscaleAlpha),
            6 => Ok(ColorType::Rgba),
            _ => Err(Error::InvalidColorType(code)),
        }
    }

    /// Get the PNG color type code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Number of samples (channels) per pixel.
    pub fn channels(self) -> usize {
        match self {
            ColorType::Grayscale | ColorType::Indexed => 1,
            ColorType::GrayscaleAlpha => 2,
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        }
    }

    /// Check whether `depth` is a legal sample depth for this color type.
    ///
    /// Grayscale accepts every depth, indexed images stop at 8 bits,
    /// and the multi-channel types require 8 or 16 bits.
    pub fn allows_depth(self, depth: BitDepth) -> bool {
        match self {
            ColorType::Grayscale => true,
            ColorType::Indexed => depth != BitDepth::Sixteen,
            ColorType::Rgb | ColorType::GrayscaleAlpha | ColorType::Rgba => {
                matches!(depth, BitDepth::Eight | BitDepth::Sixteen)
            }
        }
    }
}

/// Bits per sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BitDepth {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
    Sixteen = 16,
}

impl BitDepth {
    /// Create `BitDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 1, 2, 4, 8, or 16.
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            1 => Ok(BitDepth::One),
            2 => Ok(BitDepth::Two),
            4 => Ok(BitDepth::Four),
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits per sample.
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Byte length of one row of `width` pixels, rounded up to a whole byte.
pub fn stride_for(width: u32, color_type: ColorType, bit_depth: BitDepth) -> usize {
    let bits = width as usize * color_type.channels() * bit_depth.bits() as usize;
    bits.div_ceil(8)
}

fn validate_format(width: u32, height: u32, color_type: ColorType, bit_depth: BitDepth) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if !color_type.allows_depth(bit_depth) {
        return Err(Error::UnsupportedCombination {
            color_type,
            bit_depth: bit_depth.bits(),
        });
    }
    Ok(())
}

/// Decoded image as a grid of fixed-stride byte rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    color_type: ColorType,
    bit_depth: BitDepth,
    stride: usize,
    rows: Vec<Vec<u8>>,
}

impl RasterBuffer {
    /// Create a zero-filled raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero and
    /// [`Error::UnsupportedCombination`] if the color type does not allow
    /// the bit depth.
    pub fn new(width: u32, height: u32, color_type: ColorType, bit_depth: BitDepth) -> Result<Self> {
        validate_format(width, height, color_type, bit_depth)?;
        let stride = stride_for(width, color_type, bit_depth);
        Ok(RasterBuffer {
            width,
            height,
            color_type,
            bit_depth,
            stride,
            rows: vec![vec![0u8; stride]; height as usize],
        })
    }

    /// Create a raster from already-separated rows.
    ///
    /// # Errors
    ///
    /// In addition to the checks of [`RasterBuffer::new`], fails with
    /// [`Error::RowCountMismatch`] if `rows.len() != height` and with
    /// [`Error::RowLengthMismatch`] for the first row whose length is not
    /// the stride.
    pub fn from_rows(
        width: u32,
        height: u32,
        color_type: ColorType,
        bit_depth: BitDepth,
        rows: Vec<Vec<u8>>,
    ) -> Result<Self> {
        validate_format(width, height, color_type, bit_depth)?;
        let stride = stride_for(width, color_type, bit_depth);
        if rows.len() != height as usize {
            return Err(Error::RowCountMismatch {
                expected: height as usize,
                actual: rows.len(),
            });
        }
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != stride) {
            return Err(Error::RowLengthMismatch {
                row,
                expected: stride,
                actual: bad.len(),
            });
        }
        Ok(RasterBuffer {
            width,
            height,
            color_type,
            bit_depth,
            stride,
            rows,
        })
    }

    /// Create a raster by splitting a contiguous `height * stride` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data` is not exactly
    /// `height * stride` bytes long.
    pub fn from_contiguous(
        width: u32,
        height: u32,
        color_type: ColorType,
        bit_depth: BitDepth,
        data: &[u8],
    ) -> Result<Self> {
        validate_format(width, height, color_type, bit_depth)?;
        let stride = stride_for(width, color_type, bit_depth);
        let expected = stride * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        let rows = data.chunks_exact(stride).map(<[u8]>::to_vec).collect();
        Ok(RasterBuffer {
            width,
            height,
            color_type,
            bit_depth,
            stride,
            rows,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn color_type(&self) -> ColorType {
        self.color_type
    }

    #[inline]
    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    /// Byte length of every row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Bits occupied by one pixel (channels times sample depth).
    pub fn bits_per_pixel(&self) -> usize {
        self.color_type.channels() * self.bit_depth.bits() as usize
    }

    /// Concatenate all rows into one `height * stride` buffer.
    pub fn to_contiguous(&self) -> Vec<u8> {
        self.rows.concat()
    }

    /// Consume the raster and return its rows.
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }
}
