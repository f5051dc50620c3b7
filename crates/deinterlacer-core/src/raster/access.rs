//! Byte access functions
//!
//! Rasters are addressed by `(row, col)` where `col` is a byte offset
//! within the row, not a pixel index. For images with more than one byte
//! per pixel, consecutive columns walk across the channels of a pixel.

use super::RasterBuffer;
use crate::error::{Error, Result};

impl RasterBuffer {
    /// Get the byte at (`row`, `col`).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Get the byte at (`row`, `col`) without returning an `Option`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= stride`.
    #[inline]
    pub fn get_unchecked(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Set the byte at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, val: u8) -> Result<()> {
        let height = self.rows.len();
        let stride = self.stride;
        let line = self.rows.get_mut(row).ok_or(Error::IndexOutOfBounds {
            index: row,
            len: height,
        })?;
        let byte = line.get_mut(col).ok_or(Error::IndexOutOfBounds {
            index: col,
            len: stride,
        })?;
        *byte = val;
        Ok(())
    }

    /// Set the byte at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= stride`.
    #[inline]
    pub fn set_unchecked(&mut self, row: usize, col: usize, val: u8) {
        self.rows[row][col] = val;
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Mutably borrow one row. The slice cannot be resized.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [u8]> {
        self.rows.get_mut(row).map(Vec::as_mut_slice)
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterate mutably over rows from top to bottom.
    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [u8]> + '_ {
        self.rows.iter_mut().map(Vec::as_mut_slice)
    }
}
