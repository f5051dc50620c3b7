//! Vertical two-row averaging
//!
//! Every byte below the first row is replaced by the truncated mean of
//! itself and the byte directly above it, where "above" always means the
//! value before smoothing. The result is therefore a pure function of
//! the input raster:
//!
//! ```text
//! out(0, x) = in(0, x)
//! out(y, x) = (in(y, x) + in(y - 1, x)) / 2     for y >= 1
//! ```
//!
//! Columns are byte offsets within a row. For multi-byte pixels this
//! averages each byte lane on its own (the high and low bytes of a 16-bit
//! sample are averaged separately), and for packed sub-byte depths a lane
//! holds several pixels. Color type and bit depth are never consulted.

use deinterlacer_core::RasterBuffer;
use log::debug;

/// Truncated mean of two bytes.
#[inline]
pub fn average_bytes(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}

/// Smooth `raster` in place.
///
/// Rows are visited top to bottom. A copy of the previous row's original
/// bytes is carried forward, which gives the same result as walking each
/// byte column downwards with a running "previous original" value.
/// A single-row raster is left unchanged.
///
/// # Example
///
/// ```
/// use deinterlacer_core::{BitDepth, ColorType, RasterBuffer};
/// use deinterlacer_filter::smooth;
///
/// let mut raster = RasterBuffer::from_rows(
///     2, 2, ColorType::Grayscale, BitDepth::Eight,
///     vec![vec![10, 20], vec![30, 40]],
/// ).unwrap();
/// smooth(&mut raster);
/// assert_eq!(raster.row(1), Some(&[20, 30][..]));
/// ```
pub fn smooth(raster: &mut RasterBuffer) {
    debug!(
        "smoothing {} rows x {} byte lanes",
        raster.height(),
        raster.stride()
    );

    let mut rows = raster.rows_mut();
    let Some(first) = rows.next() else {
        return;
    };
    let mut prev = first.to_vec();
    let mut curr = vec![0u8; prev.len()];

    for row in rows {
        curr.copy_from_slice(row);
        for ((out, &c), &p) in row.iter_mut().zip(&curr).zip(&prev) {
            *out = average_bytes(c, p);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
}

/// Return a smoothed copy of `raster`, leaving the input untouched.
pub fn smoothed(raster: &RasterBuffer) -> RasterBuffer {
    let mut out = raster.clone();
    smooth(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use deinterlacer_core::{BitDepth, ColorType};

    fn gray8(rows: Vec<Vec<u8>>) -> RasterBuffer {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        RasterBuffer::from_rows(width, height, ColorType::Grayscale, BitDepth::Eight, rows).unwrap()
    }

    #[test]
    fn test_average_truncates() {
        assert_eq!(average_bytes(10, 30), 20);
        assert_eq!(average_bytes(1, 2), 1);
        assert_eq!(average_bytes(0, 1), 0);
        assert_eq!(average_bytes(255, 255), 255);
        assert_eq!(average_bytes(255, 254), 254);
    }

    #[test]
    fn test_smooth_2x2() {
        let mut raster = gray8(vec![vec![10, 20], vec![30, 40]]);
        smooth(&mut raster);
        assert_eq!(raster.row(0), Some(&[10, 20][..]));
        assert_eq!(raster.row(1), Some(&[20, 30][..]));
    }

    #[test]
    fn test_previous_is_original_value() {
        // Column 0, 100, 200: row 2 blends with 100, not with the smoothed 50
        let mut raster = gray8(vec![vec![0], vec![100], vec![200]]);
        smooth(&mut raster);
        assert_eq!(raster.get(1, 0), Some(50));
        assert_eq!(raster.get(2, 0), Some(150));
    }

    #[test]
    fn test_single_row_is_noop() {
        let mut raster = gray8(vec![vec![3, 1, 4, 1, 5, 9, 2, 6]]);
        let before = raster.clone();
        smooth(&mut raster);
        assert_eq!(raster, before);
    }

    #[test]
    fn test_single_column() {
        let mut raster = gray8(vec![vec![8], vec![0], vec![255], vec![1]]);
        smooth(&mut raster);
        let col: Vec<u8> = raster.rows().map(|r| r[0]).collect();
        assert_eq!(col, vec![8, 4, 127, 128]);
    }

    #[test]
    fn test_byte_lanes_ignore_channels() {
        // 1 pixel of 16-bit gray: high and low bytes average independently
        let rows = vec![vec![0x01, 0xFF], vec![0x02, 0x01]];
        let mut raster =
            RasterBuffer::from_rows(1, 2, ColorType::Grayscale, BitDepth::Sixteen, rows).unwrap();
        smooth(&mut raster);
        assert_eq!(raster.row(1), Some(&[0x01, 0x80][..]));
    }

    #[test]
    fn test_packed_bits_average_as_bytes() {
        let rows = vec![vec![0b1111_0000], vec![0b0000_1111]];
        let mut raster =
            RasterBuffer::from_rows(8, 2, ColorType::Grayscale, BitDepth::One, rows).unwrap();
        smooth(&mut raster);
        assert_eq!(raster.row(1), Some(&[0b0111_1111][..]));
    }

    #[test]
    fn test_smoothed_leaves_input() {
        let raster = gray8(vec![vec![10, 20], vec![30, 40]]);
        let out = smoothed(&raster);
        assert_eq!(raster.row(1), Some(&[30, 40][..]));
        assert_eq!(out.row(1), Some(&[20, 30][..]));
        assert_eq!(out.color_type(), raster.color_type());
        assert_eq!(out.bit_depth(), raster.bit_depth());
        assert_eq!(out.stride(), raster.stride());
    }
}
