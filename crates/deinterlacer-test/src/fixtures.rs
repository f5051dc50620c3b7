//! Synthetic test images
//!
//! Rasters are generated from a seed so every run sees the same bytes.
//! Padding bits at the end of packed sub-byte rows are always cleared.

use deinterlacer_core::{BitDepth, ColorType, RasterBuffer, stride_for};
use deinterlacer_io::{ImageMeta, PNG_SIGNATURE};

/// Every color type / bit depth pair a PNG file can carry
pub const ALL_FORMATS: [(ColorType, BitDepth); 15] = [
    (ColorType::Grayscale, BitDepth::One),
    (ColorType::Grayscale, BitDepth::Two),
    (ColorType::Grayscale, BitDepth::Four),
    (ColorType::Grayscale, BitDepth::Eight),
    (ColorType::Grayscale, BitDepth::Sixteen),
    (ColorType::Rgb, BitDepth::Eight),
    (ColorType::Rgb, BitDepth::Sixteen),
    (ColorType::Indexed, BitDepth::One),
    (ColorType::Indexed, BitDepth::Two),
    (ColorType::Indexed, BitDepth::Four),
    (ColorType::Indexed, BitDepth::Eight),
    (ColorType::GrayscaleAlpha, BitDepth::Eight),
    (ColorType::GrayscaleAlpha, BitDepth::Sixteen),
    (ColorType::Rgba, BitDepth::Eight),
    (ColorType::Rgba, BitDepth::Sixteen),
];

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn next_byte(&mut self) -> u8 {
        (self.next() >> 56) as u8
    }
}

/// Mask that keeps only the image bits of a row's last byte
fn last_byte_mask(width: u32, color_type: ColorType, bit_depth: BitDepth) -> u8 {
    let bits = width as usize * color_type.channels() * bit_depth.bits() as usize;
    match bits % 8 {
        0 => 0xFF,
        used => !(0xFFu8 >> used),
    }
}

/// Largest palette index representable at `bit_depth` (indexed images only)
fn max_index(bit_depth: BitDepth) -> u8 {
    ((1u16 << bit_depth.bits().min(8)) - 1) as u8
}

fn finish_rows(raster: &mut RasterBuffer) {
    let mask = last_byte_mask(raster.width(), raster.color_type(), raster.bit_depth());
    for row in raster.rows_mut() {
        if let Some(last) = row.last_mut() {
            *last &= mask;
        }
    }
}

/// Pseudo-random raster in the given format
pub fn random_raster(
    width: u32,
    height: u32,
    color_type: ColorType,
    bit_depth: BitDepth,
    seed: u32,
) -> RasterBuffer {
    let mut raster = RasterBuffer::new(width, height, color_type, bit_depth)
        .expect("fixture format must be legal");
    let mut rng = SimpleRng::new(seed);
    for row in raster.rows_mut() {
        for b in row.iter_mut() {
            *b = rng.next_byte();
        }
    }
    finish_rows(&mut raster);
    raster
}

/// Raster whose bytes vary down each column
pub fn gradient_raster(
    width: u32,
    height: u32,
    color_type: ColorType,
    bit_depth: BitDepth,
) -> RasterBuffer {
    let mut raster = RasterBuffer::new(width, height, color_type, bit_depth)
        .expect("fixture format must be legal");
    for (y, row) in raster.rows_mut().enumerate() {
        for (x, b) in row.iter_mut().enumerate() {
            *b = ((x * 7 + y * y * 13) % 256) as u8;
        }
    }
    finish_rows(&mut raster);
    raster
}

/// Metadata for `raster`, with a full gray palette when the image is indexed
pub fn meta_for(raster: &RasterBuffer) -> ImageMeta {
    let mut meta = ImageMeta::for_raster(raster);
    if raster.color_type() == ColorType::Indexed {
        let entries = max_index(raster.bit_depth()) as usize + 1;
        let palette = (0..entries)
            .flat_map(|i| {
                let v = (i * 255 / (entries - 1).max(1)) as u8;
                [v, v, v]
            })
            .collect();
        meta.palette = Some(palette);
    }
    meta
}

/// Adam7 passes as (x start, y start, x step, y step)
const ADAM7: [(usize, usize, usize, usize); 7] = [
    (0, 0, 8, 8),
    (4, 0, 8, 8),
    (0, 4, 4, 8),
    (2, 0, 4, 4),
    (0, 2, 2, 4),
    (1, 0, 2, 2),
    (0, 1, 1, 2),
];

/// Copy pixel `sx` of `src` to pixel `dx` of `dst` for `bpp` bits per pixel
fn copy_pixel(src: &[u8], sx: usize, dst: &mut [u8], dx: usize, bpp: usize) {
    if bpp >= 8 {
        let n = bpp / 8;
        dst[dx * n..dx * n + n].copy_from_slice(&src[sx * n..sx * n + n]);
    } else {
        let per_byte = 8 / bpp;
        let mask = ((1u16 << bpp) - 1) as u8;
        let src_shift = 8 - bpp * (sx % per_byte + 1);
        let val = (src[sx / per_byte] >> src_shift) & mask;
        let dst_shift = 8 - bpp * (dx % per_byte + 1);
        dst[dx / per_byte] |= val << dst_shift;
    }
}

fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(kind);
    hasher.update(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Encode `raster` as an Adam7-interlaced PNG
///
/// Every scanline uses filter type 0 (None). Empty passes are omitted.
pub fn write_interlaced_png(raster: &RasterBuffer, meta: &ImageMeta) -> Vec<u8> {
    let width = raster.width() as usize;
    let height = raster.height() as usize;
    let bpp = raster.bits_per_pixel();

    let mut scanlines = Vec::new();
    for &(x0, y0, dx, dy) in &ADAM7 {
        if x0 >= width || y0 >= height {
            continue;
        }
        let pass_w = (width - x0).div_ceil(dx);
        let pass_stride = stride_for(pass_w as u32, raster.color_type(), raster.bit_depth());
        for y in (y0..height).step_by(dy) {
            let src = raster.row(y).unwrap_or_default();
            let mut line = vec![0u8; pass_stride];
            for (i, x) in (x0..width).step_by(dx).enumerate() {
                copy_pixel(src, x, &mut line, i, bpp);
            }
            scanlines.push(0u8);
            scanlines.extend_from_slice(&line);
        }
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&raster.width().to_be_bytes());
    ihdr.extend_from_slice(&raster.height().to_be_bytes());
    ihdr.push(raster.bit_depth().bits());
    ihdr.push(raster.color_type().code());
    ihdr.extend_from_slice(&[0, 0, 1]);

    let mut out = PNG_SIGNATURE.to_vec();
    write_chunk(&mut out, b"IHDR", &ihdr);
    if let Some(palette) = &meta.palette {
        write_chunk(&mut out, b"PLTE", palette);
    }
    if let Some(trns) = &meta.transparency {
        write_chunk(&mut out, b"tRNS", trns);
    }
    let idat = miniz_oxide::deflate::compress_to_vec_zlib(&scanlines, 6);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_raster_is_deterministic() {
        let a = random_raster(9, 4, ColorType::Rgb, BitDepth::Eight, 42);
        let b = random_raster(9, 4, ColorType::Rgb, BitDepth::Eight, 42);
        let c = random_raster(9, 4, ColorType::Rgb, BitDepth::Eight, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_padding_bits_cleared() {
        let raster = random_raster(5, 6, ColorType::Grayscale, BitDepth::One, 7);
        assert!(raster.rows().all(|r| r[0] & 0b0000_0111 == 0));
        assert_eq!(last_byte_mask(8, ColorType::Grayscale, BitDepth::One), 0xFF);
        assert_eq!(last_byte_mask(3, ColorType::Indexed, BitDepth::Two), 0b1111_1100);
    }

    #[test]
    fn test_copy_pixel_packed() {
        let src = [0b1011_0000u8];
        let mut dst = [0u8];
        copy_pixel(&src, 2, &mut dst, 0, 1);
        assert_eq!(dst[0], 0b1000_0000);
        copy_pixel(&src, 0, &mut dst, 3, 1);
        assert_eq!(dst[0], 0b1001_0000);
    }

    #[test]
    fn test_meta_for_indexed_palette() {
        let raster = gradient_raster(4, 4, ColorType::Indexed, BitDepth::Two);
        let meta = meta_for(&raster);
        assert_eq!(meta.palette.as_ref().map(Vec::len), Some(12));
    }

    #[test]
    fn test_interlaced_header() {
        let raster = gradient_raster(3, 3, ColorType::Grayscale, BitDepth::Eight);
        let png = write_interlaced_png(&raster, &meta_for(&raster));
        assert!(png.starts_with(&PNG_SIGNATURE));
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(png[28], 1);
    }
}
