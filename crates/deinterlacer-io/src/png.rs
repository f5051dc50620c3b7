//! PNG codec adapter
//!
//! Bridges [`RasterBuffer`] and [`ImageMeta`] to the `png` crate. Rows
//! are read and written in their raw scanline encoding: the decoder runs
//! with identity transformations, so sub-byte samples stay packed,
//! 16-bit samples stay big-endian, and indexed images keep their palette
//! indices. Adam7 passes are reassembled by the decoder into plain
//! top-to-bottom rows.

use crate::{ImageMeta, IoError, IoResult};
use deinterlacer_core::{BitDepth, ColorType, RasterBuffer};
use log::debug;
use png::{Decoder, Encoder, Info, Transformations};
use std::io::{BufRead, Cursor, Seek, Write};

fn meta_from_info(info: &Info<'_>) -> IoResult<ImageMeta> {
    Ok(ImageMeta {
        width: info.width,
        height: info.height,
        color_type: ColorType::from_code(info.color_type as u8)?,
        bit_depth: BitDepth::from_bits(info.bit_depth as u8)?,
        interlaced: info.interlaced,
        palette: info.palette.as_ref().map(|p| p.to_vec()),
        transparency: info.trns.as_ref().map(|t| t.to_vec()),
    })
}

/// Read the PNG header without decoding pixel data
pub fn read_header_png(data: &[u8]) -> IoResult<ImageMeta> {
    let reader = Decoder::new(Cursor::new(data))
        .read_info()
        .map_err(|e| IoError::Decode(format!("PNG header error: {}", e)))?;
    meta_from_info(reader.info())
}

/// Read a PNG image starting at its signature
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<(RasterBuffer, ImageMeta)> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::Decode(format!("PNG header error: {}", e)))?;

    let meta = meta_from_info(reader.info())?;
    debug!(
        "PNG header: {}x{} {:?} {} bit, interlaced={}",
        meta.width,
        meta.height,
        meta.color_type,
        meta.bit_depth.bits(),
        meta.interlaced
    );

    // Read image data; interlaced passes are merged by the decoder
    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::Decode("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::Decode(format!("PNG frame error: {}", e)))?;

    let data = &buf[..output_info.buffer_size()];
    let raster = RasterBuffer::from_contiguous(
        meta.width,
        meta.height,
        meta.color_type,
        meta.bit_depth,
        data,
    )
    .map_err(|e| IoError::Decode(format!("PNG row layout error: {}", e)))?;
    debug!(
        "decoded {} rows of {} bytes",
        raster.height(),
        raster.stride()
    );

    Ok((raster, meta))
}

/// Write a PNG image
///
/// The header is built from `meta` but always declares no interlacing;
/// the encoder never emits Adam7 passes.
pub fn write_png<W: Write>(raster: &RasterBuffer, meta: &ImageMeta, writer: W) -> IoResult<()> {
    if !meta.matches(raster) {
        return Err(IoError::Encode(format!(
            "metadata {}x{} {:?} {} bit does not describe raster {}x{} {:?} {} bit",
            meta.width,
            meta.height,
            meta.color_type,
            meta.bit_depth.bits(),
            raster.width(),
            raster.height(),
            raster.color_type(),
            raster.bit_depth().bits()
        )));
    }

    let color_type = match meta.color_type {
        ColorType::Grayscale => png::ColorType::Grayscale,
        ColorType::Rgb => png::ColorType::Rgb,
        ColorType::Indexed => png::ColorType::Indexed,
        ColorType::GrayscaleAlpha => png::ColorType::GrayscaleAlpha,
        ColorType::Rgba => png::ColorType::Rgba,
    };
    let bit_depth = match meta.bit_depth {
        BitDepth::One => png::BitDepth::One,
        BitDepth::Two => png::BitDepth::Two,
        BitDepth::Four => png::BitDepth::Four,
        BitDepth::Eight => png::BitDepth::Eight,
        BitDepth::Sixteen => png::BitDepth::Sixteen,
    };

    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);
    if let Some(palette) = &meta.palette {
        encoder.set_palette(palette.clone());
    }
    if let Some(trns) = &meta.transparency {
        encoder.set_trns(trns.clone());
    }

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&raster.to_contiguous())
        .map_err(|e| IoError::Encode(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::Encode(format!("PNG finish error: {}", e)))?;

    debug!(
        "encoded {}x{} {:?} {} bit, not interlaced",
        raster.width(),
        raster.height(),
        meta.color_type,
        meta.bit_depth.bits()
    );
    Ok(())
}
