//! deinterlacer-io - PNG codec adapter
//!
//! Decodes PNG files into a [`RasterBuffer`] plus [`ImageMeta`] and
//! encodes them back. The compression, chunk structure, and CRC checks
//! are delegated to the `png` crate; every failure it reports is mapped
//! to an [`IoError`] at this boundary.
//!
//! # Example
//!
//! ```no_run
//! use deinterlacer_io::{decode, encode};
//!
//! let (raster, meta) = decode("input.png").unwrap();
//! encode("output.png", &raster, &meta).unwrap();
//! ```

mod error;
pub mod format;
pub mod header;
#[cfg(feature = "png-format")]
pub mod png;

pub use deinterlacer_core::{BitDepth, ColorType, RasterBuffer};
pub use error::{IoError, IoResult};
pub use format::{PNG_SIGNATURE, check_signature, is_png_signature};
pub use header::{ImageMeta, read_header, read_header_mem};

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, SeekFrom, Write};
use std::path::Path;

/// Decode a PNG file into a raster and its metadata.
///
/// The signature is verified before the codec sees the stream. The file
/// handle is closed before this function returns, on every path.
///
/// # Errors
///
/// - [`IoError::Open`] if `path` cannot be opened
/// - [`IoError::Format`] if the first 8 bytes are not the PNG signature
/// - [`IoError::Decode`] if the codec fails on the header or image data
pub fn decode<P: AsRef<Path>>(path: P) -> IoResult<(RasterBuffer, ImageMeta)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode_reader(BufReader::new(file)).map_err(|e| match e {
        IoError::Format(msg) => IoError::Format(format!("file {}: {}", path.display(), msg)),
        other => other,
    })
}

/// Decode a PNG stream positioned at its signature.
pub fn decode_reader<R: BufRead + Seek>(mut reader: R) -> IoResult<(RasterBuffer, ImageMeta)> {
    let start = reader.stream_position()?;
    check_signature(&mut reader)?;
    // The codec reads the signature itself
    reader.seek(SeekFrom::Start(start))?;
    decode_checked(reader)
}

/// Decode a PNG image held in memory.
pub fn decode_mem(data: &[u8]) -> IoResult<(RasterBuffer, ImageMeta)> {
    decode_reader(Cursor::new(data))
}

#[cfg(feature = "png-format")]
fn decode_checked<R: BufRead + Seek>(reader: R) -> IoResult<(RasterBuffer, ImageMeta)> {
    crate::png::read_png(reader)
}

#[cfg(not(feature = "png-format"))]
fn decode_checked<R: BufRead + Seek>(_reader: R) -> IoResult<(RasterBuffer, ImageMeta)> {
    Err(IoError::UnsupportedFormat(
        "PNG support not enabled (feature: png-format)".to_string(),
    ))
}

/// Encode a raster to a PNG file, creating or truncating it.
///
/// The output header always declares no interlacing. A failed encode may
/// leave a partially written file behind.
///
/// # Errors
///
/// - [`IoError::Create`] if `path` cannot be created
/// - [`IoError::Encode`] if the codec fails on the header, rows, or trailer
/// - [`IoError::Io`] if flushing the file fails
pub fn encode<P: AsRef<Path>>(path: P, raster: &RasterBuffer, meta: &ImageMeta) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| IoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    encode_writer(&mut out, raster, meta)?;
    out.flush()?;
    Ok(())
}

/// Encode a raster as PNG into any writer.
pub fn encode_writer<W: Write>(writer: W, raster: &RasterBuffer, meta: &ImageMeta) -> IoResult<()> {
    #[cfg(feature = "png-format")]
    {
        crate::png::write_png(raster, meta, writer)
    }

    #[cfg(not(feature = "png-format"))]
    {
        let _ = (writer, raster, meta);
        Err(IoError::UnsupportedFormat(
            "PNG support not enabled (feature: png-format)".to_string(),
        ))
    }
}

/// Encode a raster as PNG into a new byte vector.
pub fn encode_mem(raster: &RasterBuffer, meta: &ImageMeta) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    encode_writer(&mut buffer, raster, meta)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mem_rejects_bad_signature() {
        let mut data = PNG_SIGNATURE.to_vec();
        data[1] = b'Q';
        data.extend_from_slice(&[0u8; 32]);
        assert!(matches!(decode_mem(&data), Err(IoError::Format(_))));
    }

    #[test]
    fn test_decode_mem_grayscale() {
        let raster = RasterBuffer::from_rows(
            2,
            2,
            ColorType::Grayscale,
            BitDepth::Eight,
            vec![vec![1, 2], vec![3, 4]],
        )
        .unwrap();
        let png = encode_mem(&raster, &ImageMeta::for_raster(&raster)).unwrap();
        assert!(is_png_signature(&png));

        let (decoded, meta) = decode_mem(&png).unwrap();
        assert_eq!(decoded, raster);
        assert_eq!(meta, ImageMeta::for_raster(&raster));
    }

    #[test]
    fn test_decode_missing_file() {
        let err = decode("/nonexistent/dir/input.png").unwrap_err();
        assert!(matches!(err, IoError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/dir/input.png"));
    }

    #[test]
    fn test_encode_uncreatable_path() {
        let raster = RasterBuffer::new(1, 1, ColorType::Grayscale, BitDepth::Eight).unwrap();
        let err = encode(
            "/nonexistent/dir/output.png",
            &raster,
            &ImageMeta::for_raster(&raster),
        )
        .unwrap_err();
        assert!(matches!(err, IoError::Create { .. }));
    }
}
