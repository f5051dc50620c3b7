//! Decode, smooth, encode
//!
//! A single-shot pipeline: each stage runs to completion before the next
//! begins and the first failure ends the run. Nothing is retried, and an
//! output file left half-written by a failed encode is not removed.

use crate::{Error, Result};
use deinterlacer_filter::smooth;
use deinterlacer_io::{ImageMeta, decode, decode_mem, encode, encode_mem};
use log::info;
use std::path::{Path, PathBuf};

/// Usage line printed for a malformed invocation
pub const USAGE: &str = "Usage: png-deinterlacer <input_png_file> <output_png_file>";

/// Extract the input and output paths from the process arguments.
///
/// `args` includes the program name, as returned by [`std::env::args_os`].
/// Exactly two further arguments are accepted. No filesystem access happens
/// here.
pub fn parse_args<I, S>(args: I) -> Result<(PathBuf, PathBuf)>
where
    I: IntoIterator<Item = S>,
    S: Into<PathBuf>,
{
    let mut args = args.into_iter().skip(1).map(Into::into);
    match (args.next(), args.next(), args.next()) {
        (Some(input), Some(output), None) => Ok((input, output)),
        _ => Err(Error::Usage(USAGE.to_string())),
    }
}

/// Deinterlace the PNG at `input` and write the result to `output`.
///
/// The output keeps the width, height, color type, bit depth, palette,
/// and transparency of the input, and is never interlaced.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ImageMeta> {
    let input = input.as_ref();
    let output = output.as_ref();

    let (mut raster, meta) = decode(input)?;
    info!(
        "read {}: {}x{} {:?} {} bit{}",
        input.display(),
        meta.width,
        meta.height,
        meta.color_type,
        meta.bit_depth.bits(),
        if meta.interlaced { ", interlaced" } else { "" }
    );

    smooth(&mut raster);

    encode(output, &raster, &meta)?;
    info!("wrote {}", output.display());

    Ok(meta)
}

/// Deinterlace a PNG held in memory and return the encoded result.
pub fn run_mem(data: &[u8]) -> Result<Vec<u8>> {
    let (mut raster, meta) = decode_mem(data)?;
    smooth(&mut raster);
    Ok(encode_mem(&raster, &meta)?)
}
