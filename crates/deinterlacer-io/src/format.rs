//! PNG signature detection
//!
//! The signature is checked before the codec is constructed, so
//! non-conforming input never reaches the decoder.

use crate::{IoError, IoResult};
use std::io::{ErrorKind, Read};

/// PNG: 89 50 4E 47 0D 0A 1A 0A
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Check whether `data` starts with the PNG signature.
pub fn is_png_signature(data: &[u8]) -> bool {
    data.starts_with(&PNG_SIGNATURE)
}

/// Read the first 8 bytes from `reader` and verify the PNG signature.
///
/// A stream shorter than the signature is a format error, not an I/O error.
pub fn check_signature<R: Read>(reader: &mut R) -> IoResult<()> {
    let mut header = [0u8; 8];
    match reader.read_exact(&mut header) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            return Err(IoError::Format(
                "not a PNG image (shorter than the signature)".to_string(),
            ));
        }
        Err(e) => return Err(IoError::Io(e)),
    }
    if !is_png_signature(&header) {
        return Err(IoError::Format(
            "not a PNG image (signature mismatch)".to_string(),
        ));
    }
    Ok(())
}
