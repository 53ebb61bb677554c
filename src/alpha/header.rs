//! Alpha chunk header interpretation.
//!
//! The chunk opens with a single header byte:
//!
//! ```text
//! bit 0-1: compression method (0 = none, 1 = lossless, 2-3 = invalid)
//! bit 2-3: filter type        (0 = none, 1 = horizontal, 2 = vertical, 3 = gradient)
//! bit 4-7: reserved (ignored)
//! ```

use super::filter::AlphaFilter;
use crate::error::{Error, Result};

/// How the alpha payload is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    /// Raw byte-per-pixel data, optionally spatially filtered.
    NoCompression = 0,
    /// An independent losslessly-compressed sub-image whose green channel
    /// carries the alpha values.
    Lossless = 1,
}

impl TryFrom<u8> for CompressionMethod {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(CompressionMethod::NoCompression),
            1 => Ok(CompressionMethod::Lossless),
            _ => Err(Error::MalformedChunk(format!(
                "unexpected alpha compression method: {value}"
            ))),
        }
    }
}

impl TryFrom<u8> for AlphaFilter {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(AlphaFilter::None),
            1 => Ok(AlphaFilter::Horizontal),
            2 => Ok(AlphaFilter::Vertical),
            3 => Ok(AlphaFilter::Gradient),
            _ => Err(Error::MalformedChunk(format!(
                "unexpected alpha filter method: {value}"
            ))),
        }
    }
}

/// Parse the chunk header byte into its compression method and filter type.
///
/// Bits 4-7 are reserved and ignored. Pure; no side effects.
pub fn parse_header(byte: u8) -> Result<(CompressionMethod, AlphaFilter)> {
    let compression = CompressionMethod::try_from(byte & 0b11)?;
    let filter = AlphaFilter::try_from((byte >> 2) & 0b11)?;
    Ok((compression, filter))
}

/// Encode a compression method and filter type back into a header byte.
///
/// Inverse of [`parse_header`] for all valid pairs; reserved bits are
/// emitted as zero.
pub fn header_byte(compression: CompressionMethod, filter: AlphaFilter) -> u8 {
    (compression as u8) | ((filter as u8) << 2)
}
