//! Alpha chunk decoding.
//!
//! An alpha chunk is one header byte followed by the payload: either raw
//! (optionally spatially filtered) byte-per-pixel data, or a
//! losslessly-compressed sub-image whose green channel carries the alpha
//! values. [`AlphaDecoder`] owns the whole pipeline for one chunk: header
//! interpretation, path dispatch, row unfiltering and green extraction.

pub mod fast_path;
pub mod filter;
pub mod header;
mod plane;

pub use fast_path::is_one_byte_decodable;
pub use filter::AlphaFilter;
pub use header::{header_byte, parse_header, CompressionMethod};
pub use plane::AlphaPlane;

use crate::error::{Error, Result};
use crate::lossless::{LosslessBackend, LosslessMetadata};

/// Length of the alpha chunk header in bytes.
const ALPHA_HEADER_LEN: usize = 1;

/// A parsed alpha chunk. Immutable once parsed; the payload stays borrowed
/// from the outer decode session for the chunk's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct AlphaChunk<'a> {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// How the payload is stored.
    pub compression: CompressionMethod,
    /// Spatial predictor applied to the alpha plane at encode time.
    pub filter: AlphaFilter,
    /// Chunk payload after the header byte.
    pub data: &'a [u8],
}

impl<'a> AlphaChunk<'a> {
    /// Parse a chunk from its raw bytes (header byte included).
    ///
    /// Dimensions come from the outer container, not the chunk itself.
    pub fn parse(width: u32, height: u32, bytes: &'a [u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::MalformedChunk(format!(
                "empty alpha plane: {width}x{height}"
            )));
        }
        if bytes.len() < ALPHA_HEADER_LEN {
            return Err(Error::TruncatedChunk {
                needed: ALPHA_HEADER_LEN,
                available: bytes.len(),
            });
        }
        let (compression, filter) = parse_header(bytes[0])?;
        Ok(Self {
            width,
            height,
            compression,
            filter,
            data: &bytes[ALPHA_HEADER_LEN..],
        })
    }
}

/// Decode path, fixed at construction and never re-entered.
#[derive(Debug)]
enum DecodePath {
    /// Raw payload: copy, then unfilter in place.
    Raw,
    /// Lossless payload whose Red/Blue/Alpha channels are degenerate; the
    /// backend materializes one byte per pixel straight into the plane.
    LosslessOneByte,
    /// Lossless payload needing the full four-byte-per-pixel decode,
    /// inverse transforms and green extraction.
    LosslessFull(LosslessMetadata),
}

/// Decoder for a single alpha chunk.
///
/// Created once per chunk, used for one decode, then gone; [`Self::decode`]
/// consumes the decoder so every buffer is released on both the success and
/// the error path. On the lossless path the sub-image's stream metadata is
/// parsed eagerly at construction and the one-byte-per-pixel decision is
/// made before any pixel is decoded.
#[derive(Debug)]
pub struct AlphaDecoder<'a, B> {
    chunk: AlphaChunk<'a>,
    backend: B,
    path: DecodePath,
    plane: AlphaPlane,
}

impl<'a, B: LosslessBackend> AlphaDecoder<'a, B> {
    /// Parse the chunk header and prepare the decode path.
    ///
    /// For a lossless chunk this already drives the backend through
    /// [`LosslessBackend::parse_metadata`] (headers only, no pixels) and
    /// fixes the fast-path decision.
    pub fn new(width: u32, height: u32, chunk_bytes: &'a [u8], mut backend: B) -> Result<Self> {
        let chunk = AlphaChunk::parse(width, height, chunk_bytes)?;
        // Guard the plane allocation before it happens.
        (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::MalformedChunk("alpha plane size overflow".into()))?;

        let path = match chunk.compression {
            CompressionMethod::NoCompression => DecodePath::Raw,
            CompressionMethod::Lossless => {
                let metadata = backend.parse_metadata(chunk.data, width, height)?;
                if is_one_byte_decodable(&metadata) {
                    DecodePath::LosslessOneByte
                } else {
                    DecodePath::LosslessFull(metadata)
                }
            }
        };
        let plane = AlphaPlane::new(width as usize, height as usize, chunk.filter);
        Ok(Self {
            chunk,
            backend,
            path,
            plane,
        })
    }

    /// Whether the one-byte-per-pixel lossless entry point will be used.
    pub fn uses_fast_path(&self) -> bool {
        matches!(self.path, DecodePath::LosslessOneByte)
    }

    /// The parsed chunk this decoder was built from.
    pub fn chunk(&self) -> &AlphaChunk<'a> {
        &self.chunk
    }

    /// Decode the chunk into its row-major `width * height` alpha plane.
    ///
    /// Consumes the decoder: a chunk either fully decodes or fails, never
    /// partially, and all buffers are dropped on the error path.
    pub fn decode(self) -> Result<Vec<u8>> {
        let AlphaDecoder {
            chunk,
            mut backend,
            path,
            mut plane,
        } = self;
        let height = plane.height();

        match path {
            DecodePath::Raw => {
                let needed = plane.width() * height;
                if chunk.data.len() < needed {
                    return Err(Error::TruncatedChunk {
                        needed,
                        available: chunk.data.len(),
                    });
                }
                plane.as_mut_slice().copy_from_slice(&chunk.data[..needed]);
                // No-op for AlphaFilter::None; otherwise reconstructs each
                // row against the previous *output* row, in place.
                plane.apply_filter(0, height);
            }
            DecodePath::LosslessOneByte => {
                backend.decode_alpha_rows(&mut plane)?;
            }
            DecodePath::LosslessFull(metadata) => {
                let mut argb = backend.decode_argb()?;
                backend.apply_inverse_transforms(&metadata, &mut argb)?;
                if argb.len() != plane.width() * height {
                    return Err(Error::Upstream(format!(
                        "sub-image pixel count mismatch: {} != {}",
                        argb.len(),
                        plane.width() * height
                    )));
                }
                extract_green(&argb, plane.as_mut_slice());
                // The green channel carries the filtered deltas, so the
                // whole plane unfilters as one contiguous block.
                plane.apply_filter(0, height);
            }
        }
        Ok(plane.into_vec())
    }
}

/// Extract the green channel of every ARGB pixel as an alpha byte.
fn extract_green(argb: &[u32], out: &mut [u8]) {
    for (byte, &pixel) in out.iter_mut().zip(argb) {
        *byte = (pixel >> 8) as u8;
    }
}
