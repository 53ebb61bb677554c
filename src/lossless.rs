//! Contract for the external lossless sub-image decoder.
//!
//! The alpha chunk may embed a fully independent losslessly-compressed
//! sub-image whose green channel carries the alpha values. Decoding that
//! sub-image (Huffman tables, LZ77 back-references, transform pipeline) is
//! not this crate's job; it is consumed through the narrow entry points
//! defined here.

use crate::alpha::AlphaPlane;
use crate::error::{Error, Result};

/// First-code bit lengths for one Huffman tree group.
///
/// A zero bit length means the channel's symbol is statically fixed and the
/// decoder never reads bits for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HuffmanGroupCodes {
    /// Bit length of the first red-channel code.
    pub red_bits: u8,
    /// Bit length of the first blue-channel code.
    pub blue_bits: u8,
    /// Bit length of the first alpha-channel code.
    pub alpha_bits: u8,
}

/// Stream metadata parsed from the sub-image's transform/Huffman headers,
/// before any pixel payload is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LosslessMetadata {
    /// Number of entries in the color cache; zero when absent.
    pub color_cache_size: u32,
    /// One entry per Huffman tree group in the stream.
    pub tree_groups: Vec<HuffmanGroupCodes>,
}

/// Entry points the orchestrator drives on the external lossless decoder.
///
/// The backend owns its internal pixel buffer and bit reader; the
/// orchestrator only calls these methods and never reaches into backend
/// state. Errors bubble up verbatim and abort the chunk decode.
pub trait LosslessBackend {
    /// Parse the sub-image's transform and Huffman headers from the chunk
    /// payload, without decoding pixels.
    fn parse_metadata(&mut self, data: &[u8], width: u32, height: u32)
        -> Result<LosslessMetadata>;

    /// Specialized one-byte-per-pixel entry point.
    ///
    /// Only legal when [`crate::alpha::is_one_byte_decodable`] approved the
    /// stream. The backend writes decoded alpha bytes through
    /// [`AlphaPlane::row_mut`] and calls [`AlphaPlane::apply_filter`] with
    /// non-decreasing, non-overlapping row ranges as rows become available.
    fn decode_alpha_rows(&mut self, plane: &mut AlphaPlane) -> Result<()>;

    /// General entry point: decode the full sub-image into an ARGB buffer,
    /// one `u32` per pixel, with no incremental callback.
    fn decode_argb(&mut self) -> Result<Vec<u32>>;

    /// Apply the stream's inverse color/transform pipeline to a decoded
    /// ARGB buffer. Must run before green-channel extraction.
    fn apply_inverse_transforms(
        &mut self,
        metadata: &LosslessMetadata,
        argb: &mut [u32],
    ) -> Result<()>;
}

/// Backend for callers that only ever decode raw (uncompressed) chunks.
///
/// Every entry point fails, so a chunk that unexpectedly declares lossless
/// compression surfaces an error instead of silently producing garbage.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedBackend;

impl LosslessBackend for UnsupportedBackend {
    fn parse_metadata(
        &mut self,
        _data: &[u8],
        _width: u32,
        _height: u32,
    ) -> Result<LosslessMetadata> {
        Err(Error::Upstream("no lossless backend configured".into()))
    }

    fn decode_alpha_rows(&mut self, _plane: &mut AlphaPlane) -> Result<()> {
        Err(Error::Upstream("no lossless backend configured".into()))
    }

    fn decode_argb(&mut self) -> Result<Vec<u32>> {
        Err(Error::Upstream("no lossless backend configured".into()))
    }

    fn apply_inverse_transforms(
        &mut self,
        _metadata: &LosslessMetadata,
        _argb: &mut [u32],
    ) -> Result<()> {
        Err(Error::Upstream("no lossless backend configured".into()))
    }
}
