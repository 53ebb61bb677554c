//! # alphadec
//!
//! Alpha-chunk reconstruction for lossy image containers.
//!
//! A container may carry per-pixel transparency in a separate alpha chunk,
//! stored either as raw (optionally spatially filtered) byte-per-pixel data
//! or as an independent losslessly-compressed sub-image whose green channel
//! encodes the alpha values. This crate decodes that chunk: it interprets
//! the one-byte chunk header, reverses the spatial predictor filters row by
//! row (supporting incremental row ranges), decides when the lossless
//! collaborator may stay on a one-byte-per-pixel path, and extracts alpha
//! from a decoded ARGB stream when it may not.
//!
//! The general-purpose lossless pixel decoder is an external collaborator
//! consumed through the [`lossless::LosslessBackend`] trait; this crate
//! never implements its Huffman/LZ77 machinery.
//!
//! ## Features
//!
//! - **Zero runtime dependencies**
//! - Raw and lossless-compressed alpha payloads
//! - Horizontal, vertical and gradient predictor unfiltering, in place
//! - Incremental row-range filtering for streaming collaborators
//!
//! ## Example
//!
//! ```rust
//! use alphadec::AlphaDecoder;
//! use alphadec::lossless::UnsupportedBackend;
//!
//! // A 2x2 chunk: header byte 0 (no compression, no filter) + 4 raw bytes.
//! let chunk = [0x00, 10, 20, 30, 40];
//! let decoder = AlphaDecoder::new(2, 2, &chunk, UnsupportedBackend).unwrap();
//! let alpha = decoder.decode().unwrap();
//! assert_eq!(alpha, vec![10, 20, 30, 40]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alpha;
pub mod error;
pub mod lossless;

pub use alpha::AlphaDecoder;
pub use error::{Error, Result};
