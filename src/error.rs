//! Error types for the alphadec library.

use std::fmt;

/// Result type alias for alphadec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding an alpha chunk.
///
/// All variants are terminal for the current chunk: a chunk either fully
/// decodes or the decode fails, never partially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A header field holds a value outside its legal set.
    MalformedChunk(String),
    /// The declared dimensions need more bytes than the chunk carries.
    TruncatedChunk {
        /// Number of bytes the declared dimensions require.
        needed: usize,
        /// Number of bytes actually present.
        available: usize,
    },
    /// The external lossless decoder reported a failure; propagated
    /// verbatim and never retried.
    Upstream(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedChunk(msg) => {
                write!(f, "malformed alpha chunk: {}", msg)
            }
            Error::TruncatedChunk { needed, available } => {
                write!(
                    f,
                    "truncated alpha chunk: need {} bytes, have {}",
                    needed, available
                )
            }
            Error::Upstream(msg) => {
                write!(f, "lossless decoder error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
