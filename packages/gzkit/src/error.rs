//! Error types for the gzkit crate

use std::fmt;
use thiserror::Error;

/// Result type alias for gzip and conversion operations
pub type Result<T> = std::result::Result<T, GzipError>;

/// Main error type for all gzip and conversion operations
#[derive(Error, Debug)]
pub enum GzipError {
    /// A base64, base64url or hex string could not be decoded
    #[error("Decode failed: {0}")]
    Decode(String),

    /// The gzip transform rejected its input
    #[error("Codec failed: {0}")]
    Codec(String),

    /// Decompressed bytes are not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Encoding(String),

    /// The source byte stream reported an error mid-read
    #[error("Stream failed: {0}")]
    Stream(String),

    /// An output format or input encoding tag was not recognized
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Clone for GzipError {
    fn clone(&self) -> Self {
        match self {
            Self::Decode(s) => Self::Decode(s.clone()),
            Self::Codec(s) => Self::Codec(s.clone()),
            Self::Encoding(s) => Self::Encoding(s.clone()),
            Self::Stream(s) => Self::Stream(s.clone()),
            Self::UnknownFormat(s) => Self::UnknownFormat(s.clone()),
            Self::Io(e) => Self::Stream(e.to_string()),
        }
    }
}

impl GzipError {
    /// Create a `Decode` error with a formatted message
    #[must_use]
    pub fn decode(msg: impl fmt::Display) -> Self {
        Self::Decode(msg.to_string())
    }

    /// Create a `Codec` error with a formatted message
    #[must_use]
    pub fn codec(msg: impl fmt::Display) -> Self {
        Self::Codec(msg.to_string())
    }

    /// Create an `Encoding` error with a formatted message
    #[must_use]
    pub fn encoding(msg: impl fmt::Display) -> Self {
        Self::Encoding(msg.to_string())
    }

    /// Create a `Stream` error with a formatted message
    #[must_use]
    pub fn stream(msg: impl fmt::Display) -> Self {
        Self::Stream(msg.to_string())
    }

    /// Create an `UnknownFormat` error with a formatted message
    #[must_use]
    pub fn unknown_format(msg: impl fmt::Display) -> Self {
        Self::UnknownFormat(msg.to_string())
    }

    /// Whether this error came from decoding a text encoding
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Whether this error came from the gzip transform
    #[must_use]
    pub fn is_codec(&self) -> bool {
        matches!(self, Self::Codec(_))
    }

    /// Whether this error came from UTF-8 decoding of the output
    #[must_use]
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }

    /// Whether this error came from the source stream
    #[must_use]
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_) | Self::Io(_))
    }
}
