//! Narrow interfaces over the gzip transform and the text codec
//!
//! The dispatcher only ever talks to [`GzipCodec`] and [`TextCodec`], so the
//! flate2 backend can be swapped for another implementation in tests or
//! embedders without touching any call site.

pub mod flate;

pub use flate::Flate2Codec;

use crate::stream::ByteStream;
use crate::{GzipError, Result};

/// Stream-in/stream-out gzip transform (RFC 1952)
pub trait GzipCodec: Send + Sync {
    /// Compress `input` into a single gzip member
    fn compress(&self, input: ByteStream) -> ByteStream;

    /// Decompress a gzip member
    ///
    /// Malformed or truncated input must surface as `GzipError::Codec`;
    /// errors from `input` itself pass through unchanged.
    fn decompress(&self, input: ByteStream) -> ByteStream;
}

/// Conversion between text and its byte representation
pub trait TextCodec: Send + Sync {
    /// Bytes of `text`
    fn encode(&self, text: &str) -> Vec<u8>;

    /// Text held in `bytes`
    ///
    /// # Errors
    /// Returns `GzipError::Encoding` if `bytes` is not valid for this codec
    fn decode(&self, bytes: Vec<u8>) -> Result<String>;
}

/// Strict UTF-8: invalid sequences are errors, never replacement characters
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8;

impl TextCodec for Utf8 {
    fn encode(&self, text: &str) -> Vec<u8> {
        crate::encoding::text_to_bytes(text)
    }

    fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes).map_err(|e| GzipError::encoding(e.utf8_error()))
    }
}
