//! gzip/gunzip text, files, blobs, byte buffers and byte streams
//!
//! Inputs are normalized into a [`ByteStream`], piped through a [`GzipCodec`]
//! (flate2 by default), drained into one buffer and rendered as raw bytes,
//! base64, base64url, hex, a [`File`], a [`Blob`] or (decompression only)
//! UTF-8 text.
//!
//! Usage: `let text = gzkit::gunzip_string(&b64, InputEncoding::Base64, DecompressFormat::Utf8).await?;`

pub mod codec;
pub mod container;
pub mod encoding;
pub mod error;
pub mod format;
pub mod gzip;
pub mod logging;
pub mod stream;

// Re-export error types
pub use error::{GzipError, Result};

pub use codec::{Flate2Codec, GzipCodec, TextCodec, Utf8};
pub use container::{Blob, File, GZIP_MEDIA_TYPE, TEXT_MEDIA_TYPE};
pub use encoding::{
    base64_to_bytes, base64url_to_bytes, bytes_to_base64, bytes_to_base64url, bytes_to_hex,
    hex_to_bytes, text_to_bytes,
};
pub use format::{CompressFormat, DecompressFormat, InputEncoding, Output};
pub use gzip::shortcuts::*;
pub use gzip::{DecompressOptions, Gzip};
pub use stream::{drain, ByteSource, ByteStream, DEFAULT_CHUNK_SIZE};
