//! One-call helpers using a default [`Gzip`]
//!
//! Usage: `let b64 = gzkit::gzip_string("Hello", CompressFormat::Base64).await?;`

use super::{DecompressOptions, Gzip};
use crate::container::{Blob, File};
use crate::format::{CompressFormat, DecompressFormat, InputEncoding, Output};
use crate::stream::{ByteSource, ByteStream};
use crate::Result;

/// Compress any byte source with the default codec
///
/// # Errors
/// See [`Gzip::compress`]
pub async fn compress<I: ByteSource>(input: I, format: CompressFormat) -> Result<Output> {
    Gzip::new().compress(input, format).await
}

/// Decompress any byte source with the default codec
///
/// # Errors
/// See [`Gzip::decompress`]
pub async fn decompress<I: ByteSource>(input: I, options: &DecompressOptions) -> Result<Output> {
    Gzip::new().decompress(input, options).await
}

/// Decode then decompress a base64, base64url or hex string
///
/// # Errors
/// See [`Gzip::decompress_encoded`]
pub async fn decompress_encoded(
    text: &str,
    encoding: InputEncoding,
    options: &DecompressOptions,
) -> Result<Output> {
    Gzip::new().decompress_encoded(text, encoding, options).await
}

/// Compress UTF-8 text
///
/// # Errors
/// See [`Gzip::compress`]
pub async fn gzip_string(text: &str, format: CompressFormat) -> Result<Output> {
    Gzip::new().compress_text(text, format).await
}

/// Compress the contents of a file container
///
/// # Errors
/// See [`Gzip::compress`]
pub async fn gzip_file(file: &File, format: CompressFormat) -> Result<Output> {
    compress(file.stream(), format).await
}

/// Compress the contents of a blob
///
/// # Errors
/// See [`Gzip::compress`]
pub async fn gzip_blob(blob: &Blob, format: CompressFormat) -> Result<Output> {
    compress(blob.stream(), format).await
}

/// Compress a byte buffer
///
/// # Errors
/// See [`Gzip::compress`]
pub async fn gzip_bytes(bytes: &[u8], format: CompressFormat) -> Result<Output> {
    compress(bytes, format).await
}

/// Compress a byte stream
///
/// # Errors
/// See [`Gzip::compress`]
pub async fn gzip_stream(stream: ByteStream, format: CompressFormat) -> Result<Output> {
    compress(stream, format).await
}

/// Decompress a gzip member given as a base64, base64url or hex string
///
/// # Errors
/// See [`Gzip::decompress_encoded`]
pub async fn gunzip_string(
    text: &str,
    encoding: InputEncoding,
    format: DecompressFormat,
) -> Result<Output> {
    decompress_encoded(text, encoding, &format.into()).await
}

/// Decompress the contents of a file container
///
/// # Errors
/// See [`Gzip::decompress`]
pub async fn gunzip_file(file: &File, format: DecompressFormat) -> Result<Output> {
    decompress(file.stream(), &format.into()).await
}

/// Decompress the contents of a blob
///
/// # Errors
/// See [`Gzip::decompress`]
pub async fn gunzip_blob(blob: &Blob, format: DecompressFormat) -> Result<Output> {
    decompress(blob.stream(), &format.into()).await
}

/// Decompress a byte buffer
///
/// # Errors
/// See [`Gzip::decompress`]
pub async fn gunzip_bytes(bytes: &[u8], format: DecompressFormat) -> Result<Output> {
    decompress(bytes, &format.into()).await
}

/// Decompress a byte stream, naming `file` output `file.<file_suffix>`
///
/// # Errors
/// See [`Gzip::decompress`]
pub async fn gunzip_stream(
    stream: ByteStream,
    format: DecompressFormat,
    media_type: &str,
    file_suffix: &str,
) -> Result<Output> {
    let options = DecompressOptions::from(format)
        .with_media_type(media_type)
        .with_file_suffix(file_suffix);
    decompress(stream, &options).await
}
