//! Compress/decompress dispatcher
//!
//! Normalizes any [`ByteSource`] into a [`ByteStream`], pipes it through the
//! configured [`GzipCodec`], drains the result and renders it in the
//! requested format.

pub mod config;
pub mod shortcuts;

pub use config::DecompressOptions;

use crate::codec::{Flate2Codec, GzipCodec, TextCodec, Utf8};
use crate::container::{Blob, File, GZIP_MEDIA_TYPE};
use crate::encoding::{bytes_to_base64, bytes_to_base64url, bytes_to_hex};
use crate::format::{CompressFormat, DecompressFormat, InputEncoding, Output};
use crate::logging::{log_failure, log_operation, Direction};
use crate::stream::{drain, ByteSource, ByteStream, DEFAULT_CHUNK_SIZE};
use crate::Result;
use futures::StreamExt as _;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Name given to compressed `file` output
pub const COMPRESSED_FILE_NAME: &str = "file.gz";

/// Entry point for gzip operations
///
/// Holds no per-call state; every call builds its own streams and buffers, so
/// one `Gzip` can serve any number of concurrent calls.
#[derive(Clone)]
pub struct Gzip {
    pub(crate) codec: Arc<dyn GzipCodec>,
    pub(crate) text_codec: Arc<dyn TextCodec>,
    pub(crate) chunk_size: usize,
}

impl Default for Gzip {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Gzip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gzip")
            .field("chunk_size", &self.chunk_size)
            .finish_non_exhaustive()
    }
}

impl Gzip {
    /// flate2 codec, strict UTF-8 and 64 KiB source chunks
    #[must_use]
    pub fn new() -> Self {
        Self {
            codec: Arc::new(Flate2Codec),
            text_codec: Arc::new(Utf8),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Compress any byte source
    ///
    /// # Errors
    /// Returns `GzipError::Stream` if a source stream fails, or
    /// `GzipError::Codec` if the codec rejects the input
    pub async fn compress<I: ByteSource>(&self, input: I, format: CompressFormat) -> Result<Output> {
        let started = Instant::now();
        let (input, bytes_in) = self.counted_stream(input);

        let result = drain(self.codec.compress(input))
            .await
            .map(|bytes| render_compressed(bytes, format));

        record(Direction::Compress, &result, &bytes_in, format.as_str(), started);
        result
    }

    /// Compress text encoded with the configured text codec
    ///
    /// # Errors
    /// Returns `GzipError::Codec` if the codec fails
    pub async fn compress_text(&self, text: &str, format: CompressFormat) -> Result<Output> {
        self.compress(self.text_codec.encode(text), format).await
    }

    /// Decompress any byte source holding a gzip member
    ///
    /// # Errors
    /// Returns `GzipError::Codec` on malformed or truncated gzip data,
    /// `GzipError::Encoding` if `utf8` output is not valid UTF-8, or
    /// `GzipError::Stream` if a source stream fails
    pub async fn decompress<I: ByteSource>(
        &self,
        input: I,
        options: &DecompressOptions,
    ) -> Result<Output> {
        let started = Instant::now();
        let (input, bytes_in) = self.counted_stream(input);

        let result = match drain(self.codec.decompress(input)).await {
            Ok(bytes) => self.render_decompressed(bytes, options),
            Err(e) => Err(e),
        };

        record(
            Direction::Decompress,
            &result,
            &bytes_in,
            options.format().as_str(),
            started,
        );
        result
    }

    /// Decode a base64, base64url or hex string, then decompress it
    ///
    /// # Errors
    /// Returns `GzipError::Decode` before any codec work if `text` is not
    /// valid for `encoding`; otherwise as [`Gzip::decompress`]
    pub async fn decompress_encoded(
        &self,
        text: &str,
        encoding: InputEncoding,
        options: &DecompressOptions,
    ) -> Result<Output> {
        let started = Instant::now();
        let bytes = match encoding.decode(text) {
            Ok(bytes) => bytes,
            Err(e) => {
                log_failure(Direction::Decompress, &e, started.elapsed());
                return Err(e);
            }
        };
        self.decompress(bytes, options).await
    }

    fn counted_stream<I: ByteSource>(&self, input: I) -> (ByteStream, Arc<AtomicUsize>) {
        let bytes_in = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&bytes_in);
        let stream = input.into_byte_stream(self.chunk_size).inspect(move |chunk| {
            if let Ok(chunk) = chunk {
                counter.fetch_add(chunk.len(), Ordering::Relaxed);
            }
        });
        (ByteStream::new(stream), bytes_in)
    }

    fn render_decompressed(&self, bytes: Vec<u8>, options: &DecompressOptions) -> Result<Output> {
        let output = match options.format() {
            DecompressFormat::Raw => Output::Bytes(bytes),
            DecompressFormat::Utf8 => Output::Text(self.text_codec.decode(bytes)?),
            DecompressFormat::Base64 => Output::Text(bytes_to_base64(&bytes)),
            DecompressFormat::Base64Url => Output::Text(bytes_to_base64url(&bytes)),
            DecompressFormat::Hex => Output::Text(bytes_to_hex(&bytes)),
            DecompressFormat::File => Output::File(File::new(
                bytes,
                format!("file.{}", options.file_suffix()),
                options.media_type(),
            )),
            DecompressFormat::Blob => Output::Blob(Blob::new(bytes, options.media_type())),
        };
        Ok(output)
    }
}

fn render_compressed(bytes: Vec<u8>, format: CompressFormat) -> Output {
    match format {
        CompressFormat::Raw => Output::Bytes(bytes),
        CompressFormat::Base64 => Output::Text(bytes_to_base64(&bytes)),
        CompressFormat::Base64Url => Output::Text(bytes_to_base64url(&bytes)),
        CompressFormat::Hex => Output::Text(bytes_to_hex(&bytes)),
        CompressFormat::File => {
            Output::File(File::new(bytes, COMPRESSED_FILE_NAME, GZIP_MEDIA_TYPE))
        }
        CompressFormat::Blob => Output::Blob(Blob::new(bytes, GZIP_MEDIA_TYPE)),
    }
}

fn record(
    direction: Direction,
    result: &Result<Output>,
    bytes_in: &AtomicUsize,
    format: &str,
    started: Instant,
) {
    match result {
        Ok(output) => log_operation(
            direction,
            bytes_in.load(Ordering::Relaxed),
            output.len(),
            format,
        ),
        Err(e) => log_failure(direction, e, started.elapsed()),
    }
}
