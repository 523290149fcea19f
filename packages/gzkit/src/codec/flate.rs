//! flate2-backed gzip codec
//!
//! Both directions use flate2's `write` adapters over a `Vec<u8>` sink: each
//! input chunk is written in, whatever landed in the sink is taken out and
//! yielded. The trailer is written (compression) or verified (decompression)
//! once the input stream ends.

use super::GzipCodec;
use crate::stream::ByteStream;
use crate::{GzipError, Result};
use flate2::write::{GzDecoder, GzEncoder};
use flate2::Compression;
use futures::Stream;
use pin_project_lite::pin_project;
use std::io::{self, Write};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Default gzip codec, one RFC 1952 member at the default deflate level
#[derive(Clone, Copy, Debug, Default)]
pub struct Flate2Codec;

impl GzipCodec for Flate2Codec {
    fn compress(&self, input: ByteStream) -> ByteStream {
        ByteStream::new(GzipTransform::new(input, GzipCompressor::new()))
    }

    fn decompress(&self, input: ByteStream) -> ByteStream {
        ByteStream::new(GzipTransform::new(input, GzipDecompressor::new()))
    }
}

/// One direction of the gzip transform, fed chunk by chunk
trait ChunkTransform {
    /// Feed one input chunk, returning the output produced so far
    fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>>;

    /// Flush the remaining output once the input has ended
    fn finish(&mut self) -> Result<Vec<u8>>;
}

struct GzipCompressor {
    encoder: GzEncoder<Vec<u8>>,
}

impl GzipCompressor {
    fn new() -> Self {
        Self {
            encoder: GzEncoder::new(Vec::new(), Compression::default()),
        }
    }
}

impl ChunkTransform for GzipCompressor {
    fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        self.encoder
            .write_all(chunk)
            .map_err(|e| GzipError::codec(format!("gzip compression failed: {e}")))?;
        Ok(std::mem::take(self.encoder.get_mut()))
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        self.encoder
            .try_finish()
            .map_err(|e| GzipError::codec(format!("gzip compression failed: {e}")))?;
        Ok(std::mem::take(self.encoder.get_mut()))
    }
}

struct GzipDecompressor {
    decoder: GzDecoder<Vec<u8>>,
    received: usize,
}

impl GzipDecompressor {
    fn new() -> Self {
        Self {
            decoder: GzDecoder::new(Vec::new()),
            received: 0,
        }
    }
}

impl ChunkTransform for GzipDecompressor {
    fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        self.received += chunk.len();
        self.decoder.write_all(chunk).map_err(decompression_error)?;
        Ok(std::mem::take(self.decoder.get_mut()))
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        if self.received == 0 {
            return Err(GzipError::codec("gzip decompression failed: empty input"));
        }
        // Fails unless the full 8-byte trailer arrived and matches the output.
        self.decoder.try_finish().map_err(decompression_error)?;
        Ok(std::mem::take(self.decoder.get_mut()))
    }
}

/// The decoder stops accepting input after the member trailer, which
/// `write_all` reports as `WriteZero`.
fn decompression_error(e: io::Error) -> GzipError {
    if e.kind() == io::ErrorKind::WriteZero {
        GzipError::codec("gzip decompression failed: trailing data after gzip member")
    } else {
        GzipError::codec(format!("gzip decompression failed: {e}"))
    }
}

pin_project! {
    /// Stream adapter driving a `ChunkTransform` from an input `ByteStream`
    struct GzipTransform<T> {
        #[pin]
        input: ByteStream,
        transform: T,
        finished: bool,
        bytes_in: u64,
        bytes_out: u64,
    }
}

impl<T: ChunkTransform> GzipTransform<T> {
    fn new(input: ByteStream, transform: T) -> Self {
        Self {
            input,
            transform,
            finished: false,
            bytes_in: 0,
            bytes_out: 0,
        }
    }
}

impl<T: ChunkTransform> Stream for GzipTransform<T> {
    type Item = Result<Vec<u8>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if *this.finished {
                return Poll::Ready(None);
            }

            match futures::ready!(this.input.as_mut().poll_next(cx)) {
                Some(Ok(chunk)) => {
                    *this.bytes_in += chunk.len() as u64;
                    match this.transform.update(&chunk) {
                        // Nothing flushed yet, pull the next chunk
                        Ok(output) if output.is_empty() => continue,
                        Ok(output) => {
                            *this.bytes_out += output.len() as u64;
                            return Poll::Ready(Some(Ok(output)));
                        }
                        Err(e) => {
                            *this.finished = true;
                            return Poll::Ready(Some(Err(e)));
                        }
                    }
                }
                Some(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(e)));
                }
                None => {
                    *this.finished = true;
                    let result = this.transform.finish();
                    if let Ok(output) = &result {
                        *this.bytes_out += output.len() as u64;
                        let (bytes_in, bytes_out) = (*this.bytes_in, *this.bytes_out);
                        tracing::trace!(
                            "gzip transform finished: {bytes_in} bytes in, {bytes_out} bytes out"
                        );
                    }
                    return match result {
                        Ok(output) if output.is_empty() => Poll::Ready(None),
                        Ok(output) => Poll::Ready(Some(Ok(output))),
                        Err(e) => Poll::Ready(Some(Err(e))),
                    };
                }
            }
        }
    }
}
