//! Byte streams, the sources that produce them, and draining them into a buffer

use crate::{GzipError, Result};
use futures::stream::{self, BoxStream, Stream, StreamExt as _};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Default size of the chunks a buffer, text or container is split into
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Owned, single-consumption stream of byte chunks
///
/// The stream ends at the first `None`. An `Err` item aborts whatever is
/// consuming it.
pub struct ByteStream {
    inner: BoxStream<'static, Result<Vec<u8>>>,
}

impl ByteStream {
    /// Wrap any `Send` stream of byte chunks
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Vec<u8>>> + Send + 'static,
    {
        Self {
            inner: stream.boxed(),
        }
    }

    /// Wrap a stream of `io::Result` chunks, reporting failures as `GzipError::Stream`
    pub fn from_io<S>(stream: S) -> Self
    where
        S: Stream<Item = std::io::Result<Vec<u8>>> + Send + 'static,
    {
        Self::new(stream.map(|chunk| chunk.map_err(GzipError::stream)))
    }

    /// Stream that yields `chunks` in order
    #[must_use]
    pub fn from_chunks(chunks: Vec<Vec<u8>>) -> Self {
        Self::new(tokio_stream::iter(chunks.into_iter().map(Ok)))
    }

    /// Stream over `bytes` split into chunks of at most `chunk_size` bytes
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        if bytes.is_empty() {
            return Self::empty();
        }
        if bytes.len() <= chunk_size {
            return Self::from_chunks(vec![bytes]);
        }
        Self::from_chunks(bytes.chunks(chunk_size).map(<[u8]>::to_vec).collect())
    }

    /// Stream the contents of an async reader, `chunk_size` bytes per read
    ///
    /// Read errors end the stream with `GzipError::Stream`.
    pub fn from_reader<R>(reader: R, chunk_size: usize) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let chunk_size = chunk_size.max(1);
        let chunks = stream::unfold(Some(reader), move |state| async move {
            let mut reader = state?;
            let mut buf = vec![0u8; chunk_size];
            match reader.read(&mut buf).await {
                Ok(0) => None,
                Ok(n) => {
                    buf.truncate(n);
                    Some((Ok(buf), Some(reader)))
                }
                Err(e) => Some((Err(GzipError::stream(e)), None)),
            }
        });
        Self::new(chunks)
    }

    /// Stream that ends immediately
    #[must_use]
    pub fn empty() -> Self {
        Self::new(stream::empty())
    }
}

impl Stream for ByteStream {
    type Item = Result<Vec<u8>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream").finish_non_exhaustive()
    }
}

/// Anything that can be turned into a [`ByteStream`]
///
/// `chunk_size` is a hint for in-memory sources; streams pass through untouched.
pub trait ByteSource {
    /// Consume the source and produce its bytes as a stream
    fn into_byte_stream(self, chunk_size: usize) -> ByteStream;
}

impl ByteSource for ByteStream {
    fn into_byte_stream(self, _chunk_size: usize) -> ByteStream {
        self
    }
}

impl ByteSource for Vec<u8> {
    fn into_byte_stream(self, chunk_size: usize) -> ByteStream {
        ByteStream::from_bytes(self, chunk_size)
    }
}

impl ByteSource for &[u8] {
    fn into_byte_stream(self, chunk_size: usize) -> ByteStream {
        ByteStream::from_bytes(self.to_vec(), chunk_size)
    }
}

impl<const N: usize> ByteSource for &[u8; N] {
    fn into_byte_stream(self, chunk_size: usize) -> ByteStream {
        ByteStream::from_bytes(self.to_vec(), chunk_size)
    }
}

impl ByteSource for String {
    fn into_byte_stream(self, chunk_size: usize) -> ByteStream {
        ByteStream::from_bytes(self.into_bytes(), chunk_size)
    }
}

impl ByteSource for &str {
    fn into_byte_stream(self, chunk_size: usize) -> ByteStream {
        ByteStream::from_bytes(crate::encoding::text_to_bytes(self), chunk_size)
    }
}

/// Read `stream` to its end and concatenate every chunk in arrival order
///
/// # Errors
/// Returns the first error the stream yields; chunks read so far are dropped
pub async fn drain<S>(stream: S) -> Result<Vec<u8>>
where
    S: Stream<Item = Result<Vec<u8>>>,
{
    futures::pin_mut!(stream);

    let mut chunks: Vec<Vec<u8>> = Vec::new();
    let mut total_len = 0usize;

    while let Some(chunk) = tokio_stream::StreamExt::next(&mut stream).await {
        let chunk = chunk?;
        let (index, len) = (chunks.len(), chunk.len());
        tracing::trace!("drained chunk {index} ({len} bytes)");
        total_len += chunk.len();
        chunks.push(chunk);
    }

    let mut merged = Vec::with_capacity(total_len);
    for chunk in &chunks {
        merged.extend_from_slice(chunk);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn from_bytes_splits_on_chunk_size() {
        let stream = ByteStream::from_bytes(b"abcdefg".to_vec(), 3);
        let chunks: Vec<Vec<u8>> = stream.map(|c| c.unwrap()).collect().await;
        assert_eq!(chunks, vec![b"abc".to_vec(), b"def".to_vec(), b"g".to_vec()]);
    }

    #[tokio::test]
    async fn from_bytes_of_empty_buffer_yields_nothing() {
        let chunks: Vec<_> = ByteStream::from_bytes(Vec::new(), 16).collect().await;
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn zero_chunk_size_is_clamped() {
        let chunks: Vec<_> = ByteStream::from_bytes(b"ab".to_vec(), 0).collect().await;
        assert_eq!(chunks.len(), 2);
    }
}
