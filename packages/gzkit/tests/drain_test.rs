//! Draining byte streams into a single buffer

use gzkit::{drain, ByteSource, ByteStream, GzipError};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

#[tokio::test]
async fn test_drain_concatenates_chunks_in_order() {
    let a = b"first ".to_vec();
    let b = b"second ".to_vec();
    let c = b"third".to_vec();
    let expected_len = a.len() + b.len() + c.len();

    let drained = drain(ByteStream::from_chunks(vec![a, b, c])).await.unwrap();

    assert_eq!(drained, b"first second third");
    assert_eq!(drained.len(), expected_len);
}

#[tokio::test]
async fn test_drain_of_empty_stream_is_empty() {
    assert!(drain(ByteStream::empty()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_drain_skips_over_empty_chunks() {
    let stream = ByteStream::from_chunks(vec![vec![], b"ab".to_vec(), vec![], b"c".to_vec()]);
    assert_eq!(drain(stream).await.unwrap(), b"abc");
}

#[tokio::test]
async fn test_drain_propagates_first_error() {
    let stream = ByteStream::new(futures::stream::iter(vec![
        Ok(b"partial".to_vec()),
        Err(GzipError::stream("source closed")),
        Ok(b"never read".to_vec()),
    ]));

    let err = drain(stream).await.unwrap_err();
    assert!(err.is_stream());
    assert_eq!(err.to_string(), "Stream failed: source closed");
}

#[tokio::test]
async fn test_from_io_maps_errors_to_stream_errors() {
    let stream = ByteStream::from_io(futures::stream::iter(vec![
        Ok(b"ok".to_vec()),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer")),
    ]));

    let err = drain(stream).await.unwrap_err();
    assert!(matches!(err, GzipError::Stream(_)));
}

#[tokio::test]
async fn test_from_reader_streams_all_bytes() {
    let data: &'static [u8] = b"a reader that is longer than one chunk";
    let drained = drain(ByteStream::from_reader(data, 4)).await.unwrap();
    assert_eq!(drained, data);
}

/// Reader that yields one chunk then fails
struct FailingReader {
    sent: bool,
}

impl AsyncRead for FailingReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        if self.sent {
            return Poll::Ready(Err(io::Error::new(io::ErrorKind::Other, "disk on fire")));
        }
        self.sent = true;
        buf.put_slice(b"head");
        Poll::Ready(Ok(()))
    }
}

#[tokio::test]
async fn test_from_reader_reports_read_errors() {
    let err = drain(ByteStream::from_reader(FailingReader { sent: false }, 16))
        .await
        .unwrap_err();
    assert!(err.is_stream());
    assert!(err.to_string().contains("disk on fire"));
}

#[tokio::test]
async fn test_byte_sources_honor_chunk_size() {
    use futures::StreamExt;

    let chunks: Vec<_> = "abcdef".into_byte_stream(2).collect().await;
    assert_eq!(chunks.len(), 3);

    let passthrough = ByteStream::from_chunks(vec![b"abcdef".to_vec()]).into_byte_stream(2);
    let chunks: Vec<_> = passthrough.collect().await;
    assert_eq!(chunks.len(), 1);
}
