//! Structured logging setup
//!
//! The library itself only emits `tracing` events. `tracing` is built with its
//! `log` feature, so with no subscriber installed every event is forwarded to
//! the `log` facade and picked up by the `env_logger` installed here.

use std::sync::Once;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize logging (call once at application startup)
///
/// Levels come from the `RUST_LOG` environment variable:
/// - `RUST_LOG=debug` - one event per compress/decompress call
/// - `RUST_LOG=trace` - also one event per stream chunk
/// - `RUST_LOG=gzkit=debug` - only this crate
pub fn init() {
    INIT_LOGGER.call_once(|| {
        // Another logger may already be installed by the host application.
        let _ = env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .try_init();

        log::info!("gzkit logging initialized");
    });
}

/// Initialize logging for test environments
///
/// Safe to call from every test.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// Log a finished compress or decompress call with its sizes
pub(crate) fn log_operation(direction: Direction, input_len: usize, output_len: usize, format: &str) {
    tracing::debug!(
        "gzip {direction}: {input_len} bytes in, {output_len} bytes out (format: {format})"
    );
}

/// Log a failed compress or decompress call
///
/// Only the error kind is logged, never payload bytes.
pub(crate) fn log_failure(direction: Direction, error: &crate::GzipError, elapsed: Duration) {
    let kind = error_kind(error);
    tracing::warn!("gzip {direction} failed after {elapsed:?}: {kind}");
}

fn error_kind(error: &crate::GzipError) -> &'static str {
    use crate::GzipError;
    match error {
        GzipError::Decode(_) => "decode",
        GzipError::Codec(_) => "codec",
        GzipError::Encoding(_) => "encoding",
        GzipError::Stream(_) => "stream",
        GzipError::UnknownFormat(_) => "unknown_format",
        GzipError::Io(_) => "io",
    }
}

/// Direction of a gzip operation, used in log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Compress,
    Decompress,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Compress => f.write_str("compress"),
            Direction::Decompress => f.write_str("decompress"),
        }
    }
}
