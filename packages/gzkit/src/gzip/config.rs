//! Gzip facade configuration
//!
//! Builder methods for swapping the codecs and tuning source chunking, plus
//! the options accepted by decompression.

use super::Gzip;
use crate::codec::{GzipCodec, TextCodec};
use crate::container::TEXT_MEDIA_TYPE;
use crate::format::DecompressFormat;
use std::sync::Arc;

impl Gzip {
    /// Use another gzip implementation
    #[must_use]
    pub fn with_codec<C: GzipCodec + 'static>(mut self, codec: C) -> Self {
        self.codec = Arc::new(codec);
        self
    }

    /// Use another text codec for `compress_text` and `utf8` output
    #[must_use]
    pub fn with_text_codec<T: TextCodec + 'static>(mut self, text_codec: T) -> Self {
        self.text_codec = Arc::new(text_codec);
        self
    }

    /// Size of the chunks in-memory sources are split into (at least 1)
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Configured source chunk size
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// Output options for decompression
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecompressOptions {
    format: DecompressFormat,
    media_type: String,
    file_suffix: String,
}

impl Default for DecompressOptions {
    fn default() -> Self {
        Self {
            format: DecompressFormat::Raw,
            media_type: TEXT_MEDIA_TYPE.to_string(),
            file_suffix: "txt".to_string(),
        }
    }
}

impl From<DecompressFormat> for DecompressOptions {
    fn from(format: DecompressFormat) -> Self {
        Self::default().with_format(format)
    }
}

impl DecompressOptions {
    /// Raw output, `text/plain`, `.txt`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: DecompressFormat) -> Self {
        self.format = format;
        self
    }

    /// Media type declared on `file` and `blob` output
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Suffix of the `file.<suffix>` name given to `file` output
    #[must_use]
    pub fn with_file_suffix(mut self, file_suffix: impl Into<String>) -> Self {
        self.file_suffix = file_suffix.into();
        self
    }

    /// Output format
    #[must_use]
    pub fn format(&self) -> DecompressFormat {
        self.format
    }

    /// Declared media type
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// File name suffix
    #[must_use]
    pub fn file_suffix(&self) -> &str {
        &self.file_suffix
    }
}
