//! In-memory containers pairing a byte buffer with a declared media type

use crate::stream::{ByteSource, ByteStream, DEFAULT_CHUNK_SIZE};
use crate::{GzipError, Result};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Media type declared on compressed output
pub const GZIP_MEDIA_TYPE: &str = "application/gzip";

/// Media type of text input and the default for decompressed output
pub const TEXT_MEDIA_TYPE: &str = "text/plain";

const OCTET_STREAM_MEDIA_TYPE: &str = "application/octet-stream";

/// Anonymous immutable buffer with a media type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    media_type: String,
}

impl Blob {
    /// Wrap `bytes` with the given media type
    #[must_use]
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }

    /// Untyped blob (empty media type)
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "")
    }

    /// UTF-8 encoded text declared as `text/plain`
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(crate::encoding::text_to_bytes(text), TEXT_MEDIA_TYPE)
    }

    /// Size in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Declared media type
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Contents as a slice
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the blob and return its contents
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Stream over a copy of the contents
    #[must_use]
    pub fn stream(&self) -> ByteStream {
        ByteStream::from_bytes(self.bytes.clone(), DEFAULT_CHUNK_SIZE)
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl ByteSource for Blob {
    fn into_byte_stream(self, chunk_size: usize) -> ByteStream {
        ByteStream::from_bytes(self.bytes, chunk_size)
    }
}

/// Named immutable buffer with a media type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    name: String,
    blob: Blob,
}

impl File {
    /// Wrap `bytes` under `name` with the given media type
    #[must_use]
    pub fn new(bytes: Vec<u8>, name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blob: Blob::new(bytes, media_type),
        }
    }

    /// Read a file from disk into memory
    ///
    /// The container is named after the final path component. A `.gz`
    /// extension declares `application/gzip`, anything else
    /// `application/octet-stream`.
    ///
    /// # Errors
    /// Returns `GzipError::Io` if the file cannot be read or the path has no
    /// file name
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .ok_or_else(|| invalid_input(format!("Invalid filename: {}", path.display())))?
            .to_string_lossy()
            .to_string();

        let media_type = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => GZIP_MEDIA_TYPE,
            _ => OCTET_STREAM_MEDIA_TYPE,
        };

        let bytes = fs::read(path).await?;
        let (shown, len) = (path.display(), bytes.len());
        tracing::debug!("read {shown} ({len} bytes)");

        Ok(Self::new(bytes, name, media_type))
    }

    /// Write the contents to `dir/<name>`, returning the written path
    ///
    /// # Errors
    /// Returns `GzipError::Io` if the name would escape `dir` or the write
    /// fails
    pub async fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        validate_file_name(&self.name)?;

        let target = dir.as_ref().join(&self.name);
        fs::write(&target, self.blob.as_bytes()).await?;
        let (shown, len) = (target.display(), self.size());
        tracing::debug!("wrote {shown} ({len} bytes)");

        Ok(target)
    }

    /// File name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type
    #[must_use]
    pub fn media_type(&self) -> &str {
        self.blob.media_type()
    }

    /// Size in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.blob.size()
    }

    /// Contents as a slice
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.blob.as_bytes()
    }

    /// Drop the name and keep the typed contents
    #[must_use]
    pub fn into_blob(self) -> Blob {
        self.blob
    }

    /// Stream over a copy of the contents
    #[must_use]
    pub fn stream(&self) -> ByteStream {
        self.blob.stream()
    }
}

impl AsRef<[u8]> for File {
    fn as_ref(&self) -> &[u8] {
        self.blob.as_bytes()
    }
}

impl ByteSource for File {
    fn into_byte_stream(self, chunk_size: usize) -> ByteStream {
        self.blob.into_byte_stream(chunk_size)
    }
}

fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
    {
        return Err(invalid_input(format!("Unsafe file name: {name:?}")));
    }
    Ok(())
}

fn invalid_input(msg: String) -> GzipError {
    GzipError::Io(io::Error::new(io::ErrorKind::InvalidInput, msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_that_escape_the_directory_are_rejected() {
        assert!(validate_file_name("file.gz").is_ok());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("../etc/passwd").is_err());
        assert!(validate_file_name("a\\b").is_err());
        assert!(validate_file_name("").is_err());
    }

    fn is_invalid_input(err: &GzipError) -> bool {
        matches!(err, GzipError::Io(e) if e.kind() == io::ErrorKind::InvalidInput)
    }

    #[test]
    fn unsafe_file_names_are_invalid_input() {
        let err = validate_file_name("../etc/passwd").unwrap_err();
        assert!(is_invalid_input(&err), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn paths_without_a_file_name_are_invalid_input() {
        for path in ["/", ".."] {
            let err = File::from_path(path).await.unwrap_err();
            assert!(is_invalid_input(&err), "unexpected error for {path:?}: {err}");
        }
    }
}
