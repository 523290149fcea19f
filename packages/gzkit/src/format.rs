//! Output format tags, input encodings and the tagged output value

use crate::container::{Blob, File};
use crate::encoding::{base64_to_bytes, base64url_to_bytes, hex_to_bytes};
use crate::{GzipError, Result};
use std::fmt;
use std::str::FromStr;

/// Requested shape of compressed output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompressFormat {
    /// Raw gzip bytes
    #[default]
    Raw,
    /// Padded standard base64 string
    Base64,
    /// Unpadded URL-safe base64 string
    Base64Url,
    /// Lower-case hex string
    Hex,
    /// `file.gz` declared as `application/gzip`
    File,
    /// Blob declared as `application/gzip`
    Blob,
}

/// Requested shape of decompressed output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecompressFormat {
    /// Raw decompressed bytes
    #[default]
    Raw,
    /// Decompressed bytes decoded as UTF-8 text
    Utf8,
    /// Padded standard base64 string
    Base64,
    /// Unpadded URL-safe base64 string
    Base64Url,
    /// Lower-case hex string
    Hex,
    /// Named file with the caller's media type and suffix
    File,
    /// Blob with the caller's media type
    Blob,
}

/// Text encoding of compressed input given as a string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEncoding {
    /// Padded standard base64
    Base64,
    /// URL-safe base64, padding optional
    Base64Url,
    /// Hex, two digits per byte
    Hex,
}

impl InputEncoding {
    /// Decode `text` into the bytes it represents
    ///
    /// # Errors
    /// Returns `GzipError::Decode` if `text` is not valid for this encoding
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Base64 => base64_to_bytes(text),
            Self::Base64Url => base64url_to_bytes(text),
            Self::Hex => hex_to_bytes(text),
        }
    }
}

macro_rules! format_tags {
    ($ty:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $ty {
            /// Tag string used by the public surface
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = GzipError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($tag => Ok(Self::$variant),)+
                    other => Err(GzipError::unknown_format(format!(
                        "{:?} is not a valid {}",
                        other,
                        stringify!($ty)
                    ))),
                }
            }
        }
    };
}

format_tags!(CompressFormat {
    Raw => "raw",
    Base64 => "base64",
    Base64Url => "base64url",
    Hex => "hex",
    File => "file",
    Blob => "blob",
});

format_tags!(DecompressFormat {
    Raw => "raw",
    Utf8 => "utf8",
    Base64 => "base64",
    Base64Url => "base64url",
    Hex => "hex",
    File => "file",
    Blob => "blob",
});

format_tags!(InputEncoding {
    Base64 => "base64",
    Base64Url => "base64url",
    Hex => "hex",
});

/// Result of a compress or decompress call, shaped by the requested format
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// `raw` output
    Bytes(Vec<u8>),
    /// `base64`, `base64url`, `hex` or `utf8` output
    Text(String),
    /// `file` output
    File(File),
    /// `blob` output
    Blob(Blob),
}

impl Output {
    /// Raw bytes, if this is `Bytes`
    #[must_use]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Text, if this is `Text`
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Borrowed text, if this is `Text`
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// File, if this is `File`
    #[must_use]
    pub fn into_file(self) -> Option<File> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// Blob, if this is `Blob`
    #[must_use]
    pub fn into_blob(self) -> Option<Blob> {
        match self {
            Self::Blob(blob) => Some(blob),
            _ => None,
        }
    }

    /// Length of the payload: bytes for buffers and containers, bytes of the
    /// UTF-8 text otherwise
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Text(text) => text.len(),
            Self::File(file) => file.size(),
            Self::Blob(blob) => blob.size(),
        }
    }

    /// Whether the payload is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_and_display() {
        for format in [
            DecompressFormat::Raw,
            DecompressFormat::Utf8,
            DecompressFormat::Base64,
            DecompressFormat::Base64Url,
            DecompressFormat::Hex,
            DecompressFormat::File,
            DecompressFormat::Blob,
        ] {
            assert_eq!(format.to_string().parse::<DecompressFormat>().unwrap(), format);
        }
        assert_eq!("base64url".parse::<InputEncoding>().unwrap(), InputEncoding::Base64Url);
    }

    #[test]
    fn utf8_is_not_a_compress_format() {
        let err = "utf8".parse::<CompressFormat>().unwrap_err();
        assert!(matches!(err, GzipError::UnknownFormat(_)));
    }
}
