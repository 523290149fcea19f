//! Conversions between byte buffers and their text encodings
//!
//! All decoders are strict: anything outside the encoding's alphabet,
//! including whitespace, is rejected with [`GzipError::Decode`]. The
//! base64url decoder also takes the standard `+` and `/` symbols.

use crate::{GzipError, Result};
use base64::engine::general_purpose;
use base64::Engine as _;

/// Encode bytes as padded standard base64 (`A-Z a-z 0-9 + /`)
#[must_use]
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode a padded standard base64 string
///
/// # Errors
/// Returns `GzipError::Decode` on characters outside the alphabet, bad padding
/// or non-canonical trailing bits
pub fn base64_to_bytes(text: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(text)
        .map_err(|e| GzipError::decode(format!("invalid base64: {e}")))
}

/// Encode bytes as URL-safe base64 without padding
#[must_use]
pub fn bytes_to_base64url(bytes: &[u8]) -> String {
    base64_url::encode(bytes)
}

/// Decode a URL-safe base64 string, padded or not
///
/// `-` and `_` are mapped back to `+` and `/`, the string is re-padded to a
/// multiple of four and decoded as standard base64. Standard-alphabet input
/// therefore decodes too.
///
/// # Errors
/// Returns `GzipError::Decode` if the string is not valid base64url
pub fn base64url_to_bytes(text: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(to_standard_base64(text))
        .map_err(|e| GzipError::decode(format!("invalid base64url: {e}")))
}

fn to_standard_base64(text: &str) -> String {
    let mut standard: String = text
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    let missing = (4 - standard.len() % 4) % 4;
    standard.extend(std::iter::repeat('=').take(missing));
    standard
}

/// Encode bytes as lower-case hex, two digits per byte
#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string two digits at a time
///
/// Upper-case digits are accepted.
///
/// # Errors
/// Returns `GzipError::Decode` on odd length or a non-hex digit
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|e| GzipError::decode(format!("invalid hex: {e}")))
}

/// UTF-8 bytes of `text`
#[must_use]
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}
