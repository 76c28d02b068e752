#![forbid(unsafe_code)]

//! Transport encoding for persisted text.
//!
//! The persistence channel stores an opaque ASCII field, so sanitized text is
//! carried as standard base64 over its UTF-8 bytes. [`decode`] is the exact
//! inverse of [`encode`] and fails closed on anything outside that domain; it
//! never truncates or substitutes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

/// Errors from [`decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Input contains characters outside the transport alphabet.
    InvalidEncoding(String),
    /// Decoded payload is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding(reason) => write!(f, "invalid transport encoding: {reason}"),
            Self::InvalidUtf8 => write!(f, "decoded payload is not valid UTF-8"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Encode sanitized text for the persistence channel.
///
/// Never fails: any string the sanitizer produces has a valid byte
/// representation.
#[must_use]
pub fn encode(sanitized: &str) -> String {
    STANDARD.encode(sanitized.as_bytes())
}

/// Decode a stored field back into text.
pub fn decode(encoded: &str) -> Result<String, TransportError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| TransportError::InvalidEncoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| TransportError::InvalidUtf8)
}
