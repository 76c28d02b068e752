#![forbid(unsafe_code)]

//! Storage collaborator boundary.
//!
//! The engine persists encoded text through a [`TextStore`], typically backed
//! by an HTTP client elsewhere in the application. The engine only requires
//! that failures report an HTTP-style status code; it never interprets one.

use crate::Error;
use mcfmt_text::{decode, encode, purify, validate_line_count};
use std::fmt;

/// Failure reported by a storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The collaborator answered with a failure status (400/401/500 class).
    /// Surfaced to the caller untouched.
    Status(u16),
    /// The collaborator could not be reached at all.
    Unreachable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "request failed with status {code}"),
            Self::Unreachable(reason) => write!(f, "store unreachable: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Where encoded text fields live.
///
/// Implementations wrap whatever request function the application uses
/// (`post(path, body)` / `get(path)`); the body is the opaque encoded field.
pub trait TextStore {
    /// Fetch the encoded field at `path`.
    fn load(&self, path: &str) -> Result<String, StoreError>;

    /// Persist the encoded field at `path`.
    fn save(&self, path: &str, body: &str) -> Result<(), StoreError>;
}

/// Sanitize, validate, encode, and persist raw markup text.
///
/// `max_lines` is the caller's structural policy; `None` skips the check.
/// Returns the sanitized text actually persisted.
pub fn save_text<S: TextStore>(
    store: &S,
    path: &str,
    raw: &str,
    max_lines: Option<usize>,
) -> Result<String, Error> {
    let clean = purify(raw);
    if let Some(max) = max_lines {
        validate_line_count(&clean, max)?;
    }
    store.save(path, &encode(&clean))?;
    tracing::debug!(path, bytes = clean.len(), "text field saved");
    Ok(clean)
}

/// Fetch and decode a stored text field.
pub fn load_text<S: TextStore>(store: &S, path: &str) -> Result<String, Error> {
    let body = store.load(path)?;
    Ok(decode(&body)?)
}
