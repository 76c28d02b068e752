#![forbid(unsafe_code)]

//! mcfmt public facade.
//!
//! Re-exports the engine's surface area: format codes and style state,
//! the parser/sanitizer/transport codec, the obfuscation animator, the
//! renderer glue that mounts runs, and the storage collaborator boundary.
//!
//! # Display path
//! raw string → [`purify`] → [`parse`] → [`mount`] → animators repaint
//! obfuscated runs until their display units unmount.
//!
//! # Persistence path
//! raw string → [`purify`] → [`encode`] → [`TextStore::save`].

use std::fmt;

pub mod render;
pub mod store;

// --- Style re-exports ------------------------------------------------------

pub use mcfmt_style::{
    ChatColor, ColorPolicy, ESCAPE_MARKER, FormatCode, Rgb, StyleFlags, StyleState,
};

// --- Text re-exports -------------------------------------------------------

pub use mcfmt_text::{
    ParseOptions, StyledRun, TransportError, ValidationError, clip_lines, decode, encode, parse,
    parse_with, purify, validate_line_count,
};

// --- Animation re-exports --------------------------------------------------

pub use mcfmt_anim::{
    AnimatorHandle, FrameRng, GLYPHS, GlyphTable, ObfuscationAnimator, WidthClass, scramble_frame,
};

pub use render::{MountedRun, mount, present};
pub use store::{StoreError, TextStore, load_text, save_text};

/// Top-level error type for engine callers.
#[derive(Debug)]
pub enum Error {
    /// Sanitized text violates a caller-supplied structural constraint.
    Validation(ValidationError),
    /// The transport codec was handed data outside its domain.
    Transport(TransportError),
    /// The storage collaborator failed; the status code is surfaced untouched.
    Store(StoreError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Transport(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Transport(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
