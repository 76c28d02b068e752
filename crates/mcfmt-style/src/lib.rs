#![forbid(unsafe_code)]

//! Format codes and style state for the mcfmt text engine.
//!
//! Source text embeds two-character escape sequences: the section-sign marker
//! (`§`, [`ESCAPE_MARKER`]) followed by a single case-insensitive selector.
//! Sixteen selectors pick a [`ChatColor`], five toggle an attribute in
//! [`StyleFlags`], and `r` resets everything.
//!
//! # Example
//! ```
//! use mcfmt_style::{FormatCode, StyleState, StyleFlags};
//!
//! let mut state = StyleState::default();
//! state.apply(FormatCode::from_selector('c').unwrap());
//! state.apply(FormatCode::Bold);
//! assert!(state.flags.contains(StyleFlags::BOLD));
//!
//! state.apply(FormatCode::Reset);
//! assert!(state.is_default());
//! ```

pub mod code;
pub mod state;

pub use code::{ChatColor, ESCAPE_MARKER, FormatCode, Rgb};
pub use state::{ColorPolicy, StyleFlags, StyleState};
