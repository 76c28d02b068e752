#![forbid(unsafe_code)]

//! Formatting-code text engine: parsing, sanitation, and transport encoding.
//!
//! The pipeline for display is raw string → [`purify`] → [`parse`] → a
//! sequence of [`StyledRun`] values for the renderer. For persistence it is
//! raw string → [`purify`] → [`encode`] → an opaque text field.
//!
//! # Example
//! ```
//! use mcfmt_text::{parse, purify};
//! use mcfmt_style::ChatColor;
//!
//! let runs = parse(&purify("§cHello§r World"));
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].text, "Hello");
//! assert_eq!(runs[0].style.color, Some(ChatColor::Red));
//! assert!(runs[1].style.is_default());
//! ```

pub mod parse;
pub mod run;
pub mod sanitize;
pub mod transport;

pub use parse::{ParseOptions, parse, parse_with};
pub use run::StyledRun;
pub use sanitize::{ValidationError, clip_lines, purify, validate_line_count};
pub use transport::{TransportError, decode, encode};
