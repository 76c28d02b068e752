#![forbid(unsafe_code)]

//! Obfuscation animation: width-stable glyph scrambling for styled runs.
//!
//! Runs flagged obfuscated are repainted every display refresh with random
//! glyphs drawn from the same width class as the character they replace, so
//! the scramble never shifts layout. The underlying source text is never
//! mutated; only the transient display string changes.
//!
//! # Example
//! ```
//! use mcfmt_anim::ObfuscationAnimator;
//!
//! let (mut animator, handle) = ObfuscationAnimator::with_seed("Secret", 7);
//! let frame = animator.tick().unwrap();
//! assert_eq!(frame.chars().count(), 6);
//!
//! handle.stop();
//! assert!(animator.tick().is_none());
//! ```

pub mod glyph;
pub mod obfuscate;

pub use glyph::{GLYPHS, GlyphTable, WidthClass};
pub use obfuscate::{AnimatorHandle, FrameRng, ObfuscationAnimator, scramble_frame};
