#![forbid(unsafe_code)]

//! Cumulative style state built by replaying format codes.

use crate::code::{ChatColor, FormatCode};
use bitflags::bitflags;

bitflags! {
    /// Independent boolean style toggles.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        const BOLD          = 1 << 0;
        const ITALIC        = 1 << 1;
        const UNDERLINE     = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED    = 1 << 4;
    }
}

/// How a color code interacts with toggles already in effect.
///
/// Game clients disagree on this: some treat a color change as an implicit
/// reset of the attribute toggles, others leave them alone. The run model here
/// defaults to [`ColorPolicy::Independent`]; callers targeting the stricter
/// client behavior can opt into [`ColorPolicy::ResetsFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// A color code replaces the color and leaves toggles untouched.
    #[default]
    Independent,
    /// A color code replaces the color and clears all toggles.
    ResetsFlags,
}

/// The cumulative style in effect at a point in the text.
///
/// Fully determined by replaying all format codes seen so far, left to right;
/// it never looks ahead. At most one color is active at a time, and the toggle
/// set is independent of the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleState {
    /// Active color, if any. The most recent color code wins.
    pub color: Option<ChatColor>,
    /// Active attribute toggles.
    pub flags: StyleFlags,
}

impl StyleState {
    /// No color, no toggles.
    pub const DEFAULT: Self = Self {
        color: None,
        flags: StyleFlags::empty(),
    };

    /// Apply a format code with the default [`ColorPolicy::Independent`].
    pub fn apply(&mut self, code: FormatCode) {
        self.apply_with(code, ColorPolicy::Independent);
    }

    /// Apply a format code under an explicit color policy.
    pub fn apply_with(&mut self, code: FormatCode, policy: ColorPolicy) {
        match code {
            FormatCode::Color(color) => {
                if policy == ColorPolicy::ResetsFlags {
                    self.flags = StyleFlags::empty();
                }
                self.color = Some(color);
            }
            FormatCode::Bold => self.flags |= StyleFlags::BOLD,
            FormatCode::Italic => self.flags |= StyleFlags::ITALIC,
            FormatCode::Underline => self.flags |= StyleFlags::UNDERLINE,
            FormatCode::Strikethrough => self.flags |= StyleFlags::STRIKETHROUGH,
            FormatCode::Obfuscated => self.flags |= StyleFlags::OBFUSCATED,
            FormatCode::Reset => *self = Self::DEFAULT,
        }
    }

    /// Whether this state equals the default (no color, no toggles).
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Whether the glyph-scrambling toggle is active.
    #[inline]
    #[must_use]
    pub fn is_obfuscated(&self) -> bool {
        self.flags.contains(StyleFlags::OBFUSCATED)
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self::DEFAULT
    }
}
