#![forbid(unsafe_code)]

//! Styled runs: maximal literal spans paired with their style.

use mcfmt_style::StyleState;
use unicode_width::UnicodeWidthStr;

/// A maximal contiguous span of literal characters and the style active at
/// its start.
///
/// Runs are produced in source order, never overlap, and are never empty.
/// Concatenating the `text` of every run yields the input with all recognized
/// format codes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Literal text with all format codes removed.
    pub text: String,
    /// Style in effect at the start of this run.
    pub style: StyleState,
}

impl StyledRun {
    /// Create a run.
    #[must_use]
    pub fn new(text: impl Into<String>, style: StyleState) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a run with the default style.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, StyleState::DEFAULT)
    }

    /// The literal text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Display width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.as_str().width()
    }

    /// Whether this run carries the glyph-scrambling toggle.
    #[inline]
    #[must_use]
    pub fn is_obfuscated(&self) -> bool {
        self.style.is_obfuscated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcfmt_style::{FormatCode, StyleFlags};

    #[test]
    fn raw_run_is_default_styled() {
        let run = StyledRun::raw("hello");
        assert_eq!(run.as_str(), "hello");
        assert!(run.style.is_default());
        assert!(!run.is_obfuscated());
    }

    #[test]
    fn obfuscated_flag_is_visible_on_the_run() {
        let mut style = StyleState::default();
        style.apply(FormatCode::Obfuscated);
        let run = StyledRun::new("???", style);
        assert!(run.is_obfuscated());
        assert!(run.style.flags.contains(StyleFlags::OBFUSCATED));
    }

    #[test]
    fn width_counts_cells_not_bytes() {
        assert_eq!(StyledRun::raw("abc").width(), 3);
        assert_eq!(StyledRun::raw("Ü¥ë").width(), 3);
    }
}
