#![forbid(unsafe_code)]

//! Glyph pools classified by rendered advance width.
//!
//! The game font draws most glyphs at the same advance width ("normal") and a
//! handful at a single pixel ("narrow"). Substituting within a class keeps the
//! scrambled text visually stable. The space character belongs to neither
//! class and is never substituted.

/// Width class of a rendered glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    /// One-pixel advance width.
    Narrow,
    /// Regular advance width.
    Normal,
}

/// Glyphs with a one-pixel advance width.
const NARROW_GLYPHS: &[char] = &['|', 'i', '!', ':', ';', '.'];

/// Glyphs with the regular advance width. Letters and digits that the font
/// renders at other widths (`1`, `I`, `f`, `k`, `l`, `t`, …) are absent.
const NORMAL_GLYPHS: &[char] = &[
    '+', '/', '\\', '=', '0', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E',
    'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X',
    'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'g', 'h', 'j', 'm', 'n', 'o', 'p', 'q', 'r', 's', 'u',
    'v', 'w', 'x', 'y', 'z', '¢', '£', '¥', '±', 'µ', 'À', 'Á', 'Â', 'Ã', 'Ä', 'Å', 'Ç', 'Ñ',
    'Ò', 'Ó', 'Ô', 'Õ', 'Ö', '×', 'Ø', 'Ù', 'Ú', 'Û', 'Ü', 'Ý', 'ë',
];

/// The two disjoint substitution pools.
///
/// Immutable and process-wide; safe for unsynchronized reads from any number
/// of animators.
#[derive(Debug)]
pub struct GlyphTable {
    narrow: &'static [char],
    normal: &'static [char],
}

/// The process-wide glyph table.
pub static GLYPHS: GlyphTable = GlyphTable {
    narrow: NARROW_GLYPHS,
    normal: NORMAL_GLYPHS,
};

impl GlyphTable {
    /// Classify a character for substitution.
    ///
    /// Returns `None` only for the space character, which always maps to
    /// itself. Characters outside both pools count as [`WidthClass::Normal`],
    /// matching how the effect treats arbitrary source text.
    #[must_use]
    pub fn classify(&self, ch: char) -> Option<WidthClass> {
        if ch == ' ' {
            return None;
        }
        if self.narrow.contains(&ch) {
            Some(WidthClass::Narrow)
        } else {
            Some(WidthClass::Normal)
        }
    }

    /// The substitution pool for a width class.
    #[must_use]
    pub fn pool(&self, class: WidthClass) -> &'static [char] {
        match class {
            WidthClass::Narrow => self.narrow,
            WidthClass::Normal => self.normal,
        }
    }
}
