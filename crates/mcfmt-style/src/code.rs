#![forbid(unsafe_code)]

//! The format-code enumeration and the palette behind the color codes.

/// Escape marker that introduces a format code in source text.
///
/// Distinct from every letter and digit, so it can never collide with a
/// selector character.
pub const ESCAPE_MARKER: char = '§';

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a `u32` key (`0xRRGGBB`).
    #[must_use]
    pub const fn as_key(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// One of the sixteen chat colors addressed by selectors `0`–`9` and `a`–`f`.
///
/// Color codes are mutually exclusive; the most recent one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl ChatColor {
    /// All sixteen colors in selector order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Look up a color by its (lowercased) selector character.
    #[must_use]
    pub const fn from_selector(selector: char) -> Option<Self> {
        match selector {
            '0' => Some(Self::Black),
            '1' => Some(Self::DarkBlue),
            '2' => Some(Self::DarkGreen),
            '3' => Some(Self::DarkAqua),
            '4' => Some(Self::DarkRed),
            '5' => Some(Self::DarkPurple),
            '6' => Some(Self::Gold),
            '7' => Some(Self::Gray),
            '8' => Some(Self::DarkGray),
            '9' => Some(Self::Blue),
            'a' => Some(Self::Green),
            'b' => Some(Self::Aqua),
            'c' => Some(Self::Red),
            'd' => Some(Self::LightPurple),
            'e' => Some(Self::Yellow),
            'f' => Some(Self::White),
            _ => None,
        }
    }

    /// The selector character for this color.
    #[must_use]
    pub const fn selector(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
        }
    }

    /// Canonical RGB value of this color.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::new(0x00, 0x00, 0x00),
            Self::DarkBlue => Rgb::new(0x00, 0x00, 0xAA),
            Self::DarkGreen => Rgb::new(0x00, 0xAA, 0x00),
            Self::DarkAqua => Rgb::new(0x00, 0xAA, 0xAA),
            Self::DarkRed => Rgb::new(0xAA, 0x00, 0x00),
            Self::DarkPurple => Rgb::new(0xAA, 0x00, 0xAA),
            Self::Gold => Rgb::new(0xFF, 0xAA, 0x00),
            Self::Gray => Rgb::new(0xAA, 0xAA, 0xAA),
            Self::DarkGray => Rgb::new(0x55, 0x55, 0x55),
            Self::Blue => Rgb::new(0x55, 0x55, 0xFF),
            Self::Green => Rgb::new(0x55, 0xFF, 0x55),
            Self::Aqua => Rgb::new(0x55, 0xFF, 0xFF),
            Self::Red => Rgb::new(0xFF, 0x55, 0x55),
            Self::LightPurple => Rgb::new(0xFF, 0x55, 0xFF),
            Self::Yellow => Rgb::new(0xFF, 0xFF, 0x55),
            Self::White => Rgb::new(0xFF, 0xFF, 0xFF),
        }
    }

    /// Stable lowercase name (useful for CSS classes and logs).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }
}

/// A recognized format code: a color, an attribute toggle, or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCode {
    /// Set the active color, replacing any previous one.
    Color(ChatColor),
    /// Toggle bold on (selector `l`).
    Bold,
    /// Toggle italic on (selector `o`).
    Italic,
    /// Toggle underline on (selector `n`).
    Underline,
    /// Toggle strikethrough on (selector `m`).
    Strikethrough,
    /// Toggle the glyph-scrambling effect on (selector `k`).
    Obfuscated,
    /// Clear the color and every toggle (selector `r`).
    Reset,
}

impl FormatCode {
    /// Look up a code by selector character. Case-insensitive.
    ///
    /// Returns `None` for anything that is not a recognized selector; callers
    /// treat such markers as literal text.
    #[must_use]
    pub fn from_selector(selector: char) -> Option<Self> {
        let selector = selector.to_ascii_lowercase();
        if let Some(color) = ChatColor::from_selector(selector) {
            return Some(Self::Color(color));
        }
        match selector {
            'k' => Some(Self::Obfuscated),
            'l' => Some(Self::Bold),
            'm' => Some(Self::Strikethrough),
            'n' => Some(Self::Underline),
            'o' => Some(Self::Italic),
            'r' => Some(Self::Reset),
            _ => None,
        }
    }

    /// The canonical (lowercase) selector character for this code.
    #[must_use]
    pub const fn selector(self) -> char {
        match self {
            Self::Color(color) => color.selector(),
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
            Self::Reset => 'r',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_lookup_round_trips() {
        for color in ChatColor::ALL {
            assert_eq!(ChatColor::from_selector(color.selector()), Some(color));
            assert_eq!(
                FormatCode::from_selector(color.selector()),
                Some(FormatCode::Color(color))
            );
        }
        for code in [
            FormatCode::Bold,
            FormatCode::Italic,
            FormatCode::Underline,
            FormatCode::Strikethrough,
            FormatCode::Obfuscated,
            FormatCode::Reset,
        ] {
            assert_eq!(FormatCode::from_selector(code.selector()), Some(code));
        }
    }

    #[test]
    fn selectors_are_case_insensitive() {
        assert_eq!(
            FormatCode::from_selector('C'),
            Some(FormatCode::Color(ChatColor::Red))
        );
        assert_eq!(FormatCode::from_selector('K'), Some(FormatCode::Obfuscated));
        assert_eq!(FormatCode::from_selector('R'), Some(FormatCode::Reset));
    }

    #[test]
    fn unknown_selectors_are_rejected() {
        for ch in ['g', 'z', 'q', ' ', '§', '\n', '!'] {
            assert_eq!(FormatCode::from_selector(ch), None, "selector {ch:?}");
        }
    }

    #[test]
    fn marker_is_not_alphanumeric() {
        assert!(!ESCAPE_MARKER.is_alphanumeric());
    }

    #[test]
    fn palette_is_distinct() {
        let mut keys: Vec<u32> = ChatColor::ALL.iter().map(|c| c.rgb().as_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 16);
    }
}
