//! Color tokens for the light and dark palettes.
//!
//! Tokens are semantic names mapped to fixed colors. The light set
//! ([`LIGHT`]) is complete; the dark set ([`DARK`]) is a partial override.
//! Tokens with no dark variant (`sky`, `error`, `success`, ...) keep their
//! light value in dark mode — consumers pick explicitly per property.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// An RGB color, usually written as a hex literal.
///
/// # Example
///
/// ```rust
/// use styleguide::Color;
///
/// let parsed = Color::from_hex("#61dafb").unwrap();
/// assert_eq!(parsed, Color::hex(0x61DAFB));
/// assert_eq!(parsed.to_hex(), "#61dafb");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Creates a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Parses a CSS-style hex string (`#rgb` or `#rrggbb`).
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] when the leading `#` is missing, the
    /// digit count is wrong, or a character is not a hex digit.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit { found: bad });
        }

        match digits.len() {
            // Short form: each nibble doubles (#abc -> #aabbcc).
            3 => {
                let value = u32::from_str_radix(digits, 16).expect("hex digits validated");
                let r = ((value >> 8) & 0xF) as u8 * 0x11;
                let g = ((value >> 4) & 0xF) as u8 * 0x11;
                let b = (value & 0xF) as u8 * 0x11;
                Ok(Self { r, g, b })
            }
            6 => {
                let value = u32::from_str_radix(digits, 16).expect("hex digits validated");
                Ok(Self::hex(value))
            }
            len => Err(ColorParseError::InvalidLength { len }),
        }
    }

    /// Returns the color as an `(r, g, b)` triple.
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Error returned when hex color parsing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string does not start with `#`
    MissingHash,
    /// The digit count is neither 3 nor 6
    InvalidLength { len: usize },
    /// A character is not a hex digit
    InvalidDigit { found: char },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::MissingHash => write!(f, "hex color must start with '#'"),
            ColorParseError::InvalidLength { len } => {
                write!(f, "hex color must have 3 or 6 digits, got {}", len)
            }
            ColorParseError::InvalidDigit { found } => {
                write!(f, "invalid hex digit '{}'", found)
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

/// The light color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub sky: Color,
    pub powder: Color,
    pub pewter: Color,
    pub gray1: Color,
    pub gray2: Color,
    pub gray3: Color,
    pub gray4: Color,
    pub gray5: Color,
    pub gray6: Color,
    pub gray7: Color,
    pub black: Color,
    pub white: Color,
    pub secondary: Color,
    pub warning: Color,
    pub warning_light: Color,
    pub warning_dark: Color,
    pub error: Color,
    pub success: Color,
}

/// The light palette.
pub const LIGHT: Palette = Palette {
    primary: Color::hex(0x61DAFB),
    primary_light: Color::hex(0xC1F4FF),
    primary_dark: Color::hex(0x39BEE2),
    sky: Color::hex(0xC6EEFB),
    powder: Color::hex(0xEEFAFE),
    pewter: Color::hex(0xBEC8CB),
    gray1: Color::hex(0xF7F7F7),
    gray2: Color::hex(0xECECEC),
    gray3: Color::hex(0xCFCFD5),
    gray4: Color::hex(0x82889E),
    gray5: Color::hex(0x505461),
    gray6: Color::hex(0x2A2C33),
    gray7: Color::hex(0x21232A),
    black: Color::hex(0x242424),
    white: Color::hex(0xFFFFFF),
    secondary: Color::hex(0xAFB1AF),
    warning: Color::hex(0xFBE679),
    warning_light: Color::hex(0xFEF7D6),
    warning_dark: Color::hex(0x995E00),
    error: Color::hex(0xFF5555),
    success: Color::hex(0x4CAF50),
};

impl Palette {
    /// Returns `(name, color)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, Color); 21] {
        [
            ("primary", self.primary),
            ("primaryLight", self.primary_light),
            ("primaryDark", self.primary_dark),
            ("sky", self.sky),
            ("powder", self.powder),
            ("pewter", self.pewter),
            ("gray1", self.gray1),
            ("gray2", self.gray2),
            ("gray3", self.gray3),
            ("gray4", self.gray4),
            ("gray5", self.gray5),
            ("gray6", self.gray6),
            ("gray7", self.gray7),
            ("black", self.black),
            ("white", self.white),
            ("secondary", self.secondary),
            ("warning", self.warning),
            ("warningLight", self.warning_light),
            ("warningDark", self.warning_dark),
            ("error", self.error),
            ("success", self.success),
        ]
    }
}

/// The dark color tokens.
///
/// A partial override of [`Palette`]: only the tokens listed here have a
/// dark variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DarkPalette {
    pub black: Color,
    pub background: Color,
    pub sub_header: Color,
    pub border: Color,
    pub very_dark: Color,
    pub dark: Color,
    pub powder: Color,
    pub pewter: Color,
    pub secondary: Color,
    pub warning_light: Color,
    pub warning: Color,
}

/// The dark palette.
pub const DARK: DarkPalette = DarkPalette {
    black: Color::hex(0x000000),
    background: Color::hex(0x19191F),
    sub_header: Color::hex(0x14141A),
    border: Color::hex(0x2A2E36),
    very_dark: Color::hex(0x111114),
    dark: Color::hex(0x14141A),
    powder: Color::hex(0x262A36),
    pewter: Color::hex(0x767C8E),
    secondary: Color::hex(0xA2A7AB),
    warning_light: Color::hex(0x2F2704),
    warning: Color::hex(0x9A810C),
};

impl DarkPalette {
    /// Returns `(name, color)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, Color); 11] {
        [
            ("black", self.black),
            ("background", self.background),
            ("subHeader", self.sub_header),
            ("border", self.border),
            ("veryDark", self.very_dark),
            ("dark", self.dark),
            ("powder", self.powder),
            ("pewter", self.pewter),
            ("secondary", self.secondary),
            ("warningLight", self.warning_light),
            ("warning", self.warning),
        ]
    }
}
