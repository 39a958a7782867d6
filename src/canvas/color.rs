//! Color types

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// An opaque, equality-comparable color value
///
/// The canvas never looks inside a color; it only copies values around and
/// compares them with `==`.
pub trait Color: Copy + PartialEq + fmt::Debug {
    /// Whether a pixel buffer may store this value.
    ///
    /// Buffers reject unsupported values with
    /// [`CanvasError::UnsupportedColor`](crate::CanvasError::UnsupportedColor)
    /// before touching any pixel.
    #[inline]
    fn is_supported(&self) -> bool {
        true
    }
}

/// Colors that a text renderer can print as a single character
pub trait Glyph {
    fn glyph(&self) -> char;
}

/// Single-byte color, printed as the byte itself
///
/// Only printable ASCII (`' '..='~'`) is supported, so every pixel renders
/// as exactly one terminal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteColor(pub u8);

impl ByteColor {
    pub const SPACE: Self = Self(b' ');
    pub const X: Self = Self(b'x');

    #[inline]
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    #[inline]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    const fn is_printable(byte: u8) -> bool {
        byte >= b' ' && byte <= b'~'
    }
}

impl Color for ByteColor {
    #[inline]
    fn is_supported(&self) -> bool {
        Self::is_printable(self.0)
    }
}

impl Glyph for ByteColor {
    #[inline]
    fn glyph(&self) -> char {
        char::from(self.0)
    }
}

impl Default for ByteColor {
    fn default() -> Self {
        Self::SPACE
    }
}

impl From<u8> for ByteColor {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl TryFrom<char> for ByteColor {
    type Error = ParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        u8::try_from(ch)
            .ok()
            .filter(|b| Self::is_printable(*b))
            .map(Self)
            .ok_or_else(|| ParseError::InvalidColor(ch.to_string()))
    }
}

impl fmt::Display for ByteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for ByteColor {
    type Err = ParseError;

    /// Parse a one-byte string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [] => Err(ParseError::EmptyColor),
            [b] if Self::is_printable(*b) => Ok(Self(*b)),
            _ => Err(ParseError::InvalidColor(s.to_string())),
        }
    }
}

/// Color parser with a fallback for empty input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorParser {
    pub default_color: ByteColor,
}

impl ColorParser {
    pub const fn new(default_color: ByteColor) -> Self {
        Self { default_color }
    }

    /// Parse `s`, returning the default color when it is empty.
    pub fn parse(&self, s: &str) -> Result<ByteColor, ParseError> {
        if s.is_empty() {
            return Ok(self.default_color);
        }
        s.parse()
    }
}

impl Default for ColorParser {
    fn default() -> Self {
        Self::new(ByteColor::SPACE)
    }
}
