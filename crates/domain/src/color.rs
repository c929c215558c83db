//! RGB colors as reported by LED controllers (`"r,g,b"`) and picked in the UI
//! (`#rrggbb`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `"r,g,b"` string, falling back to black when the value is
    /// missing or malformed.
    #[must_use]
    pub fn parse_or_black(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or(Self::BLACK)
    }

    /// Parse a `#rrggbb` string as produced by an HTML color input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::HexColor`] if the input is not six hex digits
    /// prefixed with `#`.
    pub fn from_hex(value: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::HexColor(value.to_string());
        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as a CSS `rgb()` value.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Format in the backend's `"r,g,b"` wire form.
    #[must_use]
    pub fn to_wire(self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[r, g, b] = parts.as_slice() else {
            return Err(ParseError::ColorArity(parts.len()));
        };
        let channel = |part: &str| {
            part.parse::<u8>()
                .map_err(|_| ParseError::ColorComponent(part.to_string()))
        };
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}
