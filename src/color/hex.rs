use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{MandalaError, MandalaResult};

/// A validated, opaque sRGB color written as `#RRGGBB`.
///
/// Serializes as the uppercase hex string; deserialization rejects anything that is not exactly
/// six hex digits (with an optional leading `#`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Build a color from its channel bytes.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive, surrounding whitespace ignored).
    pub fn parse(s: &str) -> MandalaResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MandalaError::validation(format!(
                "color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> MandalaResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| MandalaError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&digits[0..2])?,
            g: hex_byte(&digits[2..4])?,
            b: hex_byte(&digits[4..6])?,
        })
    }

    /// Channel bytes `[r, g, b]`.
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels normalized to `[0, 1]`.
    pub fn rgb01(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = MandalaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

/// Accept `input` when it is a well-formed hex color, otherwise fall back to `default`.
pub fn normalize_color(input: &str, default: HexColor) -> HexColor {
    HexColor::parse(input).unwrap_or(default)
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
