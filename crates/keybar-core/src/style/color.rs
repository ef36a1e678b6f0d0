use serde::{Deserialize, Serialize};

use super::StyleError;

/// RGBA color, components in `0.0..=1.0`.
///
/// Serializes as a `"#RRGGBB"` / `"#RRGGBBAA"` hex string, which is also
/// the representation used in style TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const CLEAR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_opacity(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` hex string.
    pub fn parse_hex(value: &str) -> Result<Self, StyleError> {
        let invalid = |reason| StyleError::InvalidColor {
            value: value.to_string(),
            reason,
        };
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| invalid("must start with '#'"))?;
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(invalid("expected 6 or 8 hex digits"));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|b| f32::from(b) / 255.0)
                .map_err(|_| invalid("non-hex digit"))
        };
        Ok(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: if digits.len() == 8 { byte(6)? } else { 1.0 },
        })
    }

    /// Hex form of this color; the alpha pair is omitted when fully opaque.
    pub fn to_hex(self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if channel(self.a) == 0xFF {
            format!(
                "#{:02X}{:02X}{:02X}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                channel(self.a)
            )
        }
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
