//! Color - host color tokens parsed into structured RGBA
//!
//! Hosts send colors as strings (`#rgb`, `#rrggbb`, `#rrggbbaa`, or a CSS
//! named color). Inside the grid a color is a packed ABGR `u32`
//! (little-endian bytes are `[R, G, B, A]`), which is also the byte layout
//! the host's export canvas expects.
//!
//! Two colors are equal when their RGBA components are equal, so `"red"`,
//! `"#f00"` and `"#FF0000"` all compare equal. The textual output form is
//! lowercase `#rrggbb`, or `#rrggbbaa` when the color is not fully opaque.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::core::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// CSS level 1 keywords plus the few extras the host palette UI uses.
const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0x00, 0x00, 0x00, 0xff]),
    ("silver", [0xc0, 0xc0, 0xc0, 0xff]),
    ("gray", [0x80, 0x80, 0x80, 0xff]),
    ("grey", [0x80, 0x80, 0x80, 0xff]),
    ("white", [0xff, 0xff, 0xff, 0xff]),
    ("maroon", [0x80, 0x00, 0x00, 0xff]),
    ("red", [0xff, 0x00, 0x00, 0xff]),
    ("purple", [0x80, 0x00, 0x80, 0xff]),
    ("fuchsia", [0xff, 0x00, 0xff, 0xff]),
    ("magenta", [0xff, 0x00, 0xff, 0xff]),
    ("green", [0x00, 0x80, 0x00, 0xff]),
    ("lime", [0x00, 0xff, 0x00, 0xff]),
    ("olive", [0x80, 0x80, 0x00, 0xff]),
    ("yellow", [0xff, 0xff, 0x00, 0xff]),
    ("navy", [0x00, 0x00, 0x80, 0xff]),
    ("blue", [0x00, 0x00, 0xff, 0xff]),
    ("teal", [0x00, 0x80, 0x80, 0xff]),
    ("aqua", [0x00, 0xff, 0xff, 0xff]),
    ("cyan", [0x00, 0xff, 0xff, 0xff]),
    ("orange", [0xff, 0xa5, 0x00, 0xff]),
    ("transparent", [0x00, 0x00, 0x00, 0x00]),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into ABGR (0xAABBGGRR)
    #[inline]
    pub const fn to_abgr(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    #[inline]
    pub const fn from_abgr(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_le_bytes();
        Self { r, g, b, a }
    }

    /// Per-channel linear blend `(1 - t) * self + t * other`, rounded to nearest.
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |c0: u8, c1: u8| -> u8 {
            let v = (1.0 - t) * c0 as f64 + t * c1 as f64;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    fn parse_hex(digits: &str) -> Option<Color> {
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        match digits.len() {
            3 | 4 => {
                // #rgb / #rgba: each nibble doubles (f -> ff)
                let r = nibble(0)? * 0x11;
                let g = nibble(1)? * 0x11;
                let b = nibble(2)? * 0x11;
                let a = if digits.len() == 4 { nibble(3)? * 0x11 } else { 0xff };
                Some(Color::rgba(r, g, b, a))
            }
            6 | 8 => {
                let a = if digits.len() == 8 { byte(6)? } else { 0xff };
                Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, a))
            }
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let parsed = match token.strip_prefix('#') {
            Some(digits) => Color::parse_hex(digits),
            None => NAMED_COLORS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(token))
                .map(|(_, [r, g, b, a])| Color::rgba(*r, *g, *b, *a)),
        };
        parsed.ok_or_else(|| EngineError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#ff0000".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("#F00".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("#00ff0080".parse::<Color>().unwrap(), Color::rgba(0, 255, 0, 0x80));
        assert_eq!("#0f08".parse::<Color>().unwrap(), Color::rgba(0, 255, 0, 0x88));
    }

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!("Red".parse::<Color>().unwrap(), "#ff0000".parse().unwrap());
        assert_eq!(" white ".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("transparent".parse::<Color>().unwrap().a, 0);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "#gggggg", "notacolor", "ff0000"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(EngineError::InvalidColor(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn display_is_canonical_lowercase_hex() {
        assert_eq!("#ABCDEF".parse::<Color>().unwrap().to_string(), "#abcdef");
        assert_eq!("lime".parse::<Color>().unwrap().to_string(), "#00ff00");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn abgr_packing_puts_red_in_low_byte() {
        let c = Color::rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_abgr(), 0x4433_2211);
        assert_eq!(Color::from_abgr(c.to_abgr()), c);
    }

    #[test]
    fn lerp_hits_endpoints_exactly_and_rounds_midpoint() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(255, 100, 1);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(128, 50, 1));
        assert_eq!(a.lerp(b, 7.0), b);
    }
}
