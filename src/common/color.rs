//! Color type conversions and utilities
//!
//! Provides type-safe color handling with conversions between:
//! - Hex strings (#RRGGBB or #AARRGGBB format)
//! - ARGB32 values (u32)
//! - RGB8 triples for the canvas

use serde::{Deserialize, Serialize};

/// Hex color in ARGB32 format (#AARRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(u32);

impl HexColor {
    /// Parse hex color string supporting multiple formats:
    /// - 6 digits: RRGGBB (full opacity assumed, becomes FFRRGGBB)
    /// - 8 digits: AARRGGBB (explicit alpha)
    /// - Optional '#' prefix supported but not required
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;

        match hex.len() {
            6 => Some(Self(0xFF_00_00_00 | value)),
            8 => Some(Self(value)),
            _ => None,
        }
    }

    /// Create from ARGB32 value
    #[cfg(test)]
    pub const fn from_argb32(argb: u32) -> Self {
        Self(argb)
    }

    /// Create an opaque color from its channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF_00_00_00 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Color channels without alpha
    pub fn rgb(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    pub fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        if color.is_opaque() {
            let [r, g, b] = color.rgb();
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:08X}", color.0)
        }
    }
}

/// Blend `src` over `dst` with `coverage` (0-255) as the mix weight
pub fn blend_channel(dst: u8, src: u8, coverage: u32) -> u8 {
    let dst = dst as u32;
    let src = src as u32;
    ((src * coverage + dst * (255 - coverage) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parsing() {
        // 8-digit format (AARRGGBB)
        assert_eq!(HexColor::parse("#7FFF0000"), Some(HexColor(0x7FFF0000)));
        assert_eq!(HexColor::parse("7FFF0000"), Some(HexColor(0x7FFF0000)));
        assert_eq!(HexColor::parse("#00112233"), Some(HexColor(0x00112233)));

        // 6-digit format (RRGGBB) - should prepend FF for full opacity
        assert_eq!(HexColor::parse("#080808"), Some(HexColor(0xFF080808)));
        assert_eq!(HexColor::parse("f0eada"), Some(HexColor(0xFFF0EADA)));

        // Invalid
        assert_eq!(HexColor::parse("invalid"), None);
        assert_eq!(HexColor::parse(""), None);
        assert_eq!(HexColor::parse("#FFF"), None);
        assert_eq!(HexColor::parse("+12345"), None);
    }

    #[test]
    fn test_channels() {
        let color = HexColor::parse("#78B48C50").unwrap();
        assert_eq!(color.alpha(), 0x78);
        assert_eq!(color.rgb(), [0xB4, 0x8C, 0x50]);
        assert!(!color.is_opaque());

        assert_eq!(HexColor::from_rgb(8, 8, 8), HexColor(0xFF080808));
    }

    #[test]
    fn test_string_round_trip_keeps_short_form_for_opaque() {
        assert_eq!(String::from(HexColor(0xFFF0EADA)), "#F0EADA");
        assert_eq!(String::from(HexColor(0x78B48C50)), "#78B48C50");

        let json = serde_json::to_string(&HexColor(0xFF080808)).unwrap();
        assert_eq!(json, "\"#080808\"");
        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
    }

    #[test]
    fn test_blend_channel() {
        assert_eq!(blend_channel(10, 200, 0), 10);
        assert_eq!(blend_channel(10, 200, 255), 200);
        let half = blend_channel(0, 255, 128);
        assert!((127..=129).contains(&half));
    }
}
