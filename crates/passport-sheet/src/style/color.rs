//! Color representation

use std::fmt;

/// ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Alpha channel
    pub a: u8,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create an opaque RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { a: 0xFF, r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color { a, r, g, b }
    }

    /// Parse a hex color: `#RRGGBB`, `#AARRGGBB`, `RRGGBB` or `AARRGGBB`
    ///
    /// Six-digit forms get an opaque (`FF`) alpha. Anything else yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::argb(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Convert to an 8-digit uppercase ARGB hex string, e.g. `FFFF0000`
    pub fn to_argb_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// RGB part packed as `0xRRGGBB`
    pub fn to_rgb_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_argb_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(
            Color::from_hex("#80FFFFFF"),
            Some(Color::argb(0x80, 255, 255, 255))
        );
        assert_eq!(Color::from_hex("7F102030"), Some(Color::argb(0x7F, 0x10, 0x20, 0x30)));
    }

    #[test]
    fn test_from_hex_malformed() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
        assert_eq!(Color::from_hex("red"), None);
        assert_eq!(Color::from_hex("#ÄÄ0000"), None);
    }

    #[test]
    fn test_to_argb_hex() {
        assert_eq!(Color::from_hex("#1a2b3c").unwrap().to_argb_hex(), "FF1A2B3C");
        assert_eq!(Color::argb(0x80, 1, 2, 3).to_argb_hex(), "80010203");
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_rgb_u32(), 0x123456);
    }
}
