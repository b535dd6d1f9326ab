//! Centralized color swatch table & helpers.
//! Single source of truth for every screen (and the mixer) that resolves an
//! English color name to a displayable value.

use bevy::prelude::*;

/// 24-bit sRGB triple shared by the mixer and the UI tinting helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Neutral gray used for names without a swatch entry.
pub const FALLBACK_SWATCH: Rgb = Rgb { r: 0x42, g: 0x42, b: 0x42 };

const NEAR_BLACK: Rgb = Rgb { r: 0x21, g: 0x21, b: 0x21 };
const WHITE: Rgb = Rgb { r: 0xff, g: 0xff, b: 0xff };

/// English color name -> display swatch. Update here only.
const SWATCHES: [(&str, Rgb); 7] = [
    ("Red", Rgb { r: 0xe5, g: 0x39, b: 0x35 }),
    ("Green", Rgb { r: 0x43, g: 0xa0, b: 0x47 }),
    ("Blue", Rgb { r: 0x1e, g: 0x88, b: 0xe5 }),
    ("Yellow", Rgb { r: 0xfd, g: 0xd8, b: 0x35 }),
    ("Orange", Rgb { r: 0xfb, g: 0x8c, b: 0x00 }),
    ("Black", Rgb { r: 0x21, g: 0x21, b: 0x21 }),
    ("White", Rgb { r: 0xff, g: 0xff, b: 0xff }),
];

/// Case-insensitive swatch lookup; unmapped names fall back to neutral gray.
pub fn swatch(name: &str) -> Rgb {
    SWATCHES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
        .unwrap_or(FALLBACK_SWATCH)
}

impl Rgb {
    /// Parse a `#rrggbb` string (leading `#` optional). `None` on malformed input.
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Lowercase `#rrggbb` encoding.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel mean of two colors, rounding halves up.
    pub fn average(a: Self, b: Self) -> Self {
        let mid = |x: u8, y: u8| ((x as u16 + y as u16 + 1) / 2) as u8;
        Self {
            r: mid(a.r, b.r),
            g: mid(a.g, b.g),
            b: mid(a.b, b.b),
        }
    }

    /// Perceptual luminance in 0..=255 (ITU-R 601 weights).
    #[inline]
    pub fn luminance(self) -> u32 {
        (299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32) / 1000
    }

    /// Text color that stays readable on this background.
    pub fn contrast_text(self) -> Self {
        if self.luminance() >= 128 {
            NEAR_BLACK
        } else {
            WHITE
        }
    }

    #[inline]
    pub fn to_bevy(self) -> Color {
        Color::srgb_u8(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(swatch("Red"), swatch("red"));
        assert_eq!(swatch("BLUE"), swatch("Blue"));
    }

    #[test]
    fn unmapped_names_use_fallback() {
        assert_eq!(swatch("Chartreuse"), FALLBACK_SWATCH);
        assert_eq!(swatch(""), FALLBACK_SWATCH);
    }

    #[test]
    fn hex_round_trip_is_lowercase() {
        let c = Rgb::parse("#E53935").expect("valid hex");
        assert_eq!(c, Rgb { r: 0xe5, g: 0x39, b: 0x35 });
        assert_eq!(c.to_hex(), "#e53935");
        assert_eq!(Rgb::parse(&c.to_hex()), Some(c));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(Rgb::parse("#fff"), None);
        assert_eq!(Rgb::parse("not-a-color"), None);
        assert_eq!(Rgb::parse("#ggv142"), None);
    }

    #[test]
    fn average_rounds_halves_up() {
        let a = Rgb { r: 0, g: 10, b: 255 };
        let b = Rgb { r: 1, g: 10, b: 0 };
        let avg = Rgb::average(a, b);
        assert_eq!(avg, Rgb { r: 1, g: 10, b: 128 });
    }

    #[test]
    fn averaging_a_color_with_itself_is_identity() {
        let c = swatch("Orange");
        assert_eq!(Rgb::average(c, c), c);
    }

    #[test]
    fn contrast_flips_at_mid_luminance() {
        assert_eq!(swatch("White").contrast_text(), NEAR_BLACK);
        assert_eq!(swatch("Black").contrast_text(), WHITE);
        assert_eq!(swatch("Yellow").contrast_text(), NEAR_BLACK);
        assert_eq!(swatch("Blue").contrast_text(), WHITE);
    }
}
