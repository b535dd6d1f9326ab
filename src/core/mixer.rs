//! Color mixing: average two swatches channel-wise and resolve the official
//! mixed-color name from a fixed combination table.
//!
//! The averaging step is a deliberate simplification for young learners, not
//! subtractive pigment mixing.

use super::palette::{self, Rgb};

/// Authored outcome for an unordered pair of English color names.
/// Both orders of the pair resolve to the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    pub first: &'static str,
    pub second: &'static str,
    /// Official name of the blended color.
    pub name: &'static str,
    /// Pronunciation clip for the blended color, relative to the asset root.
    pub audio: &'static str,
}

const fn combo(
    first: &'static str,
    second: &'static str,
    name: &'static str,
    audio: &'static str,
) -> Combination {
    Combination {
        first,
        second,
        name,
        audio,
    }
}

const COMBINATIONS: [Combination; 14] = [
    combo("Red", "Blue", "Purple", "audio/purple.ogg"),
    combo("Red", "Yellow", "Orange", "audio/orange.ogg"),
    combo("Blue", "Yellow", "Green", "audio/green.ogg"),
    combo("Red", "Green", "Brown", "audio/brown.ogg"),
    combo("Red", "White", "Pink", "audio/pink.ogg"),
    combo("Black", "White", "Gray", "audio/gray.ogg"),
    combo("Blue", "White", "Light Blue", "audio/light_blue.ogg"),
    // Mixing a color with itself keeps its name.
    combo("Red", "Red", "Red", "audio/red.ogg"),
    combo("Green", "Green", "Green", "audio/green.ogg"),
    combo("Blue", "Blue", "Blue", "audio/blue.ogg"),
    combo("Yellow", "Yellow", "Yellow", "audio/yellow.ogg"),
    combo("Orange", "Orange", "Orange", "audio/orange.ogg"),
    combo("Black", "Black", "Black", "audio/black.ogg"),
    combo("White", "White", "White", "audio/white.ogg"),
];

/// Full authored table, mainly for audits and tooling.
pub fn combination_table() -> &'static [Combination] {
    &COMBINATIONS
}

/// Result of mixing two picks. Recomputed on every request; nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct MixResult {
    pub rgb: Rgb,
    /// Lowercase `#rrggbb` of the blended swatch.
    pub hex: String,
    /// Official name from the table, or a synthesized `"A + B"`.
    pub name: String,
    /// Present only when the table supplied an authoritative entry.
    pub audio: Option<&'static str>,
}

/// Blend two colors given by English name.
///
/// Unknown names use the neutral fallback swatch; pairs missing from the
/// combination table synthesize a `"A + B"` name with no audio.
pub fn mix(a: &str, b: &str) -> MixResult {
    let blended = Rgb::average(palette::swatch(a), palette::swatch(b));
    match combination_for(a, b) {
        Some(c) => MixResult {
            rgb: blended,
            hex: blended.to_hex(),
            name: c.name.to_string(),
            audio: Some(c.audio),
        },
        None => MixResult {
            rgb: blended,
            hex: blended.to_hex(),
            name: format!("{a} + {b}"),
            audio: None,
        },
    }
}

/// Unordered, case-insensitive pair lookup.
fn combination_for(a: &str, b: &str) -> Option<&'static Combination> {
    COMBINATIONS.iter().find(|c| {
        (c.first.eq_ignore_ascii_case(a) && c.second.eq_ignore_ascii_case(b))
            || (c.first.eq_ignore_ascii_case(b) && c.second.eq_ignore_ascii_case(a))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_lookup_ignores_case_and_order() {
        let r = mix("red", "BLUE");
        assert_eq!(r.name, "Purple");
        assert_eq!(mix("Blue", "Red").name, "Purple");
    }

    #[test]
    fn self_mix_uses_the_identity_entry() {
        let r = mix("Green", "Green");
        assert_eq!(r.name, "Green");
        assert_eq!(r.audio, Some("audio/green.ogg"));
        assert_eq!(r.hex, palette::swatch("Green").to_hex());
    }

    #[test]
    fn unknown_names_blend_the_fallback_swatch() {
        let r = mix("Coral", "Red");
        assert_eq!(r.name, "Coral + Red");
        assert!(r.audio.is_none());
        // #424242 averaged with #e53935
        assert_eq!(r.hex, "#943e3c");
    }
}
