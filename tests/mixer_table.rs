use rainbow_learners::core::mixer::{combination_table, mix};
use rainbow_learners::core::palette::swatch;

#[test]
fn red_plus_blue_makes_purple() {
    let result = mix("Red", "Blue");
    // channel-rounded average of #e53935 and #1e88e5
    assert_eq!(result.hex, "#82618d");
    assert_eq!(result.name, "Purple");
    assert_eq!(result.audio, Some("audio/purple.ogg"));
}

#[test]
fn self_mix_returns_the_unmodified_swatch() {
    for name in ["Red", "Green", "Blue", "Yellow", "Orange", "Black", "White"] {
        let result = mix(name, name);
        assert_eq!(result.hex, swatch(name).to_hex(), "swatch drift for {name}");
        assert_eq!(result.name, name, "identity entry missing for {name}");
    }
}

#[test]
fn every_authored_pair_is_commutative() {
    for combination in combination_table() {
        let ab = mix(combination.first, combination.second);
        let ba = mix(combination.second, combination.first);
        assert_eq!(
            ab.name, ba.name,
            "combination {}+{} resolves asymmetrically",
            combination.first, combination.second
        );
        assert_eq!(ab.audio, ba.audio);
        assert_eq!(ab.hex, ba.hex);
    }
}

#[test]
fn pair_names_reference_known_swatches() {
    for combination in combination_table() {
        for name in [combination.first, combination.second] {
            assert_ne!(
                swatch(name),
                swatch("no-such-color"),
                "combination references unmapped color {name}"
            );
        }
        assert!(
            combination.audio.starts_with("audio/") && combination.audio.ends_with(".ogg"),
            "unexpected audio path {}",
            combination.audio
        );
    }
}

#[test]
fn unknown_pairs_synthesize_a_name_without_audio() {
    let result = mix("Green", "Black");
    assert_eq!(result.name, "Green + Black");
    assert!(result.audio.is_none());
}
