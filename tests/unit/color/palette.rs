use super::*;

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

#[test]
fn hsl_primaries() {
    assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), hex("#FF0000"));
    assert_eq!(hsl_to_hex(1.0 / 3.0, 1.0, 0.5), hex("#00FF00"));
    assert_eq!(hsl_to_hex(0.5, 0.5, 0.25), hex("#1F5F5F"));
}

#[test]
fn hsl_wraps_hue_and_clamps_saturation() {
    // Hue 1.25 wraps to 0.25; saturation 2.0 clamps to 1.0; 127.5 truncates to 127.
    assert_eq!(hsl_to_hex(1.25, 2.0, 0.5), hex("#7FFF00"));
    assert_eq!(hsl_to_hex(-0.75, 1.0, 0.5), hsl_to_hex(0.25, 1.0, 0.5));
}

#[test]
fn hsl_grey_when_unsaturated() {
    assert_eq!(hsl_to_hex(0.3, 0.0, 0.5), hex("#7F7F7F"));
    assert_eq!(hsl_to_hex(0.3, 0.0, 1.0), HexColor::WHITE);
}

#[test]
fn fallback_palette_is_pinned_for_ocean() {
    let expected = [
        "#13CD28", "#9D38EE", "#45B332", "#D73CC2", "#D34E4A", "#E09E0F", "#4D96E4",
    ]
    .map(hex);
    assert_eq!(fallback_palette("Ocean", 7), expected);
}

#[test]
fn fallback_palette_has_requested_length() {
    for word in ["", "  ", "Serenity", "Diwali", "लोटस", "a much longer phrase"] {
        assert_eq!(fallback_palette(word, 7).len(), 7);
        assert_eq!(fallback_palette(word, 3).len(), 3);
    }
    assert!(fallback_palette("x", 0).is_empty());
}

#[test]
fn fallback_palette_is_deterministic_and_word_sensitive() {
    assert_eq!(fallback_palette("Lotus", 7), fallback_palette("Lotus", 7));
    assert_ne!(fallback_palette("Lotus", 7), fallback_palette("Lotos", 7));
}

#[test]
fn background_contrasts_with_palette_brightness() {
    assert_eq!(choose_contrasting_background(&[]), DARK_BACKGROUND);
    assert_eq!(
        choose_contrasting_background(&[HexColor::WHITE, hex("#EEEEEE")]),
        DARK_BACKGROUND
    );
    assert_eq!(
        choose_contrasting_background(&[hex("#101010"), hex("#203040")]),
        LIGHT_BACKGROUND
    );
    assert_eq!(
        choose_contrasting_background(&fallback_palette("Ocean", 7)),
        LIGHT_BACKGROUND
    );
}
