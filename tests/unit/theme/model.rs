use super::*;
use serde_json::json;

#[test]
fn fallback_theme_is_valid() {
    for word in ["Ocean", "", "Diwali", "  spaced out  "] {
        Theme::fallback(word).validate().unwrap();
    }
}

#[test]
fn json_shape_matches_theme_dict() {
    let theme = Theme::fallback("Ocean");
    let v = serde_json::to_value(&theme).unwrap();
    let obj = v.as_object().unwrap();
    for key in ["word", "palette", "background", "accent", "mood", "motifs"] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(v["word"], json!("Ocean"));
    assert_eq!(v["palette"].as_array().unwrap().len(), 7);

    let back: Theme = serde_json::from_value(v).unwrap();
    assert_eq!(back, theme);
}

#[test]
fn deserialized_theme_with_short_palette_is_invalid() {
    let theme: Theme = serde_json::from_value(json!({
        "word": "w",
        "palette": ["#FFFFFF"],
        "background": "#000000",
        "accent": "#FFFFFF",
        "mood": "calm",
        "motifs": ["petals"],
    }))
    .unwrap();
    let err = theme.validate().unwrap_err();
    assert!(matches!(err, MandalaError::InvalidTheme(_)));
}

#[test]
fn deserialized_theme_with_blank_fields_is_invalid() {
    let base = json!({
        "word": "w",
        "palette": ["#111111", "#222222", "#333333", "#444444", "#555555"],
        "background": "#000000",
        "accent": "#FFFFFF",
        "mood": "calm",
        "motifs": ["petals"],
    });
    let ok: Theme = serde_json::from_value(base.clone()).unwrap();
    ok.validate().unwrap();

    let mut blank_mood = base.clone();
    blank_mood["mood"] = json!("   ");
    let t: Theme = serde_json::from_value(blank_mood).unwrap();
    assert!(t.validate().is_err());

    let mut no_motifs = base;
    no_motifs["motifs"] = json!([]);
    let t: Theme = serde_json::from_value(no_motifs).unwrap();
    assert!(t.validate().is_err());
}

#[test]
fn malformed_colors_do_not_deserialize() {
    let res = serde_json::from_value::<Theme>(json!({
        "word": "w",
        "palette": ["#111111", "#222222", "#333333", "#444444", "pink"],
        "background": "#000000",
        "accent": "#FFFFFF",
        "mood": "calm",
        "motifs": ["petals"],
    }));
    assert!(res.is_err());
}

#[test]
fn file_name_lowercases_and_underscores() {
    assert_eq!(Theme::fallback("Ocean").file_name("png"), "mandala_ocean.png");
    assert_eq!(
        Theme::fallback(" Golden Hour ").file_name("svg"),
        "mandala_golden_hour.svg"
    );
    assert_eq!(Theme::fallback("").file_name("png"), "mandala.png");
}
