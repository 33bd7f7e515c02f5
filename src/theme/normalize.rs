use serde_json::Value;

use crate::color::hex::{HexColor, normalize_color};
use crate::color::palette::{choose_contrasting_background, fallback_palette};
use crate::theme::model::{
    MAX_MOOD_CHARS, MAX_MOTIF_CHARS, MAX_MOTIFS, MAX_PALETTE, MIN_PALETTE, Theme,
};

/// Palette length generated when an external palette is unusable.
pub const FALLBACK_PALETTE_LEN: usize = 7;
/// Mood used when the payload has none.
pub const DEFAULT_MOOD: &str = "themed";
/// Motifs used when the payload has none.
pub const DEFAULT_MOTIFS: [&str; 3] = ["petals", "rings", "dots"];

/// Build a [`Theme`] from an untrusted payload.
///
/// Total: any missing, mistyped or malformed field is replaced by its deterministic default, and
/// a payload that is not a JSON object is treated as empty. The first ten palette entries are
/// kept, each malformed one replaced by white; fewer than five entries means the palette is
/// replaced by [`fallback_palette`]. Only the first eight motif entries are considered.
pub fn normalize_theme(word: &str, payload: &Value) -> Theme {
    let field = |key: &str| payload.as_object().and_then(|obj| obj.get(key));

    let mut palette: Vec<HexColor> = field("palette")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .take(MAX_PALETTE)
                .map(|v| {
                    v.as_str()
                        .map_or(HexColor::WHITE, |s| normalize_color(s, HexColor::WHITE))
                })
                .collect()
        })
        .unwrap_or_default();
    if palette.len() < MIN_PALETTE {
        palette = fallback_palette(word, FALLBACK_PALETTE_LEN);
    }

    let color_field = |key: &str, default: HexColor| {
        field(key)
            .and_then(Value::as_str)
            .map(|s| normalize_color(s, default))
            .unwrap_or(default)
    };
    let background = color_field("background", choose_contrasting_background(&palette));
    let accent = color_field("accent", palette[0]);

    let mood = field("mood")
        .and_then(Value::as_str)
        .map(|s| truncate_chars(s.trim(), MAX_MOOD_CHARS))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_MOOD.to_owned());

    let mut motifs: Vec<String> = field("motifs")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .take(MAX_MOTIFS)
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| truncate_chars(s, MAX_MOTIF_CHARS))
                .collect()
        })
        .unwrap_or_default();
    if motifs.is_empty() {
        motifs = DEFAULT_MOTIFS.iter().map(|s| (*s).to_owned()).collect();
    }

    Theme::from_parts(
        word.trim().to_owned(),
        palette,
        background,
        accent,
        mood,
        motifs,
    )
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/theme/normalize.rs"]
mod tests;
