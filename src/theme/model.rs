use serde::{Deserialize, Serialize};

use crate::color::hex::HexColor;
use crate::foundation::error::{MandalaError, MandalaResult};

/// Minimum palette length a renderable theme carries.
pub const MIN_PALETTE: usize = 5;
/// Maximum palette length kept from an external payload.
pub const MAX_PALETTE: usize = 10;
/// Maximum number of motif labels.
pub const MAX_MOTIFS: usize = 8;
/// Maximum mood length, in characters.
pub const MAX_MOOD_CHARS: usize = 80;
/// Maximum length of one motif label, in characters.
pub const MAX_MOTIF_CHARS: usize = 40;

/// Color, mood and motif description that drives one render.
///
/// Built by [`normalize_theme`](crate::normalize_theme) and read-only afterwards. Deserializing a
/// `Theme` skips normalization; call [`Theme::validate`] (the renderer does) before trusting one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    word: String,
    palette: Vec<HexColor>,
    background: HexColor,
    accent: HexColor,
    mood: String,
    motifs: Vec<String>,
}

impl Theme {
    pub(crate) fn from_parts(
        word: String,
        palette: Vec<HexColor>,
        background: HexColor,
        accent: HexColor,
        mood: String,
        motifs: Vec<String>,
    ) -> Self {
        Self {
            word,
            palette,
            background,
            accent,
            mood,
            motifs,
        }
    }

    /// The fully deterministic theme used when no external payload exists.
    pub fn fallback(word: &str) -> Self {
        crate::theme::normalize::normalize_theme(word, &serde_json::Value::Null)
    }

    /// The originating word, trimmed.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Ordered palette; layer generators index it cyclically.
    pub fn palette(&self) -> &[HexColor] {
        &self.palette
    }

    /// Canvas background.
    pub fn background(&self) -> HexColor {
        self.background
    }

    /// Accent color used for outlines and the center jewel.
    pub fn accent(&self) -> HexColor {
        self.accent
    }

    /// Free-text mood.
    pub fn mood(&self) -> &str {
        &self.mood
    }

    /// Short motif labels.
    pub fn motifs(&self) -> &[String] {
        &self.motifs
    }

    /// Check the invariants normalization guarantees.
    pub fn validate(&self) -> MandalaResult<()> {
        let n = self.palette.len();
        if !(MIN_PALETTE..=MAX_PALETTE).contains(&n) {
            return Err(MandalaError::invalid_theme(format!(
                "palette must have {MIN_PALETTE}..={MAX_PALETTE} colors, got {n}"
            )));
        }
        if self.mood.trim().is_empty() {
            return Err(MandalaError::invalid_theme("mood must be non-empty"));
        }
        if self.mood.chars().count() > MAX_MOOD_CHARS {
            return Err(MandalaError::invalid_theme(format!(
                "mood exceeds {MAX_MOOD_CHARS} characters"
            )));
        }
        if self.motifs.is_empty() || self.motifs.len() > MAX_MOTIFS {
            return Err(MandalaError::invalid_theme(format!(
                "motifs must have 1..={MAX_MOTIFS} entries, got {}",
                self.motifs.len()
            )));
        }
        for m in &self.motifs {
            if m.trim().is_empty() || m.chars().count() > MAX_MOTIF_CHARS {
                return Err(MandalaError::invalid_theme(format!(
                    "motif \"{m}\" must be 1..={MAX_MOTIF_CHARS} non-blank characters"
                )));
            }
        }
        Ok(())
    }

    /// Suggested download name: `mandala_<word, lowercased, spaces to underscores>.<ext>`.
    pub fn file_name(&self, ext: &str) -> String {
        let stem = self.word.trim().to_lowercase().replace(' ', "_");
        if stem.is_empty() {
            format!("mandala.{ext}")
        } else {
            format!("mandala_{stem}.{ext}")
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/model.rs"]
mod tests;
