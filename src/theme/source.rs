use std::path::PathBuf;

use anyhow::Context as _;
use serde_json::Value;

use crate::foundation::error::{MandalaError, MandalaResult};
use crate::theme::model::Theme;
use crate::theme::normalize::normalize_theme;

/// Word used when the caller supplies only whitespace.
pub const DEFAULT_WORD: &str = "mandala";

/// System prompt a language-model producer sends with every request.
pub const THEME_SYSTEM_PROMPT: &str = "You generate concise theme specs for mandala art.\n\
Return ONLY valid JSON (no markdown, no commentary).\n";

/// User prompt asking a language model for the theme of `word`.
pub fn theme_user_prompt(word: &str) -> String {
    format!(
        "Create a mandala theme for the word: \"{word}\"\n\
         \n\
         Rules:\n\
         - Return JSON with keys: palette, background, accent, mood, motifs\n\
         - palette: 6-8 hex colors like \"#A1B2C3\"\n\
         - background: one hex color\n\
         - accent: one hex color (should be in palette if possible)\n\
         - mood: 2-6 words\n\
         - motifs: 3-6 short motif words (e.g. \"petals\", \"waves\", \"stars\", \"vines\")\n"
    )
}

/// Source of raw theme text for a word (typically a language-model response).
///
/// Producers may fail freely; [`get_theme`] converts every failure into the fallback theme.
pub trait ThemeProducer {
    /// Return the raw text describing the theme for `word`.
    fn produce(&self, word: &str) -> anyhow::Result<String>;
}

impl<F> ThemeProducer for F
where
    F: Fn(&str) -> anyhow::Result<String>,
{
    fn produce(&self, word: &str) -> anyhow::Result<String> {
        self(word)
    }
}

/// Producer that always answers with the same text.
#[derive(Clone, Debug)]
pub struct StaticResponse(pub String);

impl ThemeProducer for StaticResponse {
    fn produce(&self, _word: &str) -> anyhow::Result<String> {
        Ok(self.0.clone())
    }
}

/// Producer that reads its answer from a file (for example a saved model response).
#[derive(Clone, Debug)]
pub struct FileResponse(pub PathBuf);

impl ThemeProducer for FileResponse {
    fn produce(&self, _word: &str) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.0)
            .with_context(|| format!("read theme response '{}'", self.0.display()))
    }
}

/// Parse a JSON object out of model output.
///
/// The whole trimmed text is tried first; otherwise the span from the first `{` to the last `}`
/// is parsed.
pub fn extract_json(text: &str) -> MandalaResult<Value> {
    let text = text.trim();
    if let Ok(v) = serde_json::from_str::<Value>(text) {
        return Ok(v);
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => serde_json::from_str(&text[start..=end])
            .map_err(|e| MandalaError::serde(format!("embedded JSON block: {e}"))),
        _ => Err(MandalaError::serde("could not find JSON in model output")),
    }
}

/// Acquire a theme for `word`, falling back deterministically on any failure.
///
/// Never fails: without a producer, or when the producer errors or returns unparseable text, the
/// result is [`Theme::fallback`].
pub fn get_theme(word: &str, producer: Option<&dyn ThemeProducer>) -> Theme {
    let word = match word.trim() {
        "" => DEFAULT_WORD,
        w => w,
    };

    let Some(producer) = producer else {
        return Theme::fallback(word);
    };

    let payload = producer
        .produce(word)
        .map_err(MandalaError::from)
        .and_then(|text| extract_json(&text));

    match payload {
        Ok(payload) => normalize_theme(word, &payload),
        Err(err) => {
            tracing::warn!(word, error = %err, "theme acquisition failed; using fallback theme");
            Theme::fallback(word)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/source.rs"]
mod tests;
