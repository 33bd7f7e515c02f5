/// Convenience result type used across the crate.
pub type MandalaResult<T> = Result<T, MandalaError>;

/// Top-level error taxonomy used by the renderer and theme APIs.
#[derive(thiserror::Error, Debug)]
pub enum MandalaError {
    /// A [`Theme`](crate::Theme) that bypassed normalization and violates its invariants.
    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    /// Invalid caller-provided render parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster or vector encoding failed; no partial output is returned.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Errors when parsing or producing JSON payloads.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MandalaError {
    /// Build a [`MandalaError::InvalidTheme`] value.
    pub fn invalid_theme(msg: impl Into<String>) -> Self {
        Self::InvalidTheme(msg.into())
    }

    /// Build a [`MandalaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MandalaError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`MandalaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
