use crate::foundation::error::{MandalaError, MandalaResult};

/// Accepted complexity range; values outside are clamped.
pub const COMPLEXITY_RANGE: (u32, u32) = (1, 10);
/// Accepted rotational symmetry orders; values outside are clamped.
pub const SYMMETRY_RANGE: (u32, u32) = (4, 36);
/// Accepted output edge lengths in pixels; values outside are rejected.
pub const SIZE_PX_RANGE: (u32, u32) = (16, 8192);

/// Numeric parameters that, together with a [`Theme`](crate::Theme), fully determine a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RenderRequest {
    pub seed: u64,
    /// Detail level, `1..=10`.
    pub complexity: u32,
    /// Rotational symmetry order, `4..=36`.
    pub symmetry: u32,
    /// Output edge length in pixels.
    pub size_px: u32,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            seed: 0,
            complexity: 6,
            symmetry: 12,
            size_px: 1024,
        }
    }
}

impl RenderRequest {
    /// Default parameters with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_complexity(mut self, complexity: u32) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_symmetry(mut self, symmetry: u32) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn with_size_px(mut self, size_px: u32) -> Self {
        self.size_px = size_px;
        self
    }

    /// Clamp complexity and symmetry into range and reject unusable output sizes.
    pub fn normalized(self) -> MandalaResult<Self> {
        let (lo, hi) = SIZE_PX_RANGE;
        if !(lo..=hi).contains(&self.size_px) {
            return Err(MandalaError::validation(format!(
                "size_px must be in {lo}..={hi}, got {}",
                self.size_px
            )));
        }
        Ok(Self {
            seed: self.seed,
            complexity: self
                .complexity
                .clamp(COMPLEXITY_RANGE.0, COMPLEXITY_RANGE.1),
            symmetry: self.symmetry.clamp(SYMMETRY_RANGE.0, SYMMETRY_RANGE.1),
            size_px: self.size_px,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/params.rs"]
mod tests;
