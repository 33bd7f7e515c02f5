use crate::color::hex::HexColor;
use crate::foundation::core::Affine;
use crate::foundation::error::MandalaResult;
use crate::foundation::math::Rng64;
use crate::geometry::radial::theta_samples;
use crate::layers::center::vignette;
use crate::layers::kind::{LayerCtx, LayerKind};
use crate::layers::shape::Shape;
use crate::render::params::RenderRequest;
use crate::theme::model::Theme;

/// Angle samples per closed radial curve.
pub const CURVE_SAMPLES: usize = 1800;

/// Half-width of the square view onto the unit disc.
pub const VIEW_EXTENT: f64 = 1.05;

/// A composed mandala: background plus shapes in compositing order.
#[derive(Clone, Debug)]
pub struct Scene {
    pub word: String,
    pub background: HexColor,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Generate every layer for `theme` and `request`.
    ///
    /// The theme is validated and the request normalized first. One generator is seeded from
    /// `request.seed` and consumed by the layer families in [`LayerKind::DRAW_ORDER`]; the shapes
    /// are then stably sorted by their z tag.
    pub fn compose(theme: &Theme, request: &RenderRequest) -> MandalaResult<Self> {
        theme.validate()?;
        let request = request.normalized()?;

        let palette = theme.palette();
        let thetas = theta_samples(CURVE_SAMPLES);
        let ctx = LayerCtx {
            palette,
            accent: theme.accent(),
            complexity: request.complexity,
            symmetry: request.symmetry,
            thetas: &thetas,
        };

        let mut rng = Rng64::new(request.seed);
        let mut shapes = vignette(theme.background(), palette);
        for kind in LayerKind::DRAW_ORDER {
            kind.generate(&ctx, &mut rng, &mut shapes);
        }
        shapes.sort_by_key(|s| s.z);

        Ok(Self {
            word: theme.word().to_owned(),
            background: theme.background(),
            shapes,
        })
    }

    /// Largest radius reached by any shape, in unit-disc units.
    pub fn outer_radius(&self) -> f64 {
        self.shapes.iter().map(Shape::extent).fold(0.0, f64::max)
    }
}

/// Map unit-disc coordinates (y up, view `[-VIEW_EXTENT, VIEW_EXTENT]`) to pixels (y down).
pub fn view_transform(size_px: u32) -> Affine {
    let half = f64::from(size_px) / 2.0;
    let scale = half / VIEW_EXTENT;
    Affine::new([scale, 0.0, 0.0, -scale, half, half])
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
