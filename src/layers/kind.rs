use crate::color::hex::HexColor;
use crate::foundation::math::Rng64;
use crate::layers::shape::{Shape, ZOrder};
use crate::layers::{beads, center, linework, rosette, spokes};

/// Read-only inputs shared by every layer generator of one render.
#[derive(Clone, Copy, Debug)]
pub struct LayerCtx<'a> {
    pub palette: &'a [HexColor],
    pub accent: HexColor,
    pub complexity: u32,
    pub symmetry: u32,
    /// Angle samples for closed radial curves.
    pub thetas: &'a [f64],
}

impl LayerCtx<'_> {
    /// Palette entry `i`, wrapping around the palette.
    pub fn color(&self, i: usize) -> HexColor {
        self.palette[i % self.palette.len()]
    }

    pub fn first(&self) -> HexColor {
        self.palette[0]
    }

    pub fn last(&self) -> HexColor {
        self.palette[self.palette.len() - 1]
    }
}

/// Layer families, each with its own generator and compositing tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Rosette,
    Rings,
    Filigree,
    Spokes,
    Beads,
    Jewel,
    Sparkles,
}

impl LayerKind {
    /// Order in which generators consume the shared random stream.
    ///
    /// This is independent of [`LayerKind::z`]; reordering it changes the output for a seed.
    pub const DRAW_ORDER: [Self; 7] = [
        Self::Rosette,
        Self::Rings,
        Self::Filigree,
        Self::Spokes,
        Self::Beads,
        Self::Jewel,
        Self::Sparkles,
    ];

    /// Base compositing tag of the family.
    pub fn z(self) -> ZOrder {
        match self {
            Self::Rosette => ZOrder::ROSETTE,
            Self::Rings => ZOrder::RINGS,
            Self::Filigree => ZOrder::FILIGREE,
            Self::Spokes => ZOrder::SPOKES,
            Self::Beads => ZOrder::BEADS,
            Self::Jewel => ZOrder::JEWEL,
            Self::Sparkles => ZOrder::SPARKLES,
        }
    }

    /// Append this family's shapes to `out`, drawing from `rng` as needed.
    pub fn generate(self, ctx: &LayerCtx<'_>, rng: &mut Rng64, out: &mut Vec<Shape>) {
        match self {
            Self::Rosette => rosette::rosettes(ctx, rng, out),
            Self::Rings => linework::rings(ctx, out),
            Self::Filigree => linework::filigree(ctx, rng, out),
            Self::Spokes => spokes::spokes(ctx, out),
            Self::Beads => beads::beads(ctx, rng, out),
            Self::Jewel => center::jewel(ctx, out),
            Self::Sparkles => center::sparkles(ctx, rng, out),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/kind.rs"]
mod tests;
