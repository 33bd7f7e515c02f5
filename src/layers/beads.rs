use std::f64::consts::TAU;

use crate::foundation::core::Circle;
use crate::foundation::math::Rng64;
use crate::geometry::radial::polar;
use crate::layers::kind::LayerCtx;
use crate::layers::shape::{Paint, Shape, StrokePaint, ZOrder};

/// Bounds on the number of beads in one ring.
pub const BEADS_PER_RING: (u32, u32) = (40, 420);
/// Peak-to-peak radial jitter applied to every bead.
pub const BEAD_JITTER: f64 = 0.0022;

pub fn bead_ring_count(complexity: u32) -> usize {
    (7 + complexity) as usize
}

/// Beads on ring `i`: `symmetry * (5 + 1.5 i)`, truncated and clamped to [`BEADS_PER_RING`].
pub fn beads_in_ring(symmetry: u32, i: usize) -> u32 {
    let n = (f64::from(symmetry) * (5.0 + i as f64 * 1.5)) as u32;
    n.clamp(BEADS_PER_RING.0, BEADS_PER_RING.1)
}

/// Concentric chains of small filled circles. Draws one jitter value per bead, in ring order.
pub fn beads(ctx: &LayerCtx<'_>, rng: &mut Rng64, out: &mut Vec<Shape>) {
    let rings = bead_ring_count(ctx.complexity);
    for i in 0..rings {
        let ring_r = 0.16 + (i as f64 / (rings - 1) as f64) * 0.78;
        let n = beads_in_ring(ctx.symmetry, i);
        let bead_r = 0.0028 + 0.0038 * (1.0 - i as f64 / rings as f64);

        for j in 0..n as usize {
            let ang = (j as f64 / f64::from(n)) * TAU;
            let jitter = (rng.next_f64_01() - 0.5) * BEAD_JITTER;
            let center = polar(ring_r + jitter, ang);
            out.push(
                Shape::circle(ZOrder::BEADS, Circle::new(center, bead_r))
                    .with_fill(Paint::new(ctx.color(i + j), 0.78))
                    .with_stroke(StrokePaint::pt(ctx.accent, 0.14, 0.18)),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/beads.rs"]
mod tests;
