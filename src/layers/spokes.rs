use std::f64::consts::TAU;

use crate::foundation::core::BezPath;
use crate::geometry::curve::smooth_closed_path;
use crate::geometry::radial::polar;
use crate::layers::kind::LayerCtx;
use crate::layers::shape::{Paint, Shape, StrokePaint, ZOrder};

/// Bounds on the number of petals in one concentric set.
pub const PETALS_PER_SET: (u32, u32) = (12, 120);

pub fn spoke_set_count(complexity: u32) -> usize {
    (3 + complexity / 2) as usize
}

/// Petals in set `s`: the symmetry order times `1 + s/2`, clamped to [`PETALS_PER_SET`].
pub fn petals_in_set(symmetry: u32, s: u32) -> u32 {
    (symmetry * (1 + s / 2)).clamp(PETALS_PER_SET.0, PETALS_PER_SET.1)
}

/// Triangular petal centered on angle `ang` with its base at `rad + 0.06`.
pub fn petal(ang: f64, rad: f64, half_width: f64, symmetry: u32) -> BezPath {
    let flare = 0.24 + 0.10 * (f64::from(symmetry) * ang).sin();
    let base_r = rad + 0.06;
    let left = polar(base_r, ang - half_width);
    let tip = polar(rad + flare, ang);
    let right = polar(base_r, ang + half_width);
    smooth_closed_path(&[left, tip, right])
}

/// Concentric sets of petals with a scalloped silhouette. Uses no randomness.
pub fn spokes(ctx: &LayerCtx<'_>, out: &mut Vec<Shape>) {
    let sets = spoke_set_count(ctx.complexity);
    for s in 0..sets {
        let n = petals_in_set(ctx.symmetry, s as u32);
        let rad = 0.16 + 0.14 * s as f64;
        let half_width = 0.10 - 0.010 * s as f64;
        let alpha = 0.10 + 0.06 * (s % 2) as f64;

        for j in 0..n as usize {
            let ang = (j as f64 / f64::from(n)) * TAU;
            out.push(
                Shape::path(ZOrder::SPOKES, petal(ang, rad, half_width, ctx.symmetry))
                    .with_fill(Paint::new(ctx.color(j + 2 * s), alpha))
                    .with_stroke(StrokePaint::pt(ctx.accent, 0.12, 0.35)),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/spokes.rs"]
mod tests;
