use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{Circle, Point};
use crate::foundation::math::Rng64;
use crate::geometry::curve::smooth_closed_path;
use crate::geometry::radial::{Harmonic, RadialWave};
use crate::layers::kind::LayerCtx;
use crate::layers::shape::{Shape, StrokePaint, ZOrder};

pub fn ring_count(complexity: u32) -> usize {
    (22 + 4 * complexity) as usize
}

pub fn filigree_count(complexity: u32) -> usize {
    (6 + complexity) as usize
}

/// Thin engraved circles, evenly spaced from r=0.10 to r=0.98, thinning outwards.
pub fn rings(ctx: &LayerCtx<'_>, out: &mut Vec<Shape>) {
    let count = ring_count(ctx.complexity);
    for i in 0..count {
        let t = i as f64 / (count - 1) as f64;
        let radius = 0.10 + t * 0.88;
        let width_pt = 0.25 + 0.45 * (1.0 - i as f64 / count as f64);
        out.push(
            Shape::circle(ZOrder::RINGS, Circle::new(Point::ORIGIN, radius))
                .with_stroke(StrokePaint::pt(ctx.color(i * 2), 0.14, width_pt)),
        );
    }
}

/// Radial profile of filigree outline `i` of `sets`: a single cosine lobe pattern.
///
/// Draws, in order: frequency multiplier in `1..6`, one phase.
pub fn filigree_wave(i: usize, sets: usize, symmetry: u32, rng: &mut Rng64) -> RadialWave {
    let frac = i as f64 / (sets.max(2) - 1) as f64;
    let base = 0.18 + frac * 0.78;
    let amp = 0.012 + (1.0 - frac) * 0.055;
    let m = symmetry * rng.next_range(1, 6);
    let phase = rng.next_f64_01() * TAU;

    RadialWave {
        base,
        amp,
        // cos(x) == sin(x + pi/2)
        harmonics: vec![Harmonic {
            weight: 1.0,
            freq: m,
            phase: phase + FRAC_PI_2,
        }],
        clamp: None,
    }
}

/// Stroked-only wavy outlines laid over the rosettes.
pub fn filigree(ctx: &LayerCtx<'_>, rng: &mut Rng64, out: &mut Vec<Shape>) {
    let sets = filigree_count(ctx.complexity);
    for i in 0..sets {
        let wave = filigree_wave(i, sets, ctx.symmetry, rng);
        let path = smooth_closed_path(&wave.outline(ctx.thetas));
        out.push(
            Shape::path(ZOrder::FILIGREE, path)
                .with_stroke(StrokePaint::pt(ctx.color(i + 1), 0.22, 0.55)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/linework.rs"]
mod tests;
