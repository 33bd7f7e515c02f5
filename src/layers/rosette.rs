use std::f64::consts::TAU;

use crate::foundation::math::Rng64;
use crate::geometry::curve::smooth_closed_path;
use crate::geometry::radial::{Harmonic, RadialWave};
use crate::layers::kind::LayerCtx;
use crate::layers::shape::{Paint, Shape, StrokePaint, ZOrder};

/// Radius band that keeps rosette outlines from folding over the origin or blowing up.
pub const ROSETTE_CLAMP: (f64, f64) = (0.03, 1.20);

pub fn rosette_count(complexity: u32) -> usize {
    (10 + 2 * complexity) as usize
}

/// Radial profile of rosette layer `li` of `layers`.
///
/// Draws, in order: amplitude jitter, frequency multiplier in `1..5`, two phases.
pub fn rosette_wave(li: usize, layers: usize, symmetry: u32, rng: &mut Rng64) -> RadialWave {
    let frac = li as f64 / (layers.max(2) - 1) as f64;
    let base = 0.18 + frac * 0.80;
    let amp = (0.015 + (1.0 - frac) * 0.06) * (0.85 + 0.25 * rng.next_f64_01());

    let k = symmetry * rng.next_range(1, 5);
    let p1 = rng.next_f64_01() * TAU;
    let p2 = rng.next_f64_01() * TAU;

    RadialWave {
        base,
        amp,
        harmonics: vec![
            Harmonic {
                weight: 0.65,
                freq: k,
                phase: p1,
            },
            Harmonic {
                weight: 0.35,
                freq: 2 * k,
                phase: p2,
            },
        ],
        clamp: Some(ROSETTE_CLAMP),
    }
}

/// Filled, softly outlined rosettes from the center outwards; deeper layers are more opaque.
pub fn rosettes(ctx: &LayerCtx<'_>, rng: &mut Rng64, out: &mut Vec<Shape>) {
    let layers = rosette_count(ctx.complexity);
    for li in 0..layers {
        let frac = li as f64 / (layers - 1) as f64;
        let wave = rosette_wave(li, layers, ctx.symmetry, rng);
        let path = smooth_closed_path(&wave.outline(ctx.thetas));

        let alpha_fill = 0.06 + 0.09 * (1.0 - frac);
        let alpha_edge = 0.10 + 0.10 * (0.5 - (frac - 0.5).abs());
        let width_pt = if frac < 0.75 { 0.6 } else { 0.5 };

        out.push(
            Shape::path(ZOrder::ROSETTE, path)
                .with_fill(Paint::new(ctx.color(li), alpha_fill))
                .with_stroke(StrokePaint::pt(ctx.color(li + 2), alpha_edge, width_pt)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/rosette.rs"]
mod tests;
