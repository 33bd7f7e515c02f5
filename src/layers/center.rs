use std::f64::consts::TAU;

use crate::color::hex::HexColor;
use crate::foundation::core::{Circle, Point};
use crate::foundation::math::Rng64;
use crate::geometry::radial::polar;
use crate::layers::kind::LayerCtx;
use crate::layers::shape::{Paint, Shape, StrokePaint, ZOrder};

pub fn sparkle_count(complexity: u32) -> usize {
    (48 + 10 * complexity) as usize
}

/// Background-colored halo plus two faint tints that soften the disc edge.
pub fn vignette(background: HexColor, palette: &[HexColor]) -> Vec<Shape> {
    let mut out = vec![
        Shape::circle(ZOrder::HALO, Circle::new(Point::ORIGIN, 1.06))
            .with_fill(Paint::new(background, 1.0)),
    ];
    if let (Some(&first), Some(&last)) = (palette.first(), palette.last()) {
        out.push(
            Shape::circle(ZOrder::TINT, Circle::new(Point::ORIGIN, 1.04))
                .with_fill(Paint::new(last, 0.06)),
        );
        out.push(
            Shape::circle(ZOrder::TINT, Circle::new(Point::ORIGIN, 0.98))
                .with_fill(Paint::new(first, 0.03)),
        );
    }
    out
}

/// Two concentric discs at the origin.
pub fn jewel(ctx: &LayerCtx<'_>, out: &mut Vec<Shape>) {
    out.push(
        Shape::circle(ZOrder::JEWEL, Circle::new(Point::ORIGIN, 0.10))
            .with_fill(Paint::new(ctx.accent, 0.55))
            .with_stroke(StrokePaint::pt(ctx.first(), 0.9, 1.3)),
    );
    out.push(
        Shape::circle(ZOrder::JEWEL_CORE, Circle::new(Point::ORIGIN, 0.045))
            .with_fill(Paint::new(ctx.last(), 0.85))
            .with_stroke(StrokePaint::pt(HexColor::WHITE, 0.35, 0.8)),
    );
}

/// Tiny dots scattered close to the center. Draws angle, radius and size per dot.
pub fn sparkles(ctx: &LayerCtx<'_>, rng: &mut Rng64, out: &mut Vec<Shape>) {
    for i in 0..sparkle_count(ctx.complexity) {
        let ang = rng.next_f64_01() * TAU;
        let rr = 0.02 + rng.next_f64_01() * 0.16;
        let size = 0.0015 + 0.0018 * rng.next_f64_01();
        out.push(
            Shape::circle(ZOrder::SPARKLES, Circle::new(polar(rr, ang), size))
                .with_fill(Paint::new(ctx.color(i), 0.85)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/center.rs"]
mod tests;
