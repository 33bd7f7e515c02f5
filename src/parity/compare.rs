use serde::Serialize;

use crate::color::hex::HexColor;
use crate::foundation::error::{MandalaError, MandalaResult};
use crate::foundation::math::unpremultiply_in_place;
use crate::render::cpu::RasterFrame;
use crate::render::pipeline::RenderResult;

/// Per-channel difference above which a pixel counts as drawn.
pub const DEFAULT_VISIBILITY_THRESHOLD: u8 = 2;

/// Raster/vector agreement measured on one [`RenderResult`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParityReport {
    /// Mean absolute RGB difference between the PNG and the rasterized SVG (0..=255).
    pub mean_abs_diff: f64,
    pub raster_radius_px: f64,
    pub vector_radius_px: f64,
}

impl ParityReport {
    pub fn radius_delta_px(&self) -> f64 {
        (self.raster_radius_px - self.vector_radius_px).abs()
    }
}

/// Rasterize an SVG document onto a `size_px` square.
pub fn rasterize_svg(svg: &[u8], size_px: u32) -> MandalaResult<RasterFrame> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default())
        .map_err(|e| MandalaError::encoding(format!("parse svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size_px, size_px)
        .ok_or_else(|| MandalaError::validation("failed to allocate svg pixmap"))?;
    let sx = (size_px as f32) / tree.size().width();
    let sy = (size_px as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.data().to_vec();
    unpremultiply_in_place(&mut data);
    Ok(RasterFrame {
        width: size_px,
        height: size_px,
        data,
    })
}

/// Decode PNG bytes into straight RGBA.
pub fn decode_png(bytes: &[u8]) -> MandalaResult<RasterFrame> {
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| MandalaError::encoding(format!("decode png: {e}")))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(RasterFrame {
        width,
        height,
        data: img.into_raw(),
    })
}

/// Distance from the canvas center to the outermost drawn pixel on the horizontal center line.
///
/// A pixel is drawn when any RGB channel differs from `background` by more than `threshold`.
/// Returns `0.0` when the center line is plain background.
pub fn visible_disc_radius(frame: &RasterFrame, background: HexColor, threshold: u8) -> f64 {
    let bg = background.rgb();
    let width = frame.width as usize;
    let row = (frame.height / 2) as usize;
    let half = f64::from(frame.width) / 2.0;

    let Some(line) = frame.data.get(row * width * 4..(row + 1) * width * 4) else {
        return 0.0;
    };
    line.chunks_exact(4)
        .enumerate()
        .filter(|(_, px)| {
            px[..3]
                .iter()
                .zip(bg)
                .any(|(&c, b)| c.abs_diff(b) > threshold)
        })
        .map(|(x, _)| (x as f64 + 0.5 - half).abs())
        .fold(0.0, f64::max)
}

/// Compare the raster and vector halves of `result`.
///
/// Fails when the result carries no SVG.
pub fn compare(result: &RenderResult, background: HexColor) -> MandalaResult<ParityReport> {
    let svg = result
        .svg
        .as_deref()
        .ok_or_else(|| MandalaError::validation("render result has no vector output"))?;

    let raster = decode_png(&result.png)?;
    if raster.width != raster.height {
        return Err(MandalaError::validation("raster output is not square"));
    }
    let vector = rasterize_svg(svg, raster.width)?;

    Ok(ParityReport {
        mean_abs_diff: mean_abs_diff(&raster, &vector),
        raster_radius_px: visible_disc_radius(&raster, background, DEFAULT_VISIBILITY_THRESHOLD),
        vector_radius_px: visible_disc_radius(&vector, background, DEFAULT_VISIBILITY_THRESHOLD),
    })
}

fn mean_abs_diff(a: &RasterFrame, b: &RasterFrame) -> f64 {
    let (sum, count) = a
        .data
        .chunks_exact(4)
        .zip(b.data.chunks_exact(4))
        .flat_map(|(p, q)| p[..3].iter().zip(&q[..3]))
        .fold((0u64, 0u64), |(sum, count), (&x, &y)| {
            (sum + u64::from(x.abs_diff(y)), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parity/compare.rs"]
mod tests;
