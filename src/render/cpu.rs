use std::io::Cursor;

use crate::foundation::core::{Affine, BezPath, PathEl, Point};
use crate::foundation::error::{MandalaError, MandalaResult};
use crate::foundation::math::alpha_to_u8;
use crate::layers::shape::{Geometry, Paint, Shape};
use crate::render::scene::{Scene, view_transform};

/// Flattening tolerance for circles, in output pixels.
const CIRCLE_TOLERANCE_PX: f64 = 0.1;

/// Opaque RGBA8 pixels of a rendered scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Rasterize `scene` onto a `size_px` square (anti-aliased, source-over blending).
pub fn render_raster(scene: &Scene, size_px: u32) -> MandalaResult<RasterFrame> {
    let side: u16 = size_px
        .try_into()
        .map_err(|_| MandalaError::validation("raster size exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(side, side);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(&Paint::new(scene.background, 1.0)));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(side),
        f64::from(side),
    ));

    let view = view_transform(size_px);
    let tolerance = CIRCLE_TOLERANCE_PX / view.as_coeffs()[0];
    ctx.set_transform(affine_to_cpu(view));
    for shape in &scene.shapes {
        draw_shape(&mut ctx, shape, tolerance);
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(side, side);
    ctx.render_to_pixmap(&mut pixmap);

    // The background fill is opaque, so premultiplied RGB is already the final color; only the
    // alpha channel drifts below 255 from u8 compositing.
    let mut data = pixmap.data_as_u8_slice().to_vec();
    for px in data.chunks_exact_mut(4) {
        px[3] = 255;
    }
    Ok(RasterFrame {
        width: size_px,
        height: size_px,
        data,
    })
}

/// Encode a frame as PNG.
pub fn encode_png(frame: &RasterFrame) -> MandalaResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| MandalaError::encoding("rgba buffer does not match frame size"))?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| MandalaError::encoding(format!("png: {e}")))?;
    Ok(buf)
}

fn draw_shape(ctx: &mut vello_cpu::RenderContext, shape: &Shape, tolerance: f64) {
    let path = match &shape.geometry {
        Geometry::Path(p) => bezpath_to_cpu(p),
        Geometry::Circle(c) => {
            use kurbo::Shape as _;
            bezpath_to_cpu(&c.to_path(tolerance))
        }
    };

    if let Some(fill) = &shape.fill {
        ctx.set_paint(color_to_cpu(fill));
        ctx.fill_path(&path);
    }
    if let Some(stroke) = &shape.stroke {
        ctx.set_paint(color_to_cpu(&stroke.paint));
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(stroke.width)
                .with_join(vello_cpu::kurbo::Join::Round)
                .with_caps(vello_cpu::kurbo::Cap::Round),
        );
        ctx.stroke_path(&path);
    }
}

fn color_to_cpu(paint: &Paint) -> vello_cpu::peniko::Color {
    let [r, g, b] = paint.color.rgb();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, alpha_to_u8(paint.alpha))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
