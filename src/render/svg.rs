use std::fmt::Write as _;

use crate::foundation::core::{BezPath, PathEl, Point};
use crate::foundation::error::{MandalaError, MandalaResult};
use crate::layers::shape::{Geometry, Paint, Shape, StrokePaint};
use crate::render::scene::{Scene, view_transform};

/// Serialize `scene` as a standalone SVG 1.1 document of `size_px` square.
///
/// Shapes keep their unit-disc coordinates inside one group carrying the view transform, so path
/// data and stroke widths match the raster output exactly.
pub fn write_svg(scene: &Scene, size_px: u32) -> MandalaResult<Vec<u8>> {
    let mut doc = String::with_capacity(256 + scene.shapes.len() * 160);
    write_document(&mut doc, scene, size_px)
        .map_err(|e| MandalaError::encoding(format!("svg: {e}")))?;
    Ok(doc.into_bytes())
}

fn write_document(doc: &mut String, scene: &Scene, size_px: u32) -> std::fmt::Result {
    let [a, b, c, d, e, f] = view_transform(size_px).as_coeffs();

    writeln!(doc, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{size_px}" height="{size_px}" viewBox="0 0 {size_px} {size_px}">"#
    )?;
    writeln!(doc, "<title>{}</title>", escape_xml(&scene.word))?;
    writeln!(
        doc,
        r#"<rect x="0" y="0" width="{size_px}" height="{size_px}" fill="{}"/>"#,
        scene.background
    )?;
    writeln!(
        doc,
        r#"<g transform="matrix({a} {b} {c} {d} {e} {f})" stroke-linejoin="round" stroke-linecap="round">"#
    )?;
    for shape in &scene.shapes {
        write_shape(doc, shape)?;
    }
    writeln!(doc, "</g>")?;
    writeln!(doc, "</svg>")
}

fn write_shape(doc: &mut String, shape: &Shape) -> std::fmt::Result {
    match &shape.geometry {
        Geometry::Path(path) => write!(doc, r#"<path d="{}""#, path_data(path))?,
        Geometry::Circle(circle) => write!(
            doc,
            r#"<circle cx="{:.5}" cy="{:.5}" r="{:.5}""#,
            circle.center.x, circle.center.y, circle.radius
        )?,
    }
    write_paint(doc, shape.fill.as_ref(), shape.stroke.as_ref())?;
    writeln!(doc, "/>")
}

fn write_paint(
    doc: &mut String,
    fill: Option<&Paint>,
    stroke: Option<&StrokePaint>,
) -> std::fmt::Result {
    match fill {
        Some(p) => write!(
            doc,
            r#" fill="{}" fill-opacity="{:.4}""#,
            p.color,
            p.alpha.clamp(0.0, 1.0)
        )?,
        None => write!(doc, r#" fill="none""#)?,
    }
    if let Some(s) = stroke {
        write!(
            doc,
            r#" stroke="{}" stroke-opacity="{:.4}" stroke-width="{:.6}""#,
            s.paint.color,
            s.paint.alpha.clamp(0.0, 1.0),
            s.width
        )?;
    }
    Ok(())
}

/// SVG path data for `path`, five decimals per coordinate.
pub(crate) fn path_data(path: &BezPath) -> String {
    fn pt(out: &mut String, p: Point) {
        let _ = write!(out, "{:.5} {:.5}", p.x, p.y);
    }

    let mut out = String::new();
    for el in path.elements() {
        if !out.is_empty() {
            out.push(' ');
        }
        match *el {
            PathEl::MoveTo(p) => {
                out.push_str("M ");
                pt(&mut out, p);
            }
            PathEl::LineTo(p) => {
                out.push_str("L ");
                pt(&mut out, p);
            }
            PathEl::QuadTo(p1, p2) => {
                out.push_str("Q ");
                pt(&mut out, p1);
                out.push(' ');
                pt(&mut out, p2);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                out.push_str("C ");
                pt(&mut out, p1);
                out.push(' ');
                pt(&mut out, p2);
                out.push(' ');
                pt(&mut out, p3);
            }
            PathEl::ClosePath => out.push('Z'),
        }
    }
    out
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
