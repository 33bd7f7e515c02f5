use crate::color::hex::HexColor;
use crate::foundation::core::{BezPath, Circle};

/// Unit-disc length of one typographic point at the reference resolution.
///
/// Line widths are authored in points for a 1024 px canvas at 200 dpi whose view spans 2.1 units,
/// and scale with the canvas from there.
pub const POINT: f64 = (200.0 / 72.0) * (2.1 / 1024.0);

/// Convert a line width in points into unit-disc units.
pub fn points(pt: f64) -> f64 {
    pt * POINT
}

/// Explicit compositing tag. Shapes are drawn in ascending order; ties keep generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZOrder(pub i32);

impl ZOrder {
    pub const HALO: Self = Self(0);
    pub const TINT: Self = Self(1);
    pub const ROSETTE: Self = Self(2);
    pub const RINGS: Self = Self(3);
    pub const FILIGREE: Self = Self(4);
    pub const SPOKES: Self = Self(5);
    pub const BEADS: Self = Self(6);
    pub const JEWEL: Self = Self(10);
    pub const JEWEL_CORE: Self = Self(11);
    pub const SPARKLES: Self = Self(12);
}

/// Straight-alpha color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: HexColor,
    pub alpha: f64,
}

impl Paint {
    pub fn new(color: HexColor, alpha: f64) -> Self {
        Self { color, alpha }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePaint {
    pub paint: Paint,
    /// Line width in unit-disc units.
    pub width: f64,
}

impl StrokePaint {
    /// Stroke whose width is given in points.
    pub fn pt(color: HexColor, alpha: f64, width_pt: f64) -> Self {
        Self {
            paint: Paint::new(color, alpha),
            width: points(width_pt),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Path(BezPath),
    Circle(Circle),
}

/// One drawable element of the composition, in unit-disc coordinates (y up).
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub z: ZOrder,
    pub geometry: Geometry,
    pub fill: Option<Paint>,
    pub stroke: Option<StrokePaint>,
}

impl Shape {
    pub fn path(z: ZOrder, path: BezPath) -> Self {
        Self {
            z,
            geometry: Geometry::Path(path),
            fill: None,
            stroke: None,
        }
    }

    pub fn circle(z: ZOrder, circle: Circle) -> Self {
        Self {
            z,
            geometry: Geometry::Circle(circle),
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fill = Some(paint);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokePaint) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Largest distance from the origin any part of the shape reaches (stroke included).
    pub fn extent(&self) -> f64 {
        use kurbo::Shape as _;

        let half_stroke = self.stroke.map_or(0.0, |s| s.width / 2.0);
        let reach = match &self.geometry {
            Geometry::Circle(c) => c.center.to_vec2().hypot() + c.radius,
            Geometry::Path(p) => {
                let bb = p.bounding_box();
                [bb.x0, bb.x1]
                    .iter()
                    .flat_map(|&x| [bb.y0, bb.y1].map(|y| x.hypot(y)))
                    .fold(0.0, f64::max)
            }
        };
        reach + half_stroke
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/shape.rs"]
mod tests;
