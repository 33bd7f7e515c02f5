pub use kurbo::{Affine, BezPath, Circle, PathEl, Point, Vec2};
