use super::*;
use crate::foundation::core::Point;

#[test]
fn point_width_matches_reference_scale() {
    // 1 pt at 200 dpi is ~2.78 px; on a 1024 px canvas spanning 2.1 units that is ~0.0057 units.
    assert!((POINT - 0.005_696_6).abs() < 1e-6);
    assert!((points(2.0) - 2.0 * POINT).abs() < 1e-15);
}

#[test]
fn z_order_sorts_ascending() {
    let mut zs = vec![
        ZOrder::SPARKLES,
        ZOrder::HALO,
        ZOrder::BEADS,
        ZOrder::JEWEL_CORE,
        ZOrder::ROSETTE,
        ZOrder::JEWEL,
        ZOrder::RINGS,
        ZOrder::SPOKES,
        ZOrder::TINT,
        ZOrder::FILIGREE,
    ];
    zs.sort();
    assert_eq!(
        zs,
        vec![
            ZOrder::HALO,
            ZOrder::TINT,
            ZOrder::ROSETTE,
            ZOrder::RINGS,
            ZOrder::FILIGREE,
            ZOrder::SPOKES,
            ZOrder::BEADS,
            ZOrder::JEWEL,
            ZOrder::JEWEL_CORE,
            ZOrder::SPARKLES,
        ]
    );
}

#[test]
fn circle_extent_includes_offset_and_stroke() {
    let s = Shape::circle(ZOrder::BEADS, Circle::new(Point::new(0.3, 0.4), 0.1))
        .with_stroke(StrokePaint::pt(HexColor::WHITE, 1.0, 2.0));
    assert!((s.extent() - (0.5 + 0.1 + POINT)).abs() < 1e-12);
}

#[test]
fn path_extent_uses_bounding_box_corners() {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((0.6, 0.0));
    p.line_to((0.0, 0.8));
    p.close_path();
    let s = Shape::path(ZOrder::SPOKES, p);
    assert!((s.extent() - 1.0).abs() < 1e-12);
}
