use super::*;
use crate::color::palette::fallback_palette;
use crate::layers::shape::Geometry;

#[test]
fn vignette_tints_use_palette_ends() {
    let palette = fallback_palette("veil", 7);
    let bg = HexColor::from_rgb(1, 2, 3);
    let v = vignette(bg, &palette);
    assert_eq!(v.len(), 3);
    assert_eq!(v[0].z, ZOrder::HALO);
    assert_eq!(v[0].fill.unwrap().color, bg);
    assert_eq!(v[1].fill.unwrap().color, palette[6]);
    assert_eq!(v[2].fill.unwrap().color, palette[0]);
    assert!((v[1].extent() - 1.04).abs() < 1e-12);
}

#[test]
fn jewel_is_two_concentric_discs() {
    let palette = fallback_palette("gem", 5);
    let ctx = LayerCtx {
        palette: &palette,
        accent: palette[2],
        complexity: 1,
        symmetry: 4,
        thetas: &[],
    };
    let mut out = Vec::new();
    jewel(&ctx, &mut out);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].fill.unwrap().color, palette[2]);
    assert_eq!(out[1].fill.unwrap().color, palette[4]);
    assert!(out[0].z < out[1].z);
    for s in &out {
        let Geometry::Circle(c) = &s.geometry else {
            panic!("jewel parts are circles");
        };
        assert_eq!(c.center, Point::ORIGIN);
    }
}

#[test]
fn sparkles_stay_near_center() {
    let palette = fallback_palette("spark", 7);
    let ctx = LayerCtx {
        palette: &palette,
        accent: palette[0],
        complexity: 5,
        symmetry: 4,
        thetas: &[],
    };
    let mut out = Vec::new();
    sparkles(&ctx, &mut Rng64::new(9), &mut out);
    assert_eq!(out.len(), sparkle_count(5));
    for s in &out {
        assert!(s.stroke.is_none());
        let Geometry::Circle(c) = &s.geometry else {
            panic!("sparkles are circles");
        };
        let r = c.center.to_vec2().hypot();
        assert!((0.02..0.18).contains(&r));
        assert!((0.0015..0.0033).contains(&c.radius));
    }
}
