use super::*;
use crate::color::palette::fallback_palette;
use crate::layers::shape::Geometry;

#[test]
fn bead_counts_are_clamped() {
    assert_eq!(beads_in_ring(4, 0), 40);
    assert_eq!(beads_in_ring(12, 0), 60);
    assert_eq!(beads_in_ring(12, 3), 114);
    assert_eq!(beads_in_ring(36, 16), 420);
}

#[test]
fn beads_sit_near_their_ring_and_use_one_draw_each() {
    let palette = fallback_palette("beads", 7);
    let ctx = LayerCtx {
        palette: &palette,
        accent: palette[0],
        complexity: 2,
        symmetry: 8,
        thetas: &[],
    };
    let mut rng = Rng64::new(44);
    let mut out = Vec::new();
    beads(&ctx, &mut rng, &mut out);

    let rings = bead_ring_count(2);
    let total: u32 = (0..rings).map(|i| beads_in_ring(8, i)).sum();
    assert_eq!(out.len(), total as usize);

    let mut reference = Rng64::new(44);
    for _ in 0..total {
        reference.next_f64_01();
    }
    assert_eq!(rng.next_u64(), reference.next_u64());

    let Geometry::Circle(first) = &out[0].geometry else {
        panic!("beads are circles");
    };
    let r = first.center.to_vec2().hypot();
    assert!((r - 0.16).abs() <= BEAD_JITTER / 2.0 + 1e-12);
}
