use super::*;
use crate::color::palette::fallback_palette;
use crate::geometry::radial::theta_samples;
use crate::layers::shape::Geometry;

#[test]
fn count_scales_with_complexity() {
    assert_eq!(rosette_count(1), 12);
    assert_eq!(rosette_count(10), 30);
}

#[test]
fn waves_use_symmetry_multiples_and_stay_clamped() {
    let mut rng = Rng64::new(17);
    let layers = rosette_count(6);
    for li in 0..layers {
        let w = rosette_wave(li, layers, 12, &mut rng);
        assert_eq!(w.harmonics.len(), 2);
        assert_eq!(w.harmonics[0].freq % 12, 0);
        assert!((12..=48).contains(&w.harmonics[0].freq));
        assert_eq!(w.harmonics[1].freq, 2 * w.harmonics[0].freq);
        for t in theta_samples(720) {
            let r = w.radius_at(t);
            assert!((ROSETTE_CLAMP.0..=ROSETTE_CLAMP.1).contains(&r));
        }
    }
}

#[test]
fn base_radius_grows_outwards() {
    let mut rng = Rng64::new(3);
    let first = rosette_wave(0, 20, 8, &mut rng);
    let last = rosette_wave(19, 20, 8, &mut rng);
    assert!((first.base - 0.18).abs() < 1e-12);
    assert!((last.base - 0.98).abs() < 1e-12);
    assert!(first.amp > last.amp);
}

#[test]
fn layers_fade_with_depth() {
    let palette = fallback_palette("Rose", 7);
    let thetas = theta_samples(128);
    let ctx = LayerCtx {
        palette: &palette,
        accent: palette[0],
        complexity: 2,
        symmetry: 6,
        thetas: &thetas,
    };
    let mut out = Vec::new();
    rosettes(&ctx, &mut Rng64::new(1), &mut out);
    assert_eq!(out.len(), rosette_count(2));

    let alphas: Vec<f64> = out.iter().map(|s| s.fill.unwrap().alpha).collect();
    assert!(alphas.windows(2).all(|w| w[0] > w[1]));
    assert!((alphas[0] - 0.15).abs() < 1e-12);
    assert!(out.iter().all(|s| matches!(s.geometry, Geometry::Path(_))));
    assert!(out.iter().all(|s| s.stroke.is_some()));
    assert_eq!(out[0].fill.unwrap().color, palette[0]);
    assert_eq!(out[0].stroke.unwrap().paint.color, palette[2]);
}
