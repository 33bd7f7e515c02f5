use super::*;

#[test]
fn defaults_match_generator_defaults() {
    let r = RenderRequest::default();
    assert_eq!((r.seed, r.complexity, r.symmetry, r.size_px), (0, 6, 12, 1024));
    assert_eq!(RenderRequest::new(9).seed, 9);
}

#[test]
fn out_of_range_detail_is_clamped() {
    let r = RenderRequest::new(1)
        .with_complexity(99)
        .with_symmetry(1)
        .normalized()
        .unwrap();
    assert_eq!((r.complexity, r.symmetry), (10, 4));

    let r = RenderRequest::new(1)
        .with_complexity(0)
        .with_symmetry(500)
        .normalized()
        .unwrap();
    assert_eq!((r.complexity, r.symmetry), (1, 36));
}

#[test]
fn in_range_values_pass_through() {
    let r = RenderRequest::new(5)
        .with_complexity(3)
        .with_symmetry(16)
        .with_size_px(256);
    assert_eq!(r.normalized().unwrap(), r);
}

#[test]
fn unusable_sizes_are_rejected() {
    for size in [0, 15, 8193, u32::MAX] {
        let err = RenderRequest::new(0).with_size_px(size).normalized();
        assert!(matches!(err, Err(MandalaError::Validation(_))), "{size}");
    }
    assert!(RenderRequest::new(0).with_size_px(16).normalized().is_ok());
    assert!(RenderRequest::new(0).with_size_px(8192).normalized().is_ok());
}
