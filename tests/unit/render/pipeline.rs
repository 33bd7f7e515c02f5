use super::*;

fn small(seed: u64) -> RenderRequest {
    RenderRequest::new(seed)
        .with_complexity(1)
        .with_symmetry(8)
        .with_size_px(48)
}

#[test]
fn raster_only_render_has_no_svg() {
    let out = render(&Theme::fallback("Moss"), &small(1), false).unwrap();
    assert!(!out.png.is_empty());
    assert!(out.svg.is_none());
}

#[test]
fn vector_render_carries_svg() {
    let out = render(&Theme::fallback("Moss"), &small(1), true).unwrap();
    let svg = String::from_utf8(out.svg.unwrap()).unwrap();
    assert!(svg.contains("<title>Moss</title>"));
}

#[test]
fn invalid_size_is_rejected_without_output() {
    let err = render(&Theme::fallback("Moss"), &small(1).with_size_px(4), false).unwrap_err();
    assert!(matches!(err, MandalaError::Validation(_)));
}

#[test]
fn bypassed_theme_is_rejected() {
    let theme: Theme = serde_json::from_value(serde_json::json!({
        "word": "Broken",
        "palette": ["#112233"],
        "background": "#000000",
        "accent": "#FFFFFF",
        "mood": "thin",
        "motifs": []
    }))
    .unwrap();
    let err = render(&theme, &small(1), false).unwrap_err();
    assert!(matches!(err, MandalaError::InvalidTheme(_)));
}

#[test]
fn parallel_batch_matches_sequential_renders() {
    let jobs: Vec<_> = ["Ash", "Birch", "Cedar", "Dune"]
        .iter()
        .enumerate()
        .map(|(i, w)| (Theme::fallback(w), small(i as u64 * 31)))
        .collect();

    let batch = render_many(&jobs, true);
    assert_eq!(batch.len(), jobs.len());
    for ((theme, request), got) in jobs.iter().zip(batch) {
        assert_eq!(got.unwrap(), render(theme, request, true).unwrap());
    }
}

#[test]
fn batch_reports_failures_per_job() {
    let jobs = vec![
        (Theme::fallback("Ok"), small(1)),
        (Theme::fallback("Bad"), small(1).with_size_px(1)),
    ];
    let batch = render_many_with_threads(&jobs, false, Some(2)).unwrap();
    assert!(batch[0].is_ok());
    assert!(batch[1].is_err());
}

#[test]
fn zero_threads_is_a_validation_error() {
    assert!(matches!(
        render_many_with_threads(&[], false, Some(0)),
        Err(MandalaError::Validation(_))
    ));
}
