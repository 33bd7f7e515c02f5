use rayon::prelude::*;

use crate::foundation::error::{MandalaError, MandalaResult};
use crate::render::cpu::{encode_png, render_raster};
use crate::render::params::RenderRequest;
use crate::render::scene::Scene;
use crate::render::svg::write_svg;
use crate::theme::model::Theme;

/// Encoded output of one render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResult {
    pub png: Vec<u8>,
    /// SVG document, present only when vector output was requested.
    pub svg: Option<Vec<u8>>,
}

/// Render `theme` with `request` to PNG, plus SVG when `want_vector` is set.
///
/// Pipeline:
/// 1. [`Theme::validate`] and [`RenderRequest::normalized`]
/// 2. scene composition from a fresh generator seeded with `request.seed`
/// 3. rasterization + PNG encoding, then (optionally) SVG serialization of the same scene
///
/// Identical inputs give byte-identical output. Any failure returns an error and no partial
/// result.
#[tracing::instrument(skip(theme, request), fields(word = theme.word(), seed = request.seed))]
pub fn render(
    theme: &Theme,
    request: &RenderRequest,
    want_vector: bool,
) -> MandalaResult<RenderResult> {
    let request = request.normalized()?;
    let scene = Scene::compose(theme, &request)?;
    tracing::debug!(
        shapes = scene.shapes.len(),
        complexity = request.complexity,
        symmetry = request.symmetry,
        "scene composed"
    );

    let frame = render_raster(&scene, request.size_px)?;
    let png = encode_png(&frame)?;
    let svg = if want_vector {
        Some(write_svg(&scene, request.size_px)?)
    } else {
        None
    };
    tracing::debug!(
        png_bytes = png.len(),
        svg_bytes = svg.as_ref().map_or(0, Vec::len),
        "render encoded"
    );
    Ok(RenderResult { png, svg })
}

/// Render independent jobs in parallel on the global rayon pool.
///
/// Each job owns its generator, so results equal sequential [`render`] calls and keep input order.
pub fn render_many(
    jobs: &[(Theme, RenderRequest)],
    want_vector: bool,
) -> Vec<MandalaResult<RenderResult>> {
    jobs.par_iter()
        .map(|(theme, request)| render(theme, request, want_vector))
        .collect()
}

/// [`render_many`] on a dedicated pool with `threads` workers (`None` uses rayon defaults).
pub fn render_many_with_threads(
    jobs: &[(Theme, RenderRequest)],
    want_vector: bool,
    threads: Option<usize>,
) -> MandalaResult<Vec<MandalaResult<RenderResult>>> {
    let pool = build_thread_pool(threads)?;
    Ok(pool.install(|| render_many(jobs, want_vector)))
}

fn build_thread_pool(threads: Option<usize>) -> MandalaResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MandalaError::validation("batch 'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MandalaError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
