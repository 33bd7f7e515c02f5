//! Mandala turns a word into a deterministic, themed radial image.
//!
//! A [`Theme`] (palette, background, accent, mood, motifs) is acquired for the word, optionally
//! from an external [`ThemeProducer`], and always normalized into a renderable shape. The renderer
//! then composes seeded rosette, ring, filigree, spoke, bead, jewel and sparkle layers and encodes
//! them:
//!
//! - [`get_theme`] / [`normalize_theme`] / [`Theme::fallback`] build themes
//! - [`render`] produces a [`RenderResult`] (PNG, plus SVG on request)
//! - [`render_many`] renders independent jobs in parallel
//! - [`compare`] checks that the vector output matches the raster
#![forbid(unsafe_code)]

mod color;
mod foundation;
mod geometry;
mod layers;
mod parity;
mod render;
mod theme;

pub use crate::foundation::core::{Affine, BezPath, Circle, PathEl, Point, Vec2};
pub use crate::foundation::error::{MandalaError, MandalaResult};
pub use crate::foundation::math::Rng64;

pub use crate::color::hash::{SEED_MODULUS, default_seed, stable_hash};
pub use crate::color::hex::{HexColor, normalize_color};
pub use crate::color::palette::{
    DARK_BACKGROUND, LIGHT_BACKGROUND, choose_contrasting_background, fallback_palette, hsl_to_hex,
};

pub use crate::theme::model::{
    MAX_MOOD_CHARS, MAX_MOTIF_CHARS, MAX_MOTIFS, MAX_PALETTE, MIN_PALETTE, Theme,
};
pub use crate::theme::normalize::{DEFAULT_MOOD, DEFAULT_MOTIFS, normalize_theme};
pub use crate::theme::source::{
    DEFAULT_WORD, FileResponse, StaticResponse, THEME_SYSTEM_PROMPT, ThemeProducer, extract_json,
    get_theme, theme_user_prompt,
};

pub use crate::geometry::curve::{SPLINE_TENSION, smooth_closed_path};
pub use crate::geometry::radial::{Harmonic, RadialWave, polar, theta_samples};

pub use crate::layers::kind::{LayerCtx, LayerKind};
pub use crate::layers::shape::{Geometry, Paint, Shape, StrokePaint, ZOrder};

pub use crate::render::cpu::{RasterFrame, encode_png, render_raster};
pub use crate::render::params::{COMPLEXITY_RANGE, RenderRequest, SIZE_PX_RANGE, SYMMETRY_RANGE};
pub use crate::render::pipeline::{RenderResult, render, render_many, render_many_with_threads};
pub use crate::render::scene::{CURVE_SAMPLES, Scene, VIEW_EXTENT};
pub use crate::render::svg::write_svg;

pub use crate::parity::compare::{
    DEFAULT_VISIBILITY_THRESHOLD, ParityReport, compare, decode_png, rasterize_svg,
    visible_disc_radius,
};
