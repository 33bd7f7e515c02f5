use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mandala", version, about = "Deterministic word-themed mandala generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one word to PNG (and optionally SVG).
    Render(RenderArgs),
    /// Print the normalized theme for a word as JSON.
    Theme(ThemeArgs),
    /// Print the default seed derived from a word.
    Seed(SeedArgs),
    /// Render several words in parallel.
    Batch(BatchArgs),
    /// Compare the raster and vector output of one render.
    Parity(ParityArgs),
}

#[derive(Args, Debug)]
struct ThemeSource {
    /// Saved theme-producer response (JSON, possibly wrapped in prose).
    #[arg(long, env = "MANDALA_THEME_FILE")]
    theme_file: Option<PathBuf>,
}

impl ThemeSource {
    fn theme_for(&self, word: &str) -> mandala::Theme {
        match &self.theme_file {
            Some(path) => {
                let producer = mandala::FileResponse(path.clone());
                mandala::get_theme(word, Some(&producer))
            }
            None => mandala::get_theme(word, None),
        }
    }
}

#[derive(Args, Debug)]
struct ShapeArgs {
    /// Layer density (clamped to 1..=10).
    #[arg(long, default_value_t = 8)]
    complexity: u32,

    /// Rotational order (clamped to 4..=36).
    #[arg(long, default_value_t = 16)]
    symmetry: u32,

    /// Output edge length in pixels.
    #[arg(long, default_value_t = 1024)]
    size: u32,
}

impl ShapeArgs {
    fn request(&self, seed: u64) -> mandala::RenderRequest {
        mandala::RenderRequest::new(seed)
            .with_complexity(self.complexity)
            .with_symmetry(self.symmetry)
            .with_size_px(self.size)
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[arg(long)]
    word: String,

    /// Seed; defaults to one derived from the word.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    shape: ShapeArgs,

    /// Also write an SVG document.
    #[arg(long)]
    svg: bool,

    #[command(flatten)]
    source: ThemeSource,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct ThemeArgs {
    #[arg(long)]
    word: String,

    #[command(flatten)]
    source: ThemeSource,
}

#[derive(Parser, Debug)]
struct SeedArgs {
    #[arg(long)]
    word: String,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    #[arg(long, num_args = 1.., required = true)]
    words: Vec<String>,

    #[command(flatten)]
    shape: ShapeArgs,

    #[arg(long)]
    svg: bool,

    /// Worker threads; defaults to one per core.
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    source: ThemeSource,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct ParityArgs {
    #[arg(long)]
    word: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 8)]
    complexity: u32,

    #[arg(long, default_value_t = 16)]
    symmetry: u32,

    #[arg(long, default_value_t = 256)]
    size: u32,

    #[command(flatten)]
    source: ThemeSource,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Theme(args) => cmd_theme(args),
        Command::Seed(args) => {
            println!("{}", mandala::default_seed(&args.word));
            Ok(())
        }
        Command::Batch(args) => cmd_batch(args),
        Command::Parity(args) => cmd_parity(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let theme = args.source.theme_for(&args.word);
    let seed = args.seed.unwrap_or_else(|| mandala::default_seed(&args.word));
    let result = mandala::render(&theme, &args.shape.request(seed), args.svg)
        .with_context(|| format!("render '{}'", theme.word()))?;
    write_result(&args.out_dir, &theme, &result)
}

fn cmd_theme(args: ThemeArgs) -> anyhow::Result<()> {
    let theme = args.source.theme_for(&args.word);
    println!(
        "{}",
        serde_json::to_string_pretty(&theme).context("serialize theme")?
    );
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    // Words sharing an output file name would overwrite each other; the first one wins.
    let mut names = HashSet::new();
    let mut jobs = Vec::with_capacity(args.words.len());
    for w in &args.words {
        let theme = args.source.theme_for(w);
        if !names.insert(theme.file_name("png")) {
            tracing::warn!(
                word = %w,
                file = %theme.file_name("png"),
                "duplicate output name; skipping"
            );
            continue;
        }
        let request = args.shape.request(mandala::default_seed(w));
        jobs.push((theme, request));
    }

    let results = mandala::render_many_with_threads(&jobs, args.svg, args.threads)?;
    for ((theme, _), result) in jobs.iter().zip(results) {
        let result = result.with_context(|| format!("render '{}'", theme.word()))?;
        write_result(&args.out_dir, theme, &result)?;
    }
    Ok(())
}

fn cmd_parity(args: ParityArgs) -> anyhow::Result<()> {
    let theme = args.source.theme_for(&args.word);
    let seed = args.seed.unwrap_or_else(|| mandala::default_seed(&args.word));
    let request = mandala::RenderRequest::new(seed)
        .with_complexity(args.complexity)
        .with_symmetry(args.symmetry)
        .with_size_px(args.size);

    let result = mandala::render(&theme, &request, true)?;
    let report = mandala::compare(&result, theme.background())?;
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serialize parity report")?
    );
    Ok(())
}

fn write_result(
    out_dir: &Path,
    theme: &mandala::Theme,
    result: &mandala::RenderResult,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let png_path = out_dir.join(theme.file_name("png"));
    std::fs::write(&png_path, &result.png)
        .with_context(|| format!("write png '{}'", png_path.display()))?;
    eprintln!("wrote {}", png_path.display());

    if let Some(svg) = &result.svg {
        let svg_path = out_dir.join(theme.file_name("svg"));
        std::fs::write(&svg_path, svg)
            .with_context(|| format!("write svg '{}'", svg_path.display()))?;
        eprintln!("wrote {}", svg_path.display());
    }
    Ok(())
}
