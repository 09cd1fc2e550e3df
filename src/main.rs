#![deny(unsafe_code)]

mod common;
mod config;
mod constants;
mod font;
mod icon;
mod icon_set;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::DesignTokens;
use font::FontProvider;
use icon::{IconRenderer, PngFileSink};
use icon_set::SetSelection;

#[derive(Parser)]
#[command(name = "glyph-icons")]
#[command(version)]
#[command(about = "Generate Android and iOS app icons from a single glyph", long_about = None)]
struct Cli {
    /// Base directory the icon paths are relative to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Icon set(s) to generate
    #[arg(long, value_enum, default_value_t = SetSelection::All)]
    set: SetSelection,

    /// JSON design token file (defaults to the per-user tokens.json if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Glyph to draw instead of the configured one
    #[arg(long)]
    glyph: Option<String>,

    /// Font file or family name to try before the configured candidates
    #[arg(long = "font")]
    fonts: Vec<String>,

    /// Create missing output directories
    #[arg(long)]
    create_dirs: bool,

    /// List fonts known to fontconfig and exit
    #[arg(long)]
    list_fonts: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_fonts {
        for name in font::list_fonts()? {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut tokens = DesignTokens::load(cli.config.as_deref())?;
    if let Some(glyph) = cli.glyph {
        tokens.glyph = glyph;
    }
    if !cli.fonts.is_empty() {
        let mut candidates = cli.fonts;
        candidates.append(&mut tokens.font_candidates);
        tokens.font_candidates = candidates;
    }
    tokens.validate()?;

    let fonts = FontProvider::resolve(&tokens.font_candidates);
    let renderer = IconRenderer::new(&tokens, &fonts);
    let targets = icon_set::targets(cli.set);

    info!(
        count = targets.len(),
        out_dir = %cli.out_dir.display(),
        font = fonts.face().name(),
        scalable = fonts.face().is_scalable(),
        "Generating icons"
    );

    let mut sink = PngFileSink::new(cli.create_dirs);
    let report = icon_set::generate_all(&targets, &cli.out_dir, &renderer, &mut sink)?;
    info!(files = report.written.len(), "Finished");
    Ok(())
}
