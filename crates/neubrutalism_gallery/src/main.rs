//! Neubrutalism Gallery - renders the showcase screen to PPM images.
//!
//! Writes `showcase.ppm` as first displayed and `showcase_focused.ppm`
//! after a tap on the search field, logging a fingerprint for each.

mod showcase;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use neubrutalism::{Canvas, StyleSheet};

use crate::showcase::Showcase;

#[derive(Parser)]
#[command(name = "neubrutalism-gallery")]
#[command(about = "Render the neubrutalism showcase screen", long_about = None)]
struct Cli {
    /// Output directory for the images
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 375, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 667, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Style sheet (TOML) overriding the default look
    #[arg(short, long, value_name = "FILE")]
    style: Option<PathBuf>,
}

fn write_image(canvas: &Canvas, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    canvas
        .write_ppm(&mut out)
        .and_then(|()| out.flush())
        .with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        fingerprint = format_args!("{:08x}", canvas.fingerprint()),
        "wrote image"
    );
    Ok(())
}

fn main() -> Result<()> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=neubrutalism=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let sheet = match &cli.style {
        Some(path) => {
            StyleSheet::load(path).with_context(|| format!("loading style sheet {}", path.display()))?
        }
        None => StyleSheet::default(),
    };

    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;

    #[allow(clippy::cast_precision_loss)]
    let mut showcase = Showcase::new(&sheet, cli.width as f32, cli.height as f32);

    write_image(&showcase.paint(cli.width, cli.height), &cli.out.join("showcase.ppm"))?;

    showcase.tap_search();
    tracing::info!(focused = showcase.search_focused(), "tapped search field");
    write_image(
        &showcase.paint(cli.width, cli.height),
        &cli.out.join("showcase_focused.ppm"),
    )?;

    Ok(())
}
