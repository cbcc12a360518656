use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use serde::Deserialize;

use inkboard::Config;
use inkboard::draw::{DrawingLine, color};
use inkboard::raster::{ImageSize, RasterContext, render_lines};

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Render freehand stroke documents to PNG images")]
struct Cli {
    /// Stroke document to render (JSON: {"lines": [...]})
    input: PathBuf,

    /// Output PNG path
    #[arg(long, short = 'o', default_value = "drawing.png")]
    output: PathBuf,

    /// Background color name (overrides the configured default)
    #[arg(long, short = 'b')]
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StrokeDocument {
    lines: Vec<DrawingLine>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let background = match cli.background.as_deref() {
        Some(name) => match color::name_to_color(name) {
            Some(c) => c,
            None => bail!("unknown background color '{name}'"),
        },
        None => config.background_color(),
    };

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read stroke document {}", cli.input.display()))?;
    let document: StrokeDocument = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse stroke document {}", cli.input.display()))?;

    log::info!(
        "rendering {} line(s) from {}",
        document.lines.len(),
        cli.input.display()
    );

    let context = RasterContext::new();
    let stream = render_lines(&context, &document.lines, ImageSize::default(), background)
        .context("rasterization failed")?;

    if stream.is_empty() {
        log::warn!("nothing to render: document has no drawable content");
        println!("Nothing to render; no output written.");
        return Ok(());
    }

    fs::write(&cli.output, stream.as_bytes())
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!("Wrote {}", cli.output.display());

    Ok(())
}
