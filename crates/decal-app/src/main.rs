//! Decal Studio - chroma-key cutout tool
//!
//! Parses the command line, initializes logging, and drives the batch.

mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use decal_matte::CanvasSize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cut chroma-key backgrounds out of images", long_about = None)]
struct Args {
    /// Input image files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Key color to remove, as a hex string like `#00ff00`
    #[arg(short, long)]
    key_color: Option<String>,

    /// Match aggressiveness, 0-100
    #[arg(short, long)]
    similarity: Option<f32>,

    /// Fit the cutout onto a fixed canvas, e.g. `370x320`
    #[arg(long, value_parser = pipeline::parse_canvas)]
    canvas: Option<CanvasSize>,

    /// JSON preset file with matte parameters
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Output path (single input only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for batch outputs; default is next to each input
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let params = pipeline::resolve_params(
        args.preset.as_deref(),
        args.key_color.as_deref(),
        args.similarity,
        args.canvas,
    )?;
    info!(
        key = %params.key_color.rgb().to_hex(),
        similarity = params.clamped_similarity(),
        inputs = args.inputs.len(),
        "decal starting"
    );

    pipeline::run_batch(
        &args.inputs,
        &params,
        args.output.as_deref(),
        args.out_dir.as_deref(),
    )
}
