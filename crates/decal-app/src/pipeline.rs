//! Per-file cutout work and the parallel batch driver.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use decal_core::DecalError;
use decal_matte::{cut_out, CanvasSize, KeyColor, MatteParams};
use decal_media::{default_output_path, is_supported_image, open_image, save_png};
use rayon::prelude::*;
use tracing::{error, info};

/// Parse a `WIDTHxHEIGHT` canvas spec such as `370x320`.
pub fn parse_canvas(spec: &str) -> Result<CanvasSize, String> {
    let (w, h) = spec
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{spec}`"))?;
    let width = w
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("bad canvas width `{w}`"))?;
    let height = h
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("bad canvas height `{h}`"))?;
    if width == 0 || height == 0 {
        return Err(format!("canvas sides must be nonzero, got `{spec}`"));
    }
    Ok(CanvasSize::new(width, height))
}

/// Load matte parameters from a JSON preset file.
pub fn load_preset(path: &Path) -> Result<MatteParams> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read preset {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid preset {}", path.display()))
}

/// Merge a preset (or the defaults) with explicit command line overrides.
pub fn resolve_params(
    preset: Option<&Path>,
    key_color: Option<&str>,
    similarity: Option<f32>,
    canvas: Option<CanvasSize>,
) -> Result<MatteParams> {
    let mut params = match preset {
        Some(path) => load_preset(path)?,
        None => MatteParams::default(),
    };
    if let Some(key) = key_color {
        params.key_color = KeyColor::parse_lossy(key);
    }
    if let Some(similarity) = similarity {
        params.similarity = similarity;
    }
    if let Some(canvas) = canvas {
        params.canvas = Some(canvas);
    }
    Ok(params)
}

/// Where one input's cutout lands.
///
/// An explicit `--output` wins; otherwise the default `.cutout.png` name,
/// placed in `out_dir` when one was given and next to the input when not.
pub fn output_target(input: &Path, explicit: Option<&Path>, out_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let default = default_output_path(input);
    match (out_dir, default.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        (Some(dir), None) => dir.join("cutout.png"),
        (None, _) => default,
    }
}

/// Cut out one file end to end: decode, matte, write PNG.
fn process_file(input: &Path, output: &Path, params: &MatteParams) -> Result<()> {
    if !is_supported_image(input) {
        return Err(DecalError::UnsupportedFormat(input.display().to_string()).into());
    }
    let source =
        open_image(input).with_context(|| format!("failed to open {}", input.display()))?;
    let result = cut_out(source, params);
    save_png(&result.pixels, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        input = %input.display(),
        output = %output.display(),
        cleared = result.stats.cleared(),
        "cutout written"
    );
    Ok(())
}

/// Run the whole batch, one rayon task per input.
///
/// Every input is attempted even when some fail; failures are logged as
/// they happen and reported once at the end.
pub fn run_batch(
    inputs: &[PathBuf],
    params: &MatteParams,
    output: Option<&Path>,
    out_dir: Option<&Path>,
) -> Result<()> {
    if inputs.is_empty() {
        bail!("no inputs given");
    }
    if output.is_some() && inputs.len() > 1 {
        bail!("--output only applies to a single input; use --out-dir for batches");
    }
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let failed = inputs
        .par_iter()
        .map(|input| {
            let target = output_target(input, output, out_dir);
            match process_file(input, &target, params) {
                Ok(()) => 0usize,
                Err(e) => {
                    error!(input = %input.display(), "cutout failed: {e:#}");
                    1
                }
            }
        })
        .sum::<usize>();

    if failed > 0 {
        bail!("{failed} of {} inputs failed", inputs.len());
    }
    Ok(())
}
