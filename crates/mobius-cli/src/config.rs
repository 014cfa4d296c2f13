//! Shape parameters from defaults, an optional JSON file, and flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mobius_core::traits::Validate;
use mobius_geometry::ShapeParameters;
use tracing::debug;

use crate::Cli;

/// Defaults, overlaid by `--config`, overlaid by explicit flags.
pub fn resolve(cli: &Cli) -> Result<ShapeParameters> {
    let base = match &cli.config {
        Some(path) => load(path)?,
        None => ShapeParameters::default(),
    };
    let params = overlay(base, cli.radius, cli.width, cli.resolution);
    params.validate()?;
    Ok(params)
}

fn load(path: &Path) -> Result<ShapeParameters> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let params: ShapeParameters = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    debug!(path = %path.display(), ?params, "config loaded");
    Ok(params)
}

fn overlay(
    base: ShapeParameters,
    radius: Option<f64>,
    width: Option<f64>,
    resolution: Option<usize>,
) -> ShapeParameters {
    ShapeParameters {
        radius: radius.unwrap_or(base.radius),
        width: width.unwrap_or(base.width),
        resolution: resolution.unwrap_or(base.resolution),
    }
}
