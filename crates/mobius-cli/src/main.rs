//! mobius: compute the surface area and edge length of a sampled Möbius strip.
//!
//! # Logging
//!
//! `RUST_LOG` takes precedence over `-v`:
//! - `RUST_LOG=mobius_geometry=debug` - grid construction and per-query spans
//! - `RUST_LOG=mobius_math=debug` - quadrature fallbacks
//! - `RUST_LOG=trace` - everything, including per-boundary integrals
//!
//! # Example
//!
//! ```bash
//! mobius -r 1.0 -w 0.4 -n 200 --html strip.html
//! mobius --config strip.json --format json
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mobius_geometry::MobiusStrip;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

/// Approximate the surface area and edge length of a Möbius strip.
#[derive(Parser, Debug)]
#[command(name = "mobius")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Centerline radius R
    #[arg(long, short = 'r')]
    radius: Option<f64>,

    /// Strip width w
    #[arg(long, short = 'w')]
    width: Option<f64>,

    /// Samples per parameter axis n (at least 2)
    #[arg(long, short = 'n')]
    resolution: Option<usize>,

    /// JSON file with `radius`, `width` and `resolution`; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write an interactive HTML viewer of the strip to this path
    #[arg(long)]
    html: Option<PathBuf>,

    /// Output format for results
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Suppress log output
    #[arg(long, short)]
    quiet: bool,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "mobius_geometry=info,mobius_render=info,mobius=info",
            2 => "mobius_geometry=debug,mobius_math=debug,mobius_render=debug,mobius=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let params = config::resolve(cli)?;
    let strip = MobiusStrip::from_params(params).context("invalid strip parameters")?;
    info!(
        radius = params.radius,
        width = params.width,
        resolution = params.resolution,
        "strip sampled"
    );

    if let Some(path) = &cli.html {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        mobius_render::render_grid(strip.coordinates(), "Möbius Strip", &mut out)
            .with_context(|| format!("failed to write {}", path.display()))?;
        out.flush()
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "viewer written");
    }

    let report = strip.report()?;
    match cli.format {
        OutputFormat::Text => {
            println!("Surface Area ≈ {:.4}", report.surface_area);
            println!("Edge Length ≈ {:.4}", report.edge_length);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    run(&cli)
}
