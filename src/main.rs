//! mobius: compute and render a Möbius strip.
//!
//! Without arguments, measures the strip with `R = 1`, `w = 0.5` and
//! `n = 100`, prints its surface area and edge length, and saves a render
//! to `mobius_strip.png`.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output, e.g.,
//! `RUST_LOG=mobius_core=debug mobius`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mobius_core::{compute, render, StripParams};

/// Measure a Möbius strip and render it to an image.
#[derive(Parser)]
#[command(name = "mobius")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Distance from the center to the strip's center circle
    #[arg(long, short, default_value_t = 1.0)]
    radius: f64,

    /// Width of the strip
    #[arg(long, short, default_value_t = 0.5)]
    width: f64,

    /// Number of samples along each parametric axis
    #[arg(long = "resolution", short = 'n', default_value_t = 100)]
    resolution: usize,

    /// Output image
    #[arg(long, short, default_value = render::DEFAULT_FILENAME)]
    output: PathBuf,

    /// Do not render the strip
    #[arg(long)]
    no_plot: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let params = StripParams::new(cli.radius, cli.width, cli.resolution)?;
    let strip = compute(params);

    println!("Surface Area: {:.4}", strip.surface_area());
    println!("Edge Length: {:.4}", strip.edge_length());

    if !cli.no_plot {
        strip
            .plot_surface(&cli.output)
            .with_context(|| format!("failed to render to {}", cli.output.display()))?;
    }

    Ok(())
}
