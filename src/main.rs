//! Command line front end
//!
//! Usage:
//!   wiresphere sphere --output sphere.png [--config sphere.ron] [--rotate-x 0.5]
//!   wiresphere canvas --click 100,100 --click 200,100 --output canvas.png
//!   wiresphere default-config --output sphere.ron

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use wiresphere::config::names;
use wiresphere::rasterizer::{HEIGHT, WIDTH};
use wiresphere::{Canvas, SphereConfig, SphereRenderer};

#[derive(Parser)]
#[command(name = "wiresphere", version)]
#[command(about = "Render a wireframe sphere or a click canvas to PNG")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sphere view
    Sphere {
        /// RON configuration file (flags below override it)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        radius: Option<f64>,
        /// Depth translation in front of the camera
        #[arg(long)]
        zoom: Option<f64>,
        #[arg(long)]
        meridians: Option<usize>,
        #[arg(long)]
        parallels: Option<usize>,
        /// Rotation about X in radians
        #[arg(long, allow_hyphen_values = true)]
        rotate_x: Option<f64>,
        /// Rotation about Y in radians
        #[arg(long, allow_hyphen_values = true)]
        rotate_y: Option<f64>,
        #[arg(long, default_value_t = WIDTH)]
        width: usize,
        #[arg(long, default_value_t = HEIGHT)]
        height: usize,
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Replay clicks on the 2D canvas
    Canvas {
        /// Click position as X,Y (repeatable; every second click draws a line)
        #[arg(long = "click", value_parser = parse_point)]
        clicks: Vec<(f64, f64)>,
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Write the default sphere configuration as RON
    DefaultConfig {
        #[arg(long, short)]
        output: PathBuf,
    },
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad X in '{}': {}", s, e))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad Y in '{}': {}", s, e))?;
    Ok((x, y))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sphere {
            config,
            radius,
            zoom,
            meridians,
            parallels,
            rotate_x,
            rotate_y,
            width,
            height,
            output,
        } => {
            let base = match config {
                Some(path) => SphereConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => SphereConfig::default(),
            };

            let overrides: Vec<(&str, f64)> = [
                (names::RADIUS, radius),
                (names::ZOOM, zoom),
                (names::MERIDIANS, meridians.map(|m| m as f64)),
                (names::PARALLELS, parallels.map(|n| n as f64)),
                (names::ROTATE_X, rotate_x),
                (names::ROTATE_Y, rotate_y),
            ]
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect();

            let config = base.with_parameters(&overrides).context("Invalid sphere parameters")?;

            let mut renderer = SphereRenderer::new(width, height);
            renderer.apply(config).context("Redraw failed")?;

            renderer
                .buffer()
                .save_png(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {}", output.display());
        }
        Commands::Canvas { clicks, output } => {
            let mut canvas = Canvas::new();
            for (x, y) in clicks {
                canvas.click(x, y);
            }
            canvas
                .buffer()
                .save_png(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {} ({} points skipped)", output.display(), canvas.stats().skipped);
        }
        Commands::DefaultConfig { output } => {
            SphereConfig::default()
                .save(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Wrote {}", output.display());
        }
    }

    Ok(())
}
