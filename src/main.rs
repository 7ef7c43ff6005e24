//! Command-line front end for the pixelshade transforms.
//!
//! Two entry points over the same engine: `apply` selects a single
//! transform by its numeric operation code, `demo` runs the fixed default
//! suite over one image.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pixelshade::grid::PixelGrid;
use pixelshade::transforms::{Channel, Transform};
use pixelshade::{io, Error};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pixelshade", version, about = "Whole-image pixel transforms")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply one transform selected by its numeric operation code.
    Apply {
        /// Input image file.
        input: PathBuf,
        /// 0 = contrast, 1 = brightness, 2 = color filter, 3 = invert,
        /// 4 = grayscale.
        operation: u8,
        /// Intensity for operations 0-2: a factor (contrast), a signed
        /// integer delta (brightness), or a channel name (color filter).
        intensity: Option<String>,
    },
    /// Run the default transform suite over one image.
    Demo {
        /// Input image file.
        input: PathBuf,
    },
}

/// Transforms run by the `demo` subcommand, in order.
const DEMO_SUITE: [Transform; 5] = [
    Transform::Contrast(2.0),
    Transform::Grayscale,
    Transform::Invert,
    Transform::Brightness(60),
    Transform::ColorFilter(Channel::Red),
];

fn run_transform(source: &PixelGrid, input: &Path, transform: &Transform) -> anyhow::Result<()> {
    println!("applying {transform} to {}", input.display());
    let start = std::time::Instant::now();
    let output = transform.apply(source);
    log::debug!("{transform} pass finished in {:?}", start.elapsed());
    let path = io::output_path(input, transform);
    io::save_rgb(&output, &path).with_context(|| format!("saving {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Apply {
            input,
            operation,
            intensity,
        } => {
            // Validate the selector and intensity before touching the file.
            let transform = Transform::from_selector(operation, intensity.as_deref())?;
            let source =
                io::load_rgb(&input).with_context(|| format!("loading {}", input.display()))?;
            run_transform(&source, &input, &transform)?;
        }
        Command::Demo { input } => {
            let source =
                io::load_rgb(&input).with_context(|| format!("loading {}", input.display()))?;
            for transform in &DEMO_SUITE {
                run_transform(&source, &input, transform)?;
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // Missing or malformed arguments get the bare message; everything
        // else keeps its context chain.
        match err.downcast_ref::<Error>() {
            Some(Error::MissingIntensity { .. }) | Some(Error::InvalidParameter(_)) => {
                eprintln!("{err}")
            }
            _ => eprintln!("error: {err:#}"),
        }
        std::process::exit(1);
    }
}
