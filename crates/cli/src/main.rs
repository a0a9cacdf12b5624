#![deny(unsafe_code)]
//! CLI binary for undulate.
//!
//! Subcommands:
//! - `render [engine]`: run a sketch to completion and write a PNG
//! - `list`: print available sketches

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use undulate_core::params::resolution_from_query;
use undulate_core::{CanvasGeometry, EngineError, Seed, Simulation, StepOutcome};
use undulate_engines::runner;
use undulate_engines::EngineKind;

#[derive(Parser)]
#[command(name = "undulate", about = "Flow-field generative sketch")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a sketch until it halts and write a PNG snapshot.
    Render {
        /// Sketch name.
        #[arg(default_value = "undulate")]
        engine: String,

        /// Window width; the canvas is the largest square that fits.
        #[arg(short = 'W', long, default_value_t = 1024.0)]
        width: f64,

        /// Window height.
        #[arg(short = 'H', long, default_value_t = 1024.0)]
        height: f64,

        /// URL-style query string; `res` sets the raster side (default 4096).
        #[arg(short, long)]
        query: Option<String>,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Sketch parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available sketches.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = EngineKind::list_engines();
            if cli.json {
                let info = serde_json::json!({ "engines": engines });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            engine,
            width,
            height,
            query,
            seed,
            output,
            params,
        } => {
            let params: serde_json::Value =
                serde_json::from_str(&params).map_err(CliError::Params)?;

            let resolution = resolution_from_query(query.as_deref());
            let geometry = CanvasGeometry::new(width, height, resolution)?;
            let recipe = Seed {
                engine: engine.clone(),
                size: geometry.canvas_size,
                resolution,
                params: params.clone(),
                seed,
            };
            recipe.validate()?;

            let mut sketch =
                EngineKind::from_name(&engine, geometry.canvas_size, resolution, seed, &params)?;
            let quiet = cli.json;

            let log_frame = |sketch: &EngineKind, frame: u64, outcome: StepOutcome| {
                if quiet {
                    return;
                }
                if sketch.reseed_frames().last() == Some(&frame) {
                    eprintln!("frame {frame}: reseeded particles");
                }
                if outcome == StepOutcome::Halt {
                    eprintln!("frame {frame}: halted, preview captured");
                }
            };
            let summary = runner::run(&mut sketch, u64::MAX, log_frame)?;

            let canvas = sketch.canvas().ok_or(EngineError::NotInitialized)?;
            undulate_engines::snapshot::write_png(canvas, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "seed": recipe,
                    "geometry": geometry,
                    "params": sketch.params(),
                    "reseed_frames": sketch.reseed_frames(),
                    "frames": summary.frames,
                    "pixels": canvas.pixel_width(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {engine} ({}px, {} frames, seed {seed}) -> {}",
                    canvas.pixel_width(),
                    summary.frames,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        eprintln!("{}", e.report(json_mode));
        process::exit(e.exit_code());
    }
}
