#![deny(unsafe_code)]
//! CLI binary for the driftnet particle-field simulator.
//!
//! Subcommands:
//! - `render` — mount a widget, run N frames, write a PNG
//! - `preset <file>` — render from a saved preset JSON
//! - `schema` — print the recognized parameters and their defaults

mod error;

use clap::{Parser, Subcommand};
use driftnet_core::{Preset, Simulator};
use driftnet_render::scene::EdgeStyle;
use driftnet_render::snapshot;
use driftnet_sim::Field;
use driftnet_widget::{run_frames, Event, Widget};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "driftnet", about = "Particle-field simulator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the particle field for N frames and write a PNG snapshot.
    Render {
        /// Viewport width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Viewport height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 300)]
        frames: u64,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Pointer x position, queued before the first frame.
        #[arg(long, requires = "pointer_y")]
        pointer_x: Option<f64>,

        /// Pointer y position, queued before the first frame.
        #[arg(long, requires = "pointer_x")]
        pointer_y: Option<f64>,

        /// Simulation and style parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "field.png")]
        output: PathBuf,
    },
    /// Render from a preset JSON file (width, height, seed, params, frames).
    Preset {
        /// Path to the preset file.
        file: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "field.png")]
        output: PathBuf,
    },
    /// Print the recognized parameters, their types, ranges, and defaults.
    Schema,
}

/// Mounts a widget, optionally queues a pointer position, runs `frames`
/// frames, and writes the final raster as a PNG.
fn render_to_png(
    width: usize,
    height: usize,
    seed: u64,
    params: &serde_json::Value,
    pointer: Option<(f64, f64)>,
    frames: u64,
    output: &PathBuf,
) -> Result<u64, CliError> {
    let mut widget = Widget::mount(width, height, seed, params)?;
    if let Some((x, y)) = pointer {
        widget.handle_event(Event::PointerMove { x, y });
    }
    let rendered = run_frames(&mut widget, frames)?;
    let raster = widget
        .raster()
        .ok_or_else(|| CliError::Sim("widget lost its surface".into()))?;
    snapshot::write_png(raster, output)?;
    widget.unmount();
    Ok(rendered)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            width,
            height,
            frames,
            seed,
            pointer_x,
            pointer_y,
            params,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let pointer = pointer_x.zip(pointer_y);

            let rendered = render_to_png(width, height, seed, &params, pointer, frames, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "frames": rendered,
                    "seed": seed,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {width}x{height} field ({rendered} frames, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
        Command::Preset { file, output } => {
            let text = std::fs::read_to_string(&file)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", file.display())))?;
            let preset: Preset = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid preset: {e}")))?;
            preset.validate()?;

            let rendered = render_to_png(
                preset.width,
                preset.height,
                preset.seed,
                &preset.params,
                None,
                preset.frames as u64,
                &output,
            )?;

            if cli.json {
                let info = serde_json::json!({
                    "preset": file.display().to_string(),
                    "frames": rendered,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered preset {} ({rendered} frames) -> {}",
                    file.display(),
                    output.display()
                );
            }
        }
        Command::Schema => {
            // A minimal field instance just to read the schema off the trait.
            let field = Field::from_json(16, 16, 0, &serde_json::json!({}))
                .map_err(CliError::from)?;
            let schema = serde_json::json!({
                "field": field.param_schema(),
                "edges": EdgeStyle::param_schema(),
            });
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
