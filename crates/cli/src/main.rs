#![deny(unsafe_code)]
//! CLI binary for the pixelops image toolkit.
//!
//! Subcommands:
//! - `process <input>`: load a PNG, apply an operation list, write a PNG
//! - `info <input>`: print dimensions and per-channel statistics
//! - `list`: print available operations
//!
//! Diagnostic logging goes to stderr and is controlled by `RUST_LOG`.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use pixelops_core::{Image, Op};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "pixelops", about = "Pixel-level image operations")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a list of operations to a PNG and write the result.
    Process {
        /// Input PNG path.
        input: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Operations as a JSON array, e.g. '[{"op":"shift","channel":0,"delta":0.2}]'.
        #[arg(long, default_value = "[]")]
        ops: String,
    },
    /// Print dimensions and per-channel min/max/mean of a PNG.
    Info {
        /// Input PNG path.
        input: PathBuf,
    },
    /// List available operations.
    List,
}

/// Per-channel min, max and mean as a JSON array.
fn channel_stats(im: &Image) -> Value {
    (0..im.channels())
        .map(|c| {
            let plane = im.channel(c);
            let min = plane.iter().copied().fold(f32::INFINITY, f32::min);
            let max = plane.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let mean = if plane.is_empty() {
                0.0
            } else {
                plane.iter().map(|&v| v as f64).sum::<f64>() / plane.len() as f64
            };
            json!({"channel": c, "min": min, "max": max, "mean": mean})
        })
        .collect()
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let ops = Op::list_names();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&json!({ "ops": ops }))?);
            } else {
                println!("Operations:");
                for name in ops {
                    println!("  {name}");
                }
            }
        }
        Command::Info { input } => {
            let im = pixelops_io::load_image(&input)?;
            let stats = channel_stats(&im);
            if cli.json {
                let info = json!({
                    "input": input.display().to_string(),
                    "channels": im.channels(),
                    "height": im.height(),
                    "width": im.width(),
                    "stats": stats,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{}: {} channels, {}x{}",
                    input.display(),
                    im.channels(),
                    im.width(),
                    im.height()
                );
                for s in stats.as_array().into_iter().flatten() {
                    println!(
                        "  channel {}: min {:.4} max {:.4} mean {:.4}",
                        s["channel"],
                        s["min"].as_f64().unwrap_or_default(),
                        s["max"].as_f64().unwrap_or_default(),
                        s["mean"].as_f64().unwrap_or_default(),
                    );
                }
            }
        }
        Command::Process { input, output, ops } => {
            let ops = Op::parse_list(&ops)
                .map_err(|e| CliError::Input(format!("invalid --ops JSON: {e}")))?;

            let mut im = pixelops_io::load_image(&input)?;
            for op in &ops {
                tracing::debug!(op = op.name(), channels = im.channels(), "applying");
                im = op.apply(im)?;
            }

            pixelops_io::save_png(&im, &output)?;

            if cli.json {
                let info = json!({
                    "input": input.display().to_string(),
                    "output": output.display().to_string(),
                    "ops": ops,
                    "channels": im.channels(),
                    "height": im.height(),
                    "width": im.width(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "processed {} ({} ops, {}x{}, {} channels) -> {}",
                    input.display(),
                    ops.len(),
                    im.width(),
                    im.height(),
                    im.channels(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
