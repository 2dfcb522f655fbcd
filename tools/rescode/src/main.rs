//! rescode - resistor color code tool
//!
//! Encodes resistance values into color bands, decodes band selections,
//! and combines resistors in series or parallel.

mod bands;
mod circuit;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::Output;

#[derive(Parser)]
#[command(name = "rescode")]
#[command(about = "Resistor color code encoder, decoder and calculator")]
#[command(long_about = "Resistor color code encoder, decoder and calculator

Commands:
  encode      Convert a resistance into color bands
  decode      Read a resistance from band colors
  format      Show a resistance with its unit prefix
  circuit     Combine resistors in series or parallel
  table       Print the color reference table
  presets     Show color bands for common values

Examples:
  rescode encode 4.7k                    # Yellow Violet Red Gold
  rescode encode 10.2 -b 5 -t 1          # 5-band, ±1%
  rescode decode yellow violet red gold  # 4.7kΩ ±5%
  rescode decode brown black - gold      # Missing multiplier
  rescode circuit parallel 1k 1k --voltage 5 # 500Ω, 0.0100 A, 0.0500 W

Use 'rescode <command> --help' for more information on a specific command.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (default: ./rescode.toml if present)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a resistance into color bands
    Encode {
        /// Resistance, with optional unit (470, 4.7k, 1M, 2.2kΩ)
        value: String,

        /// Tolerance in percent (0.1, 0.25, 0.5, 1, 2, 5, 10)
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Number of bands (4 or 5)
        #[arg(short, long)]
        bands: Option<u8>,
    },

    /// Read a resistance from band colors, in band order
    Decode {
        /// Band colors; use '-' for a band not yet selected
        #[arg(required = true)]
        colors: Vec<String>,

        /// Number of bands (4 or 5)
        #[arg(short, long)]
        bands: Option<u8>,
    },

    /// Show a resistance with its unit prefix
    Format {
        /// Resistance, with optional unit
        value: String,
    },

    /// Combine resistors in series or parallel
    #[command(about = "Combine resistors in series or parallel")]
    Circuit {
        #[command(subcommand)]
        command: circuit::CircuitCommands,
    },

    /// Print the color reference table
    Table,

    /// Show color bands for common resistor values
    Presets {
        /// Tolerance in percent
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Number of bands (4 or 5)
        #[arg(short, long)]
        bands: Option<u8>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    // Configure colored output
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = Output {
        json: cli.json || config.output.json,
    };

    match cli.command {
        Commands::Encode {
            value,
            tolerance,
            bands,
        } => bands::handle_encode(&value, tolerance, bands, &config, output),
        Commands::Decode { colors, bands } => {
            bands::handle_decode(&colors, bands, &config, output)
        },
        Commands::Format { value } => bands::handle_format(&value, output),
        Commands::Circuit { command } => circuit::handle_command(command, output),
        Commands::Table => bands::handle_table(output),
        Commands::Presets { tolerance, bands } => {
            bands::handle_presets(tolerance, bands, &config, output)
        },
    }
}
