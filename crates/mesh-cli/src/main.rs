//! `meshstl`: inspect and convert STL meshes.
//!
//! # Commands
//!
//! - `meshstl info <file>` - Load a mesh and print its summary
//! - `meshstl convert <in> <out>` - Load a mesh and write it back as ASCII STL

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

/// Output style for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser)]
#[command(name = "meshstl")]
#[command(about = "Load, inspect and convert STL meshes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Suppress normal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by every command that loads a mesh.
#[derive(clap::Args)]
pub struct LoadArgs {
    /// TOML file with load settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Uniform scale applied to every vertex, overriding the config file
    #[arg(long)]
    scale: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a mesh and print its summary
    Info {
        /// Input STL file
        input: PathBuf,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Load a mesh and write it back as ASCII STL
    Convert {
        /// Input STL file
        input: PathBuf,

        /// Output STL file
        output: PathBuf,

        #[command(flatten)]
        load: LoadArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info { input, load } => commands::info::run(&input, &load, cli.format, cli.quiet),
        Commands::Convert {
            input,
            output,
            load,
        } => commands::convert::run(&input, &output, &load, cli.format, cli.quiet),
    }
}
