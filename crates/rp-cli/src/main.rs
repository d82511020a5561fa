//! CLI frontend for the Ripples wave simulator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::RunOptions;

#[derive(Parser)]
#[command(
    name = "rp",
    about = "Ripples — a discrete 2D ripple simulator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless and report amplitude statistics
    Run {
        #[command(flatten)]
        options: RunOptions,

        /// Print min/max for every tick
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the simulation and draw the final field as ASCII shades
    Preview {
        #[command(flatten)]
        options: RunOptions,

        /// Sample every Nth cell (default: fit within 80 columns)
        #[arg(short, long)]
        every: Option<usize>,
    },

    /// Print the default configuration as JSON
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a configuration file
    Check {
        /// Path to a JSON configuration file
        path: PathBuf,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { options, verbose } => commands::run::run(&options, verbose),
        Commands::Preview { options, every } => commands::preview::run(&options, every),
        Commands::Config { output } => commands::config::run(output.as_deref()),
        Commands::Check { path } => commands::check::run(&path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
