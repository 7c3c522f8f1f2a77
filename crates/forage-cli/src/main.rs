//! Forage CLI - run two-colony foraging simulations from the command line.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::commands::run::RunOptions;
use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "forage")]
#[command(author, version, about = "Forage - two ant colonies competing for food", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default forage.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Run a simulation
    Run {
        /// Config file (default: forage.toml in this or a parent directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of steps to run
        #[arg(short, long)]
        steps: Option<u64>,

        /// Side length of the grid
        #[arg(short, long)]
        grid_size: Option<usize>,

        /// Ants per colony
        #[arg(short, long)]
        ants: Option<usize>,

        /// Initial resource placement attempts
        #[arg(short, long)]
        resources: Option<usize>,

        /// Random seed, for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Write a JSON snapshot of the final state here
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run {
            config,
            steps,
            grid_size,
            ants,
            resources,
            seed,
            snapshot,
            quiet,
        } => {
            let options = RunOptions {
                config_path: config,
                overrides: Overrides {
                    grid_size,
                    ants,
                    resources,
                    steps,
                    seed,
                },
                snapshot,
                quiet,
            };
            commands::run::run(options, cli.verbose)
        }
    }
}
