//! TileSelect CLI
//!
//! Command-line front end for the tile grid and selection engine: compute
//! covering grids, simulate drag selections, and convert quad keys.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "tileselect",
    version,
    about = "Slippy-map tile grid selection from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the tile grid covering a bounding box
    Grid(commands::grid::GridArgs),

    /// Simulate a drag selection between two points
    Select(commands::select::SelectArgs),

    /// Convert between points and quad keys
    Quadkey(commands::quadkey::QuadkeyArgs),
}

fn main() {
    tileselect::telemetry::init_logging();

    let cli = Cli::parse();
    let result: Result<(), CliError> = match cli.command {
        Commands::Grid(args) => commands::grid::run(args),
        Commands::Select(args) => commands::select::run(args),
        Commands::Quadkey(args) => commands::quadkey::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
