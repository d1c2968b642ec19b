use std::error::Error;

use clap::{Parser, Subcommand};
use inp_cli::commands::{
    bounds::{self, BoundsArgs},
    classify::{self, ClassifyArgs},
    registry::{self, RegistryArgs},
    search::{self, SearchArgs},
};
use inp_cli::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "inp",
    about = "Search for graphs whose independence number the known bounds cannot pin down"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search connected graphs by increasing order for the first difficult one.
    Search(SearchArgs),
    /// Classify a single graph and print the verdict.
    Classify(ClassifyArgs),
    /// Evaluate every registered property and bound on a single graph.
    Bounds(BoundsArgs),
    /// Print the provenance record of a registry preset.
    Registry(RegistryArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Search(args) => search::run(&args),
        Command::Classify(args) => {
            init_logging(false)?;
            classify::run(&args)
        }
        Command::Bounds(args) => {
            init_logging(false)?;
            bounds::run(&args)
        }
        Command::Registry(args) => {
            init_logging(false)?;
            registry::run(&args)
        }
    }
}
