//! Armstrong CLI - functional-dependency analysis from the command line.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            file,
            json,
            closures,
        } => commands::analyze::run(file, json, closures, cli.verbose),

        Commands::Closure { file, attributes } => {
            commands::closure::run(file, attributes, cli.verbose)
        }

        Commands::Keys { file, json } => commands::keys::run(file, json, cli.verbose),

        Commands::Classify { file, json } => commands::classify::run(file, json, cli.verbose),

        Commands::Decompose {
            file,
            name,
            pieces,
            json,
        } => commands::decompose::run(file, name, pieces, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
