//! Stockwatch CLI - inventory stock reporting from sheet data.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report {
            file,
            dataset,
            query,
            json,
        } => commands::report::run(file, &dataset, query.as_deref(), json, cli.verbose),

        Commands::Fetch {
            sheet_id,
            sheet_name,
            dataset,
            query,
            json,
        } => commands::fetch::run(
            &sheet_id,
            &sheet_name,
            &dataset,
            query.as_deref(),
            json,
            cli.verbose,
        ),

        Commands::Datasets => commands::datasets::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
