//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stockwatch: inventory stock reporting from sheet data
#[derive(Parser)]
#[command(name = "stockwatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a saved snapshot (CSV export or gviz payload)
    Report {
        /// Path to the snapshot file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Dataset configuration to apply (see `stockwatch datasets`)
        #[arg(short, long, default_value = "raw-materials-table")]
        dataset: String,

        /// Filter records by a free-text query before rendering
        #[arg(short, long)]
        query: Option<String>,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch a sheet tab live and report on it
    Fetch {
        /// Spreadsheet document id
        #[arg(long)]
        sheet_id: String,

        /// Sheet tab name
        #[arg(long)]
        sheet_name: String,

        /// Dataset configuration to apply (see `stockwatch datasets`)
        #[arg(short, long, default_value = "raw-materials-table")]
        dataset: String,

        /// Filter records by a free-text query before rendering
        #[arg(short, long)]
        query: Option<String>,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in dataset configurations
    Datasets,
}
