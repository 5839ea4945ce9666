//! Fetch command - pull a sheet tab live and report on it.

use colored::Colorize;
use stockwatch::{fetch::fetch_sheet, Stockwatch};

use super::report::{print_report, resolve_dataset};

pub fn run(
    sheet_id: &str,
    sheet_name: &str,
    dataset: &str,
    query: Option<&str>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_dataset(dataset)?;

    println!(
        "{} sheet '{}' from {}",
        "Fetching".cyan().bold(),
        sheet_name.white(),
        sheet_id.white()
    );

    let table = fetch_sheet(sheet_id, sheet_name)?;
    let pipeline = Stockwatch::new(config);
    let report = match query {
        Some(q) => pipeline.process_with_query(&table, q),
        None => pipeline.process(&table),
    };

    print_report(&report, pipeline.config(), json, verbose)
}
