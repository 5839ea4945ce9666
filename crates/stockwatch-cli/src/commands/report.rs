//! Report command - process a saved snapshot file.

use std::path::PathBuf;

use colored::{Color, Colorize};
use stockwatch::input::load_snapshot;
use stockwatch::{DatasetConfig, DatasetReport, Stockwatch};

pub fn run(
    file: PathBuf,
    dataset: &str,
    query: Option<&str>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = resolve_dataset(dataset)?;

    println!(
        "{} {}",
        "Processing".cyan().bold(),
        file.display().to_string().white()
    );

    let table = load_snapshot(&file)?;
    let pipeline = Stockwatch::new(config);
    let report = match query {
        Some(q) => pipeline.process_with_query(&table, q),
        None => pipeline.process(&table),
    };

    print_report(&report, pipeline.config(), json, verbose)
}

/// Resolve a dataset name, with a helpful message for typos.
pub fn resolve_dataset(name: &str) -> Result<DatasetConfig, String> {
    DatasetConfig::builtin(name).ok_or_else(|| {
        format!(
            "Unknown dataset: {}. Use one of: {}.",
            name,
            DatasetConfig::builtin_names().join(", ")
        )
    })
}

/// Render a report to stdout. Shared by `report` and `fetch`.
pub fn print_report(
    report: &DatasetReport,
    config: &DatasetConfig,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if report.summary.total_items == 0 {
        println!("{}", "No data available".yellow());
        return Ok(());
    }

    if verbose {
        println!();
        println!("{}", "Schema:".yellow().bold());
        for col in &report.schema {
            println!(
                "  {:28} {:12} {:?}",
                col.key,
                format!("{:?}", col.value_kind),
                col.render_hint
            );
        }
    }

    println!();
    println!("{}", "Stock level distribution:".yellow().bold());
    for (name, tally) in &report.distribution {
        println!(
            "  {:14} {:>5}  ({:.1}% of total)",
            name.color(band_color(config, name)).bold(),
            tally.count,
            tally.percent_of_total
        );
    }

    println!();
    println!(
        "{} items, {} critical",
        report.summary.total_items.to_string().white().bold(),
        report.summary.critical_items.to_string().red().bold()
    );
    if let Some(total_value) = report.summary.total_value {
        println!(
            "Total value: {}",
            format!("{:.0}", total_value).white().bold()
        );
    }

    Ok(())
}

/// Map a band's color token onto a terminal color.
fn band_color(config: &DatasetConfig, band_name: &str) -> Color {
    let token = config
        .bands
        .bands()
        .iter()
        .find(|band| band.name == band_name)
        .map(|band| band.color.as_str())
        .unwrap_or("white");

    match token {
        "red" => Color::Red,
        "amber" => Color::Yellow,
        "emerald" => Color::Green,
        "blue" => Color::Blue,
        "purple" => Color::Magenta,
        _ => Color::White,
    }
}
