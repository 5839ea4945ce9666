//! Datasets command - list the built-in dataset configurations.

use colored::Colorize;
use stockwatch::{DatasetConfig, FieldMapping};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Built-in datasets:".yellow().bold());

    for name in DatasetConfig::builtin_names() {
        let config = DatasetConfig::builtin(name).ok_or("builtin lookup failed")?;

        let mapping = match &config.mapping {
            FieldMapping::Positional(fields) => format!("positional ({} fields)", fields.len()),
            FieldMapping::LabelPassthrough => "label pass-through".to_string(),
        };
        let bands: Vec<&str> = config
            .bands
            .bands()
            .iter()
            .map(|band| band.name.as_str())
            .collect();

        println!();
        println!("  {}", name.white().bold());
        println!("    mapping:  {}", mapping);
        println!("    ratio:    {} / {}", config.current_field, config.reference_field);
        println!("    bands:    {}", bands.join(" | "));
        if let Some(value_field) = &config.value_field {
            println!("    value:    sum of {}", value_field);
        }
    }

    Ok(())
}
