//! Configuration management commands.

use std::path::Path;

use anyhow::{Context, Result};
use closure_study_config::{ConfigLayer, ConfigLoader, StudyConfig};

use crate::style::{print_hint, print_labeled, print_success};

/// Show current configuration.
pub fn show(project_dir: &Path, format: &str) -> Result<()> {
    let loader = ConfigLoader::new().with_project_dir(project_dir);
    let sources = loader.present_files();
    let config = loader.load().context("Failed to load configuration")?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        "toml" => {
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
        }
        "text" => {
            println!("closure-study configuration");
            println!("===========================");
            println!();

            println!("Demo:");
            print_labeled("Numbers", format!("{:?}", config.demo.numbers));
            print_labeled("Customers", config.demo.customers.join(", "));
            print_labeled("First increment", config.demo.first_increment);
            print_labeled("Second increment", config.demo.second_increment);
            println!();

            println!("Output:");
            print_labeled("Format", format!("{:?}", config.output.format));
            print_labeled("Color", config.output.color);
            println!();

            println!("Sources:");
            for (layer, path) in &sources {
                print_labeled(&layer.to_string(), path.display());
            }
            print_labeled("defaults", "built in");

            if !sources
                .iter()
                .any(|(layer, _)| *layer == ConfigLayer::Project)
            {
                println!();
                print_hint("No closure-study.toml found; showing defaults.");
            }
        }
        other => anyhow::bail!("Unknown format '{other}'. Use text, json, or toml."),
    }

    Ok(())
}

/// Write closure-study.toml with the default demo values.
pub fn init(project_dir: &Path) -> Result<()> {
    let path = StudyConfig::write_default(project_dir)?;
    print_success(&format!("Wrote {}", path.display()));
    print_hint("Edit [demo] to change the numbers, customers and increments.");
    Ok(())
}
