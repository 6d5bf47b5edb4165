//! Run command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use closure_study::{Section, Walkthrough};
use closure_study_config::{ConfigLoader, OutputFormat};
use tracing::info;

use crate::style::{print_transcript, set_no_color};

/// Runs the selected sections (all when `sections` is empty) and prints the
/// transcript.
pub fn run(project_dir: &Path, sections: &[Section], format: Option<OutputFormat>) -> Result<()> {
    let config = ConfigLoader::new()
        .with_project_dir(project_dir)
        .load()
        .context("Failed to load configuration")?;

    if !config.output.color {
        set_no_color(true);
    }

    let selected = if sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        sections.to_vec()
    };
    info!(sections = selected.len(), "running walkthrough");

    let transcript = Walkthrough::new(config.demo_input())
        .run(&selected)
        .context("Walkthrough failed")?;

    match format.unwrap_or(config.output.format) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&transcript)?;
            println!("{json}");
        }
        OutputFormat::Text => print_transcript(&transcript),
    }

    Ok(())
}
