//! closure-study CLI.
//!
//! Prints the closure semantics walkthrough, section by section.
//!
//! # Quick Start
//!
//! ```bash
//! # Print every section
//! closure-study run
//!
//! # Only the deferred-evaluation demos, as JSON
//! closure-study run --section autoclosures --format json
//!
//! # Write a config file with the default demo values
//! closure-study config init
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use closure_study::Section;
use closure_study_config::OutputFormat;

/// closure-study - closures, captures and deferred evaluation, demonstrated.
#[derive(Parser)]
#[command(name = "closure-study")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log library activity (debug level) to stderr. RUST_LOG, when set, wins.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Run the walkthrough and print its transcript.
    Run {
        /// Section to run (repeatable). Runs every section when omitted.
        #[arg(short, long = "section")]
        sections: Vec<Section>,

        /// Output format (overrides the configured one).
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Directory holding closure-study.toml.
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// List the walkthrough sections.
    Sections,

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Directory holding closure-study.toml.
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// Write closure-study.toml with the default demo values.
    Init {
        /// Directory to write closure-study.toml into.
        #[arg(short, long, default_value = ".")]
        project_dir: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the transcript; logs go to stderr. RUST_LOG, when set,
    // replaces the default level entirely.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if cli.no_color {
        style::set_no_color(true);
    }

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Run {
            sections,
            format,
            project_dir,
        } => commands::run::run(&project_dir, &sections, format.map(Into::into)),
        Commands::Sections => {
            commands::sections::run();
            Ok(())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show {
                format,
                project_dir,
            } => commands::config::show(&project_dir, &format),
            ConfigCommands::Init { project_dir } => commands::config::init(&project_dir),
        },
    }
}
