//! Configuration management for closure-study
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (CLS_* prefix, `__` between nested keys)
//! 3. closure-study.local.toml (gitignored, local overrides)
//! 4. closure-study.toml (git-tracked, project config)
//! 5. ~/.config/closure-study/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use closure_study::DemoInput;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::{ConfigLayer, ConfigLoader};

/// Git-tracked project config, read from the project directory
pub const PROJECT_CONFIG_FILE: &str = "closure-study.toml";

/// Gitignored overrides, read after [`PROJECT_CONFIG_FILE`]
pub const LOCAL_CONFIG_FILE: &str = "closure-study.local.toml";

/// Calls the walkthrough makes on the first incrementor (three, one more
/// after the second incrementor, one through the alias)
const FIRST_INCREMENTOR_CALLS: i64 = 5;

/// Main closure-study configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    pub demo: DemoConfig,
    pub output: OutputConfig,
}

/// Values the walkthrough runs on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub numbers: Vec<i64>,
    pub customers: Vec<String>,
    pub first_increment: i64,
    pub second_increment: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let input = DemoInput::default();
        Self {
            numbers: input.numbers,
            customers: input.customers,
            first_increment: input.first_increment,
            second_increment: input.second_increment,
        }
    }
}

impl From<DemoConfig> for DemoInput {
    fn from(demo: DemoConfig) -> Self {
        Self {
            numbers: demo.numbers,
            customers: demo.customers,
            first_increment: demo.first_increment,
            second_increment: demo.second_increment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl StudyConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// The walkthrough input described by this configuration
    pub fn demo_input(&self) -> DemoInput {
        self.demo.clone().into()
    }

    /// Reject values the walkthrough cannot use meaningfully
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self
            .demo
            .customers
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(ConfigError::ValidationError(format!(
                "demo.customers[{index}] is blank"
            )));
        }

        if self.demo.first_increment == 0 || self.demo.second_increment == 0 {
            return Err(ConfigError::ValidationError(
                "increments must be non-zero".to_string(),
            ));
        }

        if self
            .demo
            .first_increment
            .checked_mul(FIRST_INCREMENTOR_CALLS)
            .is_none()
        {
            return Err(ConfigError::ValidationError(format!(
                "demo.first_increment {} overflows after {FIRST_INCREMENTOR_CALLS} calls",
                self.demo.first_increment
            )));
        }

        Ok(())
    }

    /// Write the defaults as a project config file, refusing to overwrite
    pub fn write_default(project_dir: impl AsRef<Path>) -> Result<PathBuf, ConfigError> {
        let path = project_dir.as_ref().join(PROJECT_CONFIG_FILE);
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path));
        }

        let rendered = toml::to_string_pretty(&StudyConfig::default())?;
        std::fs::write(&path, rendered).map_err(|source| ConfigError::WriteError {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
