//! Configuration loader with multi-source merging

use crate::{LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, StudyConfig};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// A config file layer, lowest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigLayer {
    /// ~/.config/closure-study/config.toml
    User,
    /// closure-study.toml
    Project,
    /// closure-study.local.toml
    Local,
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigLayer::User => "user",
            ConfigLayer::Project => "project",
            ConfigLayer::Local => "local",
        })
    }
}

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "CLS".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "CLS")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/closure-study/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// The per-user config file, if the platform has a home directory
    pub fn user_config_file() -> Option<PathBuf> {
        ProjectDirs::from("com", "ClosureStudy", "closure-study")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// The project config file this loader reads
    pub fn project_config_file(&self) -> PathBuf {
        self.project_dir.join(PROJECT_CONFIG_FILE)
    }

    /// The local override file this loader reads
    pub fn local_config_file(&self) -> PathBuf {
        self.project_dir.join(LOCAL_CONFIG_FILE)
    }

    /// Config files that exist and will be merged, lowest precedence first
    pub fn present_files(&self) -> Vec<(ConfigLayer, PathBuf)> {
        let user = if self.include_user_config {
            Self::user_config_file()
        } else {
            None
        };

        [
            (ConfigLayer::User, user),
            (ConfigLayer::Project, Some(self.project_config_file())),
            (ConfigLayer::Local, Some(self.local_config_file())),
        ]
        .into_iter()
        .filter_map(|(layer, path)| path.filter(|p| p.exists()).map(|p| (layer, p)))
        .collect()
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<StudyConfig> {
        // Built-in defaults come from `#[serde(default)]` on deserialize, so
        // a list set in any file replaces the default list whole
        let mut builder = config::Config::builder();

        for (_, path) in self.present_files() {
            builder = builder.add_source(
                config::File::from(path)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // CLS_DEMO__FIRST_INCREMENT=3
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let study_config: StudyConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        study_config.validate()?;

        Ok(study_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> StudyConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use std::fs;
    use tempfile::tempdir;

    fn loader_for(dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(dir)
            .with_env_prefix("CLS_TEST_UNSET")
            .without_user_config()
    }

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = loader_for(temp_dir.path())
            .load()
            .expect("Failed to load config");

        assert_eq!(config, StudyConfig::default());
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[demo]
numbers = [3, 1, 2]
customers = ["Ada", "Grace"]
first_increment = 5

[output]
format = "json"
"#;
        fs::write(project_dir.join("closure-study.toml"), config_content)
            .expect("Failed to write config");

        let config = loader_for(project_dir)
            .load()
            .expect("Failed to load config");

        assert_eq!(config.demo.numbers, vec![3, 1, 2]);
        assert_eq!(config.demo.customers, vec!["Ada", "Grace"]);
        assert_eq!(config.demo.first_increment, 5);
        assert_eq!(config.demo.second_increment, 7);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("closure-study.toml"),
            r#"
[output]
color = true
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("closure-study.local.toml"),
            r#"
[output]
color = false
"#,
        )
        .expect("Failed to write local config");

        let config = loader_for(project_dir)
            .load()
            .expect("Failed to load config");

        assert!(!config.output.color);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("closure-study.toml"),
            "[demo]\nfirst_increment = 0\n",
        )
        .expect("Failed to write config");

        assert!(loader_for(project_dir).load().is_err());
        assert_eq!(
            loader_for(project_dir).load_or_default(),
            StudyConfig::default()
        );
    }

    #[test]
    fn test_present_files_in_precedence_order() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();
        let loader = loader_for(project_dir);

        assert_eq!(loader.project_config_file(), project_dir.join("closure-study.toml"));
        assert!(loader.present_files().is_empty());

        fs::write(loader.local_config_file(), "[output]\ncolor = false\n")
            .expect("Failed to write local config");
        fs::write(loader.project_config_file(), "[output]\ncolor = true\n")
            .expect("Failed to write project config");

        let layers: Vec<ConfigLayer> = loader
            .present_files()
            .into_iter()
            .map(|(layer, _)| layer)
            .collect();
        assert_eq!(layers, [ConfigLayer::Project, ConfigLayer::Local]);
    }

    #[test]
    fn test_user_config_file_is_named_for_the_app() {
        // Platform dependent, but never panics
        if let Some(path) = ConfigLoader::user_config_file() {
            assert!(path.to_string_lossy().contains("closure-study"));
            assert!(path.ends_with("config.toml"));
        }
    }

    // Environment overrides are exercised through the binary in
    // closure-study-cli/tests/command_integration.rs, where each child
    // process gets its own environment.
}
