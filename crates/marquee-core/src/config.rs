use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::load::Columns;

/// Configuration for marquee.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (MARQUEE_* prefix)
/// 3. Config file (~/.config/marquee/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the catalog CSV file.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/catalog.csv
    /// - ENV: MARQUEE_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/catalog.csv"
    /// - Default: ~/.local/share/marquee/catalog.csv
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Header of the title column.
    #[serde(default = "default_title_column")]
    pub title_column: String,

    /// Header of the tags column.
    #[serde(default = "default_tags_column")]
    pub tags_column: String,

    /// Number of recommendations returned when none is requested.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Maximum vocabulary size of the tag index.
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Whether English stop words are removed from tag text.
    #[serde(default = "default_stop_words")]
    pub stop_words: bool,

    /// Default log filter, overridden by RUST_LOG.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            title_column: default_title_column(),
            tags_column: default_tags_column(),
            top_n: default_top_n(),
            max_features: default_max_features(),
            stop_words: default_stop_words(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/marquee/config.toml
    /// Reads environment variables with MARQUEE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("marquee");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with a custom catalog path.
    ///
    /// This is used when the --catalog CLI flag is provided.
    pub fn load_with_catalog_path(catalog_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.catalog_path = catalog_path;
        Ok(config)
    }

    /// The catalog column names this configuration selects.
    #[must_use]
    pub fn columns(&self) -> Columns {
        Columns {
            title: self.title_column.clone(),
            tags: self.tags_column.clone(),
        }
    }
}

/// Returns: ~/.local/share/marquee/catalog.csv (or platform equivalent)
fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
        .join("catalog.csv")
}

fn default_title_column() -> String {
    Columns::default().title
}

fn default_tags_column() -> String {
    Columns::default().tags
}

fn default_top_n() -> usize {
    7
}

fn default_max_features() -> usize {
    5000
}

fn default_stop_words() -> bool {
    true
}

fn default_log_level() -> String {
    String::from("info")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/marquee/config.toml
/// - macOS: ~/Library/Application Support/marquee/config.toml
/// - Windows: %APPDATA%\marquee\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Marquee Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (MARQUEE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the catalog CSV file
#
# Can also be set via:
# - CLI: marquee --catalog /custom/catalog.csv recommend "Dark"
# - Environment: MARQUEE_CATALOG_PATH=/custom/catalog.csv
#
# Default: Platform-specific data directory
#catalog_path = "/path/to/catalog.csv"

# Header names of the title and tags columns
title_column = "title"
tags_column = "listed inside"

# Number of recommendations shown when -n is not given
top_n = 7

# Maximum number of distinct tag tokens kept in the index
max_features = 5000

# Remove English stop words ("and", "the", ...) from tag text
stop_words = true

# Default log filter; RUST_LOG takes precedence
log_level = "info"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.catalog_path.as_os_str().is_empty());
        assert_eq!(config.top_n, 7);
        assert_eq!(config.max_features, 5000);
        assert!(config.stop_words);
    }

    #[test]
    fn test_default_columns() {
        let columns = Config::default().columns();
        assert_eq!(columns, Columns::default());
        assert_eq!(columns.tags, "listed inside");
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_custom_catalog_path() {
        let custom_path = PathBuf::from("/tmp/catalog.csv");
        let config = Config::load_with_catalog_path(custom_path.clone());
        assert!(config.is_ok());
        assert_eq!(config.unwrap().catalog_path, custom_path);
    }
}
