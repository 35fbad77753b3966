//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sqloader.toml` in current directory
//! 4. `~/.config/sqloader/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [loader]
//! file = "queries.sql"        # default annotated SQL file
//!
//! [output]
//! format = "text"             # text, json, yaml
//! color = true
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQLOADER_FILE` | Default annotated SQL file |
//! | `SQLOADER_FORMAT` | Default output format |

use std::{env, fs, path::PathBuf};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub output: OutputConfig
}

/// Loader configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoaderConfig {
    /// Default annotated SQL file to load
    pub file: Option<String>
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default output format (text, json, yaml)
    pub format: Option<String>,
    /// Whether colored output is enabled by default
    #[serde(default = "default_color")]
    pub color:  bool
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color:  true
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sqloader.toml)
    /// 3. Config file in home directory (~/.config/sqloader/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sqloader")
                .join("config.toml");

            if home_config.exists() {
                let content = fs::read_to_string(&home_config)
                    .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
                config = toml::from_str(&content)
                    .map_err(|e| config_error(format!("Invalid config file: {}", e)))?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".sqloader.toml");
        if local_config.exists() {
            let content = fs::read_to_string(&local_config)
                .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
            config = toml::from_str(&content)
                .map_err(|e| config_error(format!("Invalid config file: {}", e)))?;
        }

        // Override with environment variables
        if let Ok(file) = env::var("SQLOADER_FILE") {
            config.loader.file = Some(file);
        }

        if let Ok(format) = env::var("SQLOADER_FORMAT") {
            config.output.format = Some(format);
        }

        Ok(config)
    }
}
