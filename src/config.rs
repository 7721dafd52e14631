//! Configuration management for the schema linter
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (schemalint.toml)
//! - Environment variables (SCHEMALINT_*)
//!
//! ## Example config file (schemalint.toml):
//! ```toml
//! [rules]
//! disabled = ["missing-timestamps", "enum-candidate"]
//!
//! [report]
//! format = "json"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Main configuration for the schema linter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    /// Rule battery settings
    #[serde(default)]
    pub rules: RulesConfig,

    /// Report rendering settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Rule battery configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rule names to remove from the default battery
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format (text or json)
    #[serde(default = "default_format")]
    pub format: ReportFormat,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Grouped human-readable text
    Text,
    /// Pretty-printed JSON issue list
    Json,
}

fn default_format() -> ReportFormat {
    ReportFormat::Text
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl LintConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // Load from default locations
        let config_locations = ["schemalint.toml", ".schemalint.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from specified path
        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Load from environment variables (SCHEMALINT_*)
        builder = builder.add_source(
            Environment::with_prefix("SCHEMALINT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
