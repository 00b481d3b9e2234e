// Rust guideline compliant 2026-10-19

//! Configuration management for jrpc tools.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for jrpc behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum level of emitted log events.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether JSON output is pretty-printed.
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_pretty_json() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            pretty_json: default_pretty_json(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if it exists
    /// 3. Environment variables with `JRPC_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - An environment override or the resulting values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `JRPC_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `JRPC_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `JRPC_PRETTY_JSON` - Pretty-print JSON (true/false)
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("JRPC_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "JRPC_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("JRPC_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("JRPC_PRETTY_JSON") {
            self.pretty_json = val.parse().map_err(|_| {
                Error::InvalidConfig("JRPC_PRETTY_JSON must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }

    /// Saves the configuration as TOML at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
