//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `RANDOM_TOKEN__<SECTION>__<KEY>` pattern
//!
//! The `[token]` section holds default generation options; command line
//! flags override it field by field.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::TokenOptions;
use crate::service::generator::validate_count;

/// Default configuration directory, relative to the working directory.
pub const CONFIG_DIR: &str = "config";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default token options.
    pub token: TokenOptions,

    /// Output configuration.
    pub output: OutputConfig,

    /// Observability configuration.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{profile}.toml` (if a profile is given)
    /// 3. Environment variables with `RANDOM_TOKEN__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load(profile: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_DIR), profile)
    }

    /// Load configuration rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(dir: &Path, profile: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from(dir.join("default")).required(false));

        if let Some(profile) = profile {
            builder = builder.add_source(File::from(dir.join(profile)).required(false));
        }

        // RANDOM_TOKEN__TOKEN__LENGTH=32 -> token.length = 32
        let config = builder
            .add_source(
                Environment::with_prefix("RANDOM_TOKEN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_count(self.output.count)
            .map_err(|err| ConfigError::Message(format!("output.count: {err}")))?;

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be text or json, got {}",
                self.observability.log_format
            )));
        }

        Ok(())
    }
}

/// Output format for generated tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line.
    #[default]
    Text,
    /// A `{code, message, data}` JSON envelope.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Number of tokens per invocation.
    #[serde(default = "default_count")]
    pub count: u32,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

const fn default_count() -> u32 {
    1
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            format: OutputFormat::Text,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
