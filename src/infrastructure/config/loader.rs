use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::{Config, LabelRules};

/// Project-local configuration file, merged over the defaults.
pub const DEFAULT_CONFIG_PATH: &str = ".github/card-labeler.config.yaml";

/// Prefix of environment overrides, e.g. `CARD_LABELER_GITHUB__TIMEOUT_SECS`.
pub const ENV_PREFIX: &str = "CARD_LABELER_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid API URL: {0}. Must start with http:// or https://")]
    InvalidApiUrl(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid max_retries: {0}. Must be at most 10")]
    InvalidMaxRetries(u32),

    #[error(
        "Invalid backoff configuration: initial_backoff_ms ({0}) must be positive and not exceed max_backoff_ms ({1})"
    )]
    InvalidBackoff(u64, u64),

    #[error("No GitHub token configured. Set GITHUB_TOKEN or pass --token")]
    MissingToken,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .github/card-labeler.config.yaml (optional)
    /// 3. Environment variables (CARD_LABELER_* prefix, `__` separates nested keys)
    pub fn load() -> Result<Config> {
        Self::load_from_file(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from a specific file, still honoring env overrides.
    ///
    /// A missing file is not an error; the defaults apply.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| {
                format!("Failed to load config from {}", path.as_ref().display())
            })?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let api_url = &config.github.api_url;
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_url.clone()));
        }

        if config.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.github.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.retry.max_retries > 10 {
            return Err(ConfigError::InvalidMaxRetries(config.retry.max_retries));
        }

        if config.retry.max_retries > 0
            && (config.retry.initial_backoff_ms == 0
                || config.retry.initial_backoff_ms > config.retry.max_backoff_ms)
        {
            return Err(ConfigError::InvalidBackoff(
                config.retry.initial_backoff_ms,
                config.retry.max_backoff_ms,
            ));
        }

        Ok(())
    }

    /// Commands that call the API need a token; the others do not.
    pub fn require_token(config: &Config) -> Result<(), ConfigError> {
        if config.github.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(())
    }

    /// Read and parse the label rules file.
    pub fn load_rules(path: impl AsRef<Path>) -> Result<LabelRules> {
        let path = path.as_ref();
        let display = path.display();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read label rules from {display}"))?;
        let rules = LabelRules::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse label rules in {display}"))?;
        Ok(rules)
    }
}
