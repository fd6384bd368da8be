//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Configuration validation
//! - Label rules loading

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, DEFAULT_CONFIG_PATH, ENV_PREFIX};
