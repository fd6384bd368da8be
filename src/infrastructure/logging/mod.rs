//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty console output on stderr
//! - Optional daily-rotated JSON log file
//! - Secret scrubbing for tokens in API error bodies

pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
pub use secret_scrubbing::SecretScrubber;
