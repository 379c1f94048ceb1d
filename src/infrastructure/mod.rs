//! Infrastructure layer: configuration and logging setup.

/// Application configuration.
pub mod config;
/// Log subscriber setup.
pub mod logging;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use logging::init_logging;
