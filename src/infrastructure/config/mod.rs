//! Application configuration.

/// Configuration file model.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Configuration file loading.
pub mod storage;

pub use app_config::{
    AppConfig, BackgroundConfig, LogLevel, MAX_CELL_SIZE, MIN_CELL_SIZE, ThemeConfig, UiConfig,
    clamp_cell_size,
};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
