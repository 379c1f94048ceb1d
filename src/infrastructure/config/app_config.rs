//! Application configuration.

use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use super::args::CliArgs;
use super::storage::ConfigError;
use crate::domain::tiling::TilingConfig;
use crate::presentation::theme::{ColorConverter, Theme, service::try_parse_color};

pub(crate) const APP_NAME: &str = "tilegate";
pub(crate) const APP_QUALIFIER: &str = "dev";
pub(crate) const APP_ORGANIZATION: &str = "tilegate";

/// Smallest background square side, in terminal columns.
pub const MIN_CELL_SIZE: f64 = 2.0;
/// Largest background square side, in terminal columns.
pub const MAX_CELL_SIZE: f64 = 32.0;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overlaid with
/// command-line arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Checkerboard background.
    #[serde(default)]
    pub background: BackgroundConfig,
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Play the success screen intro.
    #[serde(default = "default_true")]
    pub enable_animations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

/// Checkerboard background configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    /// Color of the top-left square (name or hex code).
    #[serde(default = "default_color_a")]
    pub color_a: String,

    /// Color of the other squares. Derived from `color_a` when unset.
    #[serde(default)]
    pub color_b: Option<String>,

    /// Square side in terminal columns.
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,

    /// Terminal rows per column-width unit.
    #[serde(default = "default_vertical_scale")]
    pub vertical_scale: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color_a: default_color_a(),
            color_b: Some(default_color_b()),
            cell_size: default_cell_size(),
            vertical_scale: default_vertical_scale(),
        }
    }
}

impl BackgroundConfig {
    /// Builds the tiling configuration. A valid cell size outside
    /// `[MIN_CELL_SIZE, MAX_CELL_SIZE]` is clamped into that range.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidColor` for unparseable colors and
    /// `ConfigError::InvalidBackground` for a non-positive or non-finite
    /// cell size.
    pub fn to_tiling(&self) -> Result<TilingConfig<Color>, ConfigError> {
        let color_a = parse_config_color(&self.color_a)?;
        let color_b = match &self.color_b {
            Some(s) => parse_config_color(s)?,
            None => ColorConverter::companion(color_a),
        };
        let tiling = TilingConfig::new(color_a, color_b, self.cell_size)?;

        let bounded = clamp_cell_size(self.cell_size);
        if bounded == self.cell_size {
            return Ok(tiling);
        }
        warn!(
            requested = self.cell_size,
            used = bounded,
            "Background cell size out of range"
        );
        Ok(tiling.with_cell_size(bounded)?)
    }
}

/// Clamps a cell size into `[MIN_CELL_SIZE, MAX_CELL_SIZE]`.
#[must_use]
pub fn clamp_cell_size(cell_size: f64) -> f64 {
    cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

fn parse_config_color(s: &str) -> Result<Color, ConfigError> {
    try_parse_color(s).ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

fn default_color_a() -> String {
    "#263238".to_string()
}

fn default_color_b() -> String {
    "#37474f".to_string()
}

fn default_cell_size() -> f64 {
    8.0
}

fn default_vertical_scale() -> f64 {
    0.5
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(color_a) = args.color_a {
            self.background.color_a = color_a;
        }
        if let Some(color_b) = args.color_b {
            self.background.color_b = Some(color_b);
        }
        if let Some(cell_size) = args.cell_size {
            self.background.cell_size = cell_size;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
    }

    /// Theme built from the accent color.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::new(&self.theme.accent_color)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("tilegate.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
            background: BackgroundConfig::default(),
        }
    }
}
