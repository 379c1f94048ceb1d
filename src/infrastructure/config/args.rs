use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line overrides for the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "tilegate",
    version,
    about = "Login, registration and success screens over a checkerboard",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Color of the top-left background square.
    #[arg(long)]
    pub color_a: Option<String>,

    /// Color of the alternating background squares.
    #[arg(long)]
    pub color_b: Option<String>,

    /// Background square side in terminal columns.
    #[arg(long)]
    pub cell_size: Option<f64>,

    /// Play the success screen intro.
    #[arg(long)]
    pub enable_animations: Option<bool>,
}
