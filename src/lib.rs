//! Tilegate - login, registration and success screens for the terminal,
//! drawn over a checkerboard background.
//!
//! The checkerboard itself lives in [`domain::tiling`]: a pure renderer that
//! turns a surface size into colored squares, plus the change check hosts use
//! to skip redundant redraws.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing the tiling core, navigation and ports.
pub mod domain;
/// Infrastructure layer containing configuration and logging.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "tilegate";
