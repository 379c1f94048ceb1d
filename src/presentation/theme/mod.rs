//! Colors and styles.

/// Color conversions.
pub mod adapter;
/// Background palettes.
pub mod palette;
/// Theme styles.
pub mod service;

pub use adapter::ColorConverter;
pub use palette::{BackgroundPalette, PALETTES};
pub use service::{Theme, parse_color};
