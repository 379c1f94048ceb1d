//! Domain layer with the tiling core, navigation and port definitions.

/// Error types.
pub mod errors;
/// Screen navigation.
pub mod navigation;
/// Port definitions.
pub mod ports;
/// Checkerboard tiling.
pub mod tiling;

pub use errors::TilingError;
pub use navigation::{NavigationAction, NavigationStack, ScreenId};
pub use ports::FillSurface;
pub use tiling::{TileGrid, TileRect, Tiles, TilingConfig, paint, render, should_redraw, tiles};
