//! Tiling error types.

use thiserror::Error;

/// Tiling error variants.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TilingError {
    /// Cell size was zero, negative or not a finite number.
    #[error("invalid tiling configuration: cell size must be positive, got {cell_size}")]
    InvalidConfiguration {
        /// Offending cell size.
        cell_size: f64,
    },
}

impl TilingError {
    /// Returns the rejected cell size.
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        match self {
            Self::InvalidConfiguration { cell_size } => *cell_size,
        }
    }
}
