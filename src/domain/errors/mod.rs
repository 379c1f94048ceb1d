//! Domain error types.

mod tiling_error;

pub use tiling_error::TilingError;
