//! Drawing surface port definition.

use crate::domain::tiling::TileRect;

/// Immediate-mode target for filled squares.
///
/// Implementations clip to their own bounds; tiles on the last row or
/// column may extend past the surface.
pub trait FillSurface<C> {
    /// Fills one square with its color.
    fn fill_rect(&mut self, tile: &TileRect<C>);
}

impl<C, S: FillSurface<C> + ?Sized> FillSurface<C> for &mut S {
    fn fill_rect(&mut self, tile: &TileRect<C>) {
        (**self).fill_rect(tile);
    }
}
