//! Checkerboard background widget.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use tracing::warn;

use crate::domain::ports::FillSurface;
use crate::domain::tiling::{self, TileRect, TilingConfig};

/// Terminal rows per logical unit. Cells are about twice as tall as they
/// are wide, so half a row per unit keeps squares square.
pub const DEFAULT_VERTICAL_SCALE: f64 = 0.5;

/// [`FillSurface`] over a ratatui buffer region.
///
/// One logical unit is one column wide and `vertical_scale` rows tall.
/// Fills are clipped to `area`.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    vertical_scale: f64,
}

impl<'a> BufferSurface<'a> {
    /// Wraps `area` of `buf`; a non-positive or non-finite scale falls back
    /// to [`DEFAULT_VERTICAL_SCALE`].
    #[must_use]
    pub fn new(buf: &'a mut Buffer, area: Rect, vertical_scale: f64) -> Self {
        Self {
            buf,
            area,
            vertical_scale: sanitize_scale(vertical_scale),
        }
    }

    /// Logical width of the region.
    #[must_use]
    pub fn logical_width(&self) -> f64 {
        f64::from(self.area.width)
    }

    /// Logical height of the region.
    #[must_use]
    pub fn logical_height(&self) -> f64 {
        f64::from(self.area.height) / self.vertical_scale
    }
}

fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        DEFAULT_VERTICAL_SCALE
    }
}

// Floors both edges so neighbouring tiles partition the cells exactly.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cells(start: f64, end: f64, limit: u16) -> (u16, u16) {
    let clamp = |v: f64| v.floor().clamp(0.0, f64::from(limit)) as u16;
    (clamp(start), clamp(end))
}

impl FillSurface<Color> for BufferSurface<'_> {
    fn fill_rect(&mut self, tile: &TileRect<Color>) {
        let (x0, x1) = to_cells(tile.x, tile.right(), self.area.width);
        let (y0, y1) = to_cells(
            tile.y * self.vertical_scale,
            tile.bottom() * self.vertical_scale,
            self.area.height,
        );

        for y in y0..y1 {
            for x in x0..x1 {
                self.buf[(self.area.x + x, self.area.y + y)].set_bg(tile.color);
            }
        }
    }
}

/// Paints a [`TilingConfig`] behind everything else in an area.
pub struct Checkerboard<'a> {
    config: &'a TilingConfig<Color>,
    vertical_scale: f64,
}

impl<'a> Checkerboard<'a> {
    /// Creates the widget with the default vertical scale.
    #[must_use]
    pub fn new(config: &'a TilingConfig<Color>) -> Self {
        Self {
            config,
            vertical_scale: DEFAULT_VERTICAL_SCALE,
        }
    }

    /// Sets terminal rows per logical unit.
    #[must_use]
    pub fn vertical_scale(mut self, scale: f64) -> Self {
        self.vertical_scale = scale;
        self
    }
}

impl Widget for Checkerboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = BufferSurface::new(buf, area, self.vertical_scale);
        let (width, height) = (surface.logical_width(), surface.logical_height());

        if let Err(e) = tiling::paint(&mut surface, width, height, self.config) {
            warn!(error = %e, "Skipping checkerboard background");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cell_size: f64) -> TilingConfig<Color> {
        TilingConfig::new(Color::Black, Color::White, cell_size).unwrap()
    }

    #[test]
    fn test_square_cells_at_half_scale() {
        let cfg = config(4.0);
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);

        Checkerboard::new(&cfg).render(area, &mut buf);

        // Each tile is 4 columns by 2 rows.
        assert_eq!(buf[(0, 0)].bg, Color::Black);
        assert_eq!(buf[(3, 1)].bg, Color::Black);
        assert_eq!(buf[(4, 0)].bg, Color::White);
        assert_eq!(buf[(0, 2)].bg, Color::White);
        assert_eq!(buf[(4, 2)].bg, Color::Black);
        assert_eq!(buf[(7, 3)].bg, Color::Black);
    }

    #[test]
    fn test_overhanging_tiles_are_clipped() {
        let cfg = config(3.0);
        let area = Rect::new(2, 1, 5, 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));

        Checkerboard::new(&cfg).vertical_scale(1.0).render(area, &mut buf);

        assert_eq!(buf[(2, 1)].bg, Color::Black);
        assert_eq!(buf[(5, 1)].bg, Color::White);
        assert_eq!(buf[(6, 2)].bg, Color::White);
        // Outside the area stays untouched.
        assert_eq!(buf[(7, 1)].bg, Color::Reset);
        assert_eq!(buf[(2, 3)].bg, Color::Reset);
    }

    #[test]
    fn test_invalid_scale_falls_back() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        let surface = BufferSurface::new(&mut buf, Rect::new(0, 0, 4, 4), 0.0);
        assert_eq!(surface.logical_height(), 8.0);
    }

    #[test]
    fn test_every_cell_gets_a_tile_color() {
        let cfg = config(2.5);
        let area = Rect::new(0, 0, 13, 7);
        let mut buf = Buffer::empty(area);

        Checkerboard::new(&cfg).render(area, &mut buf);

        for y in 0..area.height {
            for x in 0..area.width {
                assert_ne!(buf[(x, y)].bg, Color::Reset, "cell ({x}, {y}) left blank");
            }
        }
    }
}
