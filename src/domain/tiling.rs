//! Checkerboard tiling.
//!
//! A [`TilingConfig`] describes two alternating colors and a square size.
//! [`render`] turns a surface size into the row-major sequence of squares
//! covering it, [`paint`] issues the same squares against a
//! [`FillSurface`], and [`should_redraw`] tells a host whether a new
//! configuration changes anything visible.
//!
//! The last row and column are not clamped: when the surface is not an
//! exact multiple of the cell size they overhang it and the host clips.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::domain::errors::TilingError;
use crate::domain::ports::FillSurface;

/// Two colors alternating over a grid of squares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TilingConfig<C> {
    color_a: C,
    color_b: C,
    cell_size: f64,
}

impl<C: Copy + PartialEq> TilingConfig<C> {
    /// Creates a config.
    ///
    /// # Errors
    /// Returns [`TilingError::InvalidConfiguration`] if `cell_size` is not a
    /// positive finite number.
    pub fn new(color_a: C, color_b: C, cell_size: f64) -> Result<Self, TilingError> {
        validate_cell_size(cell_size)?;
        Ok(Self {
            color_a,
            color_b,
            cell_size,
        })
    }

    /// Color of even-parity cells, including the top-left one.
    #[must_use]
    pub fn color_a(&self) -> C {
        self.color_a
    }

    /// Color of odd-parity cells.
    #[must_use]
    pub fn color_b(&self) -> C {
        self.color_b
    }

    /// Side of one square in logical units.
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Returns the color of the cell at `row`, `column`.
    #[must_use]
    pub fn color_at(&self, row: usize, column: usize) -> C {
        if (row + column) % 2 == 0 {
            self.color_a
        } else {
            self.color_b
        }
    }

    /// Returns a copy with different colors.
    #[must_use]
    pub fn with_colors(self, color_a: C, color_b: C) -> Self {
        Self {
            color_a,
            color_b,
            cell_size: self.cell_size,
        }
    }

    /// Returns a copy with a different cell size.
    ///
    /// # Errors
    /// Returns [`TilingError::InvalidConfiguration`] for a non-positive size.
    pub fn with_cell_size(self, cell_size: f64) -> Result<Self, TilingError> {
        Self::new(self.color_a, self.color_b, cell_size)
    }

    fn validate(&self) -> Result<(), TilingError> {
        validate_cell_size(self.cell_size)
    }
}

fn validate_cell_size(cell_size: f64) -> Result<(), TilingError> {
    if cell_size.is_finite() && cell_size > 0.0 {
        Ok(())
    } else {
        Err(TilingError::InvalidConfiguration { cell_size })
    }
}

/// One filled square of the checkerboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect<C> {
    /// Left edge in logical units.
    pub x: f64,
    /// Top edge in logical units.
    pub y: f64,
    /// Side length.
    pub size: f64,
    /// Fill color.
    pub color: C,
    /// Grid row that produced this square.
    pub row: usize,
    /// Grid column that produced this square.
    pub column: usize,
}

impl<C> TileRect<C> {
    /// Right edge (may lie past the surface).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.size
    }

    /// Bottom edge (may lie past the surface).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.size
    }
}

/// Column and row counts needed to cover a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileGrid {
    /// Number of columns.
    pub columns: usize,
    /// Number of rows.
    pub rows: usize,
}

impl TileGrid {
    /// Measures the grid covering `width` x `height` with squares of
    /// `cell_size`.
    ///
    /// # Errors
    /// Returns [`TilingError::InvalidConfiguration`] for a non-positive size.
    pub fn measure(width: f64, height: f64, cell_size: f64) -> Result<Self, TilingError> {
        validate_cell_size(cell_size)?;
        Ok(Self {
            columns: cells_along(width, cell_size),
            rows: cells_along(height, cell_size),
        })
    }

    /// Total number of squares.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Returns true if the grid has no squares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cells_along(extent: f64, cell_size: f64) -> usize {
    if !extent.is_finite() || extent <= 0.0 {
        return 0;
    }
    // Float-to-int `as` saturates, so absurd extents cannot wrap.
    (extent / cell_size).ceil() as usize
}

/// Row-major iterator over the squares of a grid.
#[derive(Debug, Clone)]
pub struct Tiles<C> {
    config: TilingConfig<C>,
    grid: TileGrid,
    next: usize,
}

impl<C: Copy + PartialEq> Tiles<C> {
    /// Grid being walked.
    #[must_use]
    pub const fn grid(&self) -> TileGrid {
        self.grid
    }
}

impl<C: Copy + PartialEq> Iterator for Tiles<C> {
    type Item = TileRect<C>;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.grid.len() {
            return None;
        }
        let row = self.next / self.grid.columns;
        let column = self.next % self.grid.columns;
        self.next += 1;

        let size = self.config.cell_size;
        Some(TileRect {
            x: column as f64 * size,
            y: row as f64 * size,
            size,
            color: self.config.color_at(row, column),
            row,
            column,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<C: Copy + PartialEq> ExactSizeIterator for Tiles<C> {}

impl<C: Copy + PartialEq> FusedIterator for Tiles<C> {}

/// Lazily walks the squares covering `surface_width` x `surface_height`.
///
/// Negative or non-finite surface dimensions count as zero.
///
/// # Errors
/// Returns [`TilingError::InvalidConfiguration`] if the config's cell size
/// is not positive.
pub fn tiles<C: Copy + PartialEq>(
    surface_width: f64,
    surface_height: f64,
    config: &TilingConfig<C>,
) -> Result<Tiles<C>, TilingError> {
    config.validate()?;
    let grid = TileGrid::measure(surface_width, surface_height, config.cell_size)?;
    Ok(Tiles {
        config: *config,
        grid,
        next: 0,
    })
}

/// Computes every square covering the surface, top row first and left to
/// right within a row.
///
/// # Errors
/// Returns [`TilingError::InvalidConfiguration`] if the config's cell size
/// is not positive. Nothing is produced in that case.
pub fn render<C: Copy + PartialEq>(
    surface_width: f64,
    surface_height: f64,
    config: &TilingConfig<C>,
) -> Result<Vec<TileRect<C>>, TilingError> {
    Ok(tiles(surface_width, surface_height, config)?.collect())
}

/// Fills every square directly on `surface`, in [`render`] order.
/// Returns the number of fills issued.
///
/// # Errors
/// Returns [`TilingError::InvalidConfiguration`] before touching the
/// surface if the config's cell size is not positive.
pub fn paint<C, S>(
    surface: &mut S,
    surface_width: f64,
    surface_height: f64,
    config: &TilingConfig<C>,
) -> Result<usize, TilingError>
where
    C: Copy + PartialEq,
    S: FillSurface<C> + ?Sized,
{
    let mut filled = 0;
    for tile in tiles(surface_width, surface_height, config)? {
        surface.fill_rect(&tile);
        filled += 1;
    }
    Ok(filled)
}

/// Returns true if painting `next` would differ from what `previous`
/// painted. With no previous config there is nothing on screen yet.
#[must_use]
pub fn should_redraw<C: PartialEq>(
    previous: Option<&TilingConfig<C>>,
    next: &TilingConfig<C>,
) -> bool {
    previous.is_none_or(|previous| previous != next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
    enum Shade {
        Light,
        Dark,
        Accent,
    }

    fn config(cell_size: f64) -> TilingConfig<Shade> {
        TilingConfig::new(Shade::Light, Shade::Dark, cell_size).unwrap()
    }

    #[derive(Default)]
    struct RecordingSurface {
        fills: Vec<TileRect<Shade>>,
    }

    impl FillSurface<Shade> for RecordingSurface {
        fn fill_rect(&mut self, tile: &TileRect<Shade>) {
            self.fills.push(*tile);
        }
    }

    #[test]
    fn test_two_columns_one_row() {
        let tiles = render(128.0, 64.0, &config(64.0)).unwrap();

        assert_eq!(tiles.len(), 2);
        assert_eq!(
            (tiles[0].x, tiles[0].y, tiles[0].size, tiles[0].color),
            (0.0, 0.0, 64.0, Shade::Light)
        );
        assert_eq!(
            (tiles[1].x, tiles[1].y, tiles[1].size, tiles[1].color),
            (64.0, 0.0, 64.0, Shade::Dark)
        );
    }

    #[test_case(0.0, 0.0, 10.0, 0 ; "empty_surface")]
    #[test_case(10.0, 10.0, 10.0, 1 ; "exact_single_cell")]
    #[test_case(5.0, 3.0, 10.0, 1 ; "smaller_than_cell")]
    #[test_case(100.0, 50.0, 10.0, 50 ; "exact_multiple")]
    #[test_case(101.0, 50.0, 10.0, 55 ; "partial_column")]
    #[test_case(33.5, 21.0, 7.0, 15 ; "fractional_width")]
    #[test_case(33.5, 21.5, 7.0, 20 ; "fractional_width_and_height")]
    #[test_case(100.0, 0.0, 10.0, 0 ; "zero_height")]
    #[test_case(-40.0, 40.0, 10.0, 0 ; "negative_width")]
    #[test_case(f64::NAN, 40.0, 10.0, 0 ; "nan_width")]
    fn test_tile_count(width: f64, height: f64, cell_size: f64, expected: usize) {
        let tiles = render(width, height, &config(cell_size)).unwrap();
        assert_eq!(tiles.len(), expected);

        let grid = TileGrid::measure(width, height, cell_size).unwrap();
        assert_eq!(grid.len(), expected);
    }

    #[test]
    fn test_small_surface_is_single_color_a_tile() {
        let tiles = render(12.0, 7.5, &config(16.0)).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].color, Shade::Light);
        assert_eq!((tiles[0].row, tiles[0].column), (0, 0));
    }

    #[test]
    fn test_neighbours_alternate() {
        let cfg = config(8.0);
        let tiles = render(80.0, 48.0, &cfg).unwrap();
        let grid = TileGrid::measure(80.0, 48.0, 8.0).unwrap();
        let at = |row: usize, column: usize| tiles[row * grid.columns + column].color;

        for row in 0..grid.rows {
            for column in 0..grid.columns {
                if column + 1 < grid.columns {
                    assert_ne!(at(row, column), at(row, column + 1));
                }
                if row + 1 < grid.rows {
                    assert_ne!(at(row, column), at(row + 1, column));
                }
                if row + 1 < grid.rows && column + 1 < grid.columns {
                    assert_eq!(at(row, column), at(row + 1, column + 1));
                }
            }
        }
    }

    #[test]
    fn test_row_major_order_and_positions() {
        let tiles = render(30.0, 20.0, &config(10.0)).unwrap();
        let positions: Vec<_> = tiles.iter().map(|t| (t.row, t.column)).collect();

        assert_eq!(
            positions,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!((tiles[4].x, tiles[4].y), (10.0, 10.0));
    }

    #[test]
    fn test_last_tiles_overhang_surface() {
        let tiles = render(25.0, 10.0, &config(10.0)).unwrap();
        let last = tiles.last().unwrap();

        assert_eq!(last.x, 20.0);
        assert_eq!(last.right(), 30.0);
        assert!(last.right() > 25.0);
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-4.0 ; "negative")]
    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinite")]
    fn test_invalid_cell_size_rejected(cell_size: f64) {
        let err = TilingConfig::new(Shade::Light, Shade::Dark, cell_size).unwrap_err();
        assert!(matches!(err, TilingError::InvalidConfiguration { .. }));
        assert!(TileGrid::measure(10.0, 10.0, cell_size).is_err());
    }

    fn unchecked(cell_size: f64) -> TilingConfig<Shade> {
        let raw = format!("color_a = \"Light\"\ncolor_b = \"Dark\"\ncell_size = {cell_size:?}\n");
        toml::from_str(&raw).unwrap()
    }

    #[test]
    fn test_render_rechecks_deserialized_config() {
        let err = render(10.0, 10.0, &unchecked(0.0)).unwrap_err();
        assert!(matches!(
            err,
            TilingError::InvalidConfiguration { cell_size } if cell_size == 0.0
        ));
        assert!(render(10.0, 10.0, &unchecked(-2.5)).is_err());
    }

    #[test]
    fn test_paint_matches_render() {
        let cfg = config(5.0);
        let mut surface = RecordingSurface::default();

        let filled = paint(&mut surface, 23.0, 11.0, &cfg).unwrap();

        assert_eq!(filled, 15);
        assert_eq!(surface.fills, render(23.0, 11.0, &cfg).unwrap());
    }

    #[test]
    fn test_paint_invalid_config_touches_nothing() {
        let mut surface = RecordingSurface::default();

        assert!(paint(&mut surface, 10.0, 10.0, &unchecked(-1.0)).is_err());
        assert!(surface.fills.is_empty());
    }

    #[test]
    fn test_tiles_is_exact_size() {
        let mut iter = tiles(40.0, 20.0, &config(10.0)).unwrap();
        assert_eq!(iter.len(), 8);
        iter.next();
        assert_eq!(iter.len(), 7);
        assert_eq!(iter.grid(), TileGrid { columns: 4, rows: 2 });
    }

    #[test]
    fn test_should_redraw_without_previous() {
        assert!(should_redraw(None, &config(4.0)));
    }

    #[test]
    fn test_should_redraw_reflexive_false() {
        let cfg = config(4.0);
        assert!(!should_redraw(Some(&cfg), &cfg));
        assert!(!should_redraw(Some(&config(4.0)), &config(4.0)));
    }

    #[test]
    fn test_should_redraw_on_any_field_change() {
        let base = config(4.0);

        let color_a = base.with_colors(Shade::Accent, Shade::Dark);
        assert!(should_redraw(Some(&base), &color_a));

        let color_b = base.with_colors(Shade::Light, Shade::Accent);
        assert!(should_redraw(Some(&base), &color_b));

        let resized = base.with_cell_size(6.0).unwrap();
        assert!(should_redraw(Some(&base), &resized));
    }

    #[test]
    fn test_color_a_change_redraws_regardless_of_other_fields() {
        let previous = config(4.0);
        let next = config(9.0).with_colors(Shade::Accent, Shade::Light);
        assert!(should_redraw(Some(&previous), &next));

        let next_same_rest = previous.with_colors(Shade::Accent, previous.color_b());
        assert!(should_redraw(Some(&previous), &next_same_rest));
    }
}
