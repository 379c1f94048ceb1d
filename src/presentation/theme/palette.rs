use ratatui::style::Color;

/// A named pair of checkerboard colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundPalette {
    /// Display name.
    pub name: &'static str,
    /// Top-left square color.
    pub color_a: Color,
    /// Alternate square color.
    pub color_b: Color,
}

/// Palettes the background cycles through.
pub const PALETTES: [BackgroundPalette; 4] = [
    BackgroundPalette {
        name: "slate",
        color_a: Color::Rgb(38, 50, 56),
        color_b: Color::Rgb(55, 71, 79),
    },
    BackgroundPalette {
        name: "plum",
        color_a: Color::Rgb(74, 20, 140),
        color_b: Color::Rgb(106, 27, 154),
    },
    BackgroundPalette {
        name: "forest",
        color_a: Color::Rgb(27, 94, 32),
        color_b: Color::Rgb(46, 125, 50),
    },
    BackgroundPalette {
        name: "paper",
        color_a: Color::Rgb(238, 238, 238),
        color_b: Color::Rgb(189, 189, 189),
    },
];

impl BackgroundPalette {
    /// Returns the palette after the one whose colors match, wrapping.
    /// Unknown colors start over at the first palette.
    #[must_use]
    pub fn next_after(color_a: Color, color_b: Color) -> Self {
        let index = PALETTES
            .iter()
            .position(|p| p.color_a == color_a && p.color_b == color_b)
            .map_or(0, |i| (i + 1) % PALETTES.len());
        PALETTES[index]
    }
}
