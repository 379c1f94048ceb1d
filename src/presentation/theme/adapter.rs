use coolor::{Hsl, Rgb};
use ratatui::style::Color;

const NAMED_RGB: [(Color, (u8, u8, u8)); 17] = [
    (Color::Black, (0, 0, 0)),
    (Color::Red, (170, 0, 0)),
    (Color::Green, (0, 170, 0)),
    (Color::Yellow, (170, 85, 0)),
    (Color::Blue, (0, 0, 170)),
    (Color::Magenta, (170, 0, 170)),
    (Color::Cyan, (0, 170, 170)),
    (Color::Gray, (170, 170, 170)),
    (Color::DarkGray, (85, 85, 85)),
    (Color::LightRed, (255, 85, 85)),
    (Color::LightGreen, (85, 255, 85)),
    (Color::LightYellow, (255, 255, 85)),
    (Color::LightBlue, (85, 85, 255)),
    (Color::LightMagenta, (255, 85, 255)),
    (Color::LightCyan, (85, 255, 255)),
    (Color::White, (255, 255, 255)),
    (Color::Reset, (0, 0, 0)),
];

/// Conversions between terminal colors and HSL.
pub struct ColorConverter;

impl ColorConverter {
    /// Returns the RGB components of a terminal color.
    #[must_use]
    pub fn to_rgb(color: Color) -> (u8, u8, u8) {
        match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Indexed(i) if i < 16 => NAMED_RGB[usize::from(i)].1,
            Color::Indexed(i) => indexed_to_rgb(i),
            named => NAMED_RGB
                .iter()
                .find(|(c, _)| *c == named)
                .map_or((255, 255, 255), |(_, rgb)| *rgb),
        }
    }

    /// Converts a terminal color to HSL.
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        let (r, g, b) = Self::to_rgb(color);
        Rgb::new(r, g, b).to_hsl()
    }

    /// Converts HSL to an RGB terminal color.
    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Returns a second checkerboard color for `color`: darker when the
    /// color is light, lighter when it is dark.
    #[must_use]
    pub fn companion(color: Color) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l = if hsl.l > 0.5 {
            (hsl.l - 0.2).max(0.0)
        } else {
            (hsl.l + 0.2).min(1.0)
        };
        Self::to_ratatui(hsl)
    }
}

// xterm 256-color cube and grayscale ramp.
fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    if i >= 232 {
        let v = (i - 232) * 10 + 8;
        return (v, v, v);
    }
    let i = i - 16;
    let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
    (level(i / 36), level((i / 6) % 6), level(i % 6))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_passthrough() {
        assert_eq!(ColorConverter::to_rgb(Color::Rgb(1, 2, 3)), (1, 2, 3));
    }

    #[test]
    fn test_named_and_low_indexed_agree() {
        assert_eq!(
            ColorConverter::to_rgb(Color::Red),
            ColorConverter::to_rgb(Color::Indexed(1))
        );
    }

    #[test]
    fn test_cube_and_ramp() {
        assert_eq!(indexed_to_rgb(208), (255, 135, 0));
        assert_eq!(indexed_to_rgb(16), (0, 0, 0));
        assert_eq!(indexed_to_rgb(231), (255, 255, 255));
        assert_eq!(indexed_to_rgb(232), (8, 8, 8));
    }

    #[test]
    fn test_hsl_round_trip() {
        let hsl = ColorConverter::to_hsl(Color::Rgb(100, 150, 200));
        let Color::Rgb(r, g, b) = ColorConverter::to_ratatui(hsl) else {
            panic!("Expected RGB color");
        };
        assert!((i16::from(r) - 100).abs() <= 1);
        assert!((i16::from(g) - 150).abs() <= 1);
        assert!((i16::from(b) - 200).abs() <= 1);
    }

    #[test]
    fn test_companion_moves_away_from_extremes() {
        let dark = ColorConverter::to_hsl(ColorConverter::companion(Color::Black));
        assert!(dark.l > 0.1);

        let light = ColorConverter::to_hsl(ColorConverter::companion(Color::White));
        assert!(light.l < 0.9);
    }
}
