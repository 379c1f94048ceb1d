use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Styles shared by every screen, derived from one accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Accent color.
    pub accent: Color,
    /// Card background and text.
    pub card_style: Style,
    /// Regular text.
    pub text_style: Style,
    /// Hints and placeholders.
    pub dimmed_style: Style,
    /// Border of the focused control.
    pub focused_border: Style,
    /// Border of unfocused controls.
    pub idle_border: Style,
    /// Unfocused button.
    pub button_style: Style,
    /// Focused button.
    pub button_focused_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan")
    }
}

impl Theme {
    /// Builds a theme from a color name or hex code.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme from an accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let mut card_hsl = ColorConverter::to_hsl(accent);
        card_hsl.l = 0.1;
        card_hsl.s = 0.25;
        let card_bg = ColorConverter::to_ratatui(card_hsl);

        let mut button_hsl = ColorConverter::to_hsl(accent);
        button_hsl.l = 0.22;
        button_hsl.s = 0.35;
        let button_bg = ColorConverter::to_ratatui(button_hsl);

        Self {
            accent,
            card_style: Style::default().bg(card_bg).fg(Color::White),
            text_style: Style::default().fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(accent),
            idle_border: Style::default().fg(Color::Gray),
            button_style: Style::default().bg(button_bg).fg(Color::White),
            button_focused_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Parses a color name (`"red"`, `"lightblue"`), an ANSI index (`"208"`)
/// or a hex code (`"#1e90ff"`, `"#0f0"`). Unknown input falls back to cyan.
#[must_use]
pub fn parse_color(s: &str) -> Color {
    try_parse_color(s).unwrap_or(Color::Cyan)
}

/// Like [`parse_color`] but reports unknown input as `None`.
#[must_use]
pub fn try_parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex).map(|(r, g, b)| Color::Rgb(r, g, b));
    }
    if let Ok(c) = Color::from_str(s) {
        return Some(c);
    }
    match s.to_lowercase().as_str() {
        "orange" => Some(Color::Indexed(208)),
        "teal" => Some(Color::Indexed(30)),
        _ => None,
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Red", Color::Red ; "capitalized_name")]
    #[test_case("lightblue", Color::LightBlue ; "lowercase_name")]
    #[test_case("#FF0000", Color::Rgb(255, 0, 0) ; "long_hex")]
    #[test_case("#0f0", Color::Rgb(0, 255, 0) ; "short_hex")]
    #[test_case("Orange", Color::Indexed(208) ; "orange_alias")]
    #[test_case("nonsense", Color::Cyan ; "fallback")]
    #[test_case("#12", Color::Cyan ; "bad_hex_length")]
    fn test_parse_color(input: &str, expected: Color) {
        assert_eq!(parse_color(input), expected);
    }

    #[test]
    fn test_try_parse_reports_unknown() {
        assert_eq!(try_parse_color("not-a-color"), None);
        assert_eq!(try_parse_color("#zzzzzz"), None);
    }

    #[test]
    fn test_theme_focus_uses_accent() {
        let theme = Theme::new("#ff8800");
        assert_eq!(theme.accent, Color::Rgb(255, 136, 0));
        assert_eq!(theme.focused_border.fg, Some(theme.accent));
        assert_eq!(theme.button_focused_style.bg, Some(theme.accent));
    }
}
