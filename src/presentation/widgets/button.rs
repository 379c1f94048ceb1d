//! Push button widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Rounded button with a centered label.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    focused: bool,
    theme: Theme,
}

impl Button {
    /// Creates an unfocused button.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            focused: false,
            theme: Theme::default(),
        }
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sets the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns true if focused.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Widget for &Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (style, border_style) = if self.focused {
            (self.theme.button_focused_style, self.theme.focused_border)
        } else {
            (self.theme.button_style, self.theme.idle_border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(style);

        // Center vertically when the button is taller than three rows.
        let inner = block.inner(area);
        let pad = inner.height.saturating_sub(1) / 2;
        let label_area = Rect::new(inner.x, inner.y + pad, inner.width, inner.height.min(1));

        block.render(area, buf);
        Paragraph::new(self.label.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .render(label_area, buf);
    }
}
