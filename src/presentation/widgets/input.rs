//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::presentation::theme::Theme;

const MASK_CHAR: char = '•';

/// Single-line text field with a rounded border.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, not bytes.
    cursor: usize,
    focused: bool,
    masked: bool,
    placeholder: String,
    label: String,
    theme: Theme,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            masked: false,
            placeholder: String::new(),
            label: label.into(),
            theme: Theme::default(),
        }
    }

    /// Enables password masking.
    #[must_use]
    pub fn password(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets the theme used for borders and text.
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

    /// Returns the typed text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the field label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cursor position in chars.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves the cursor one char left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one char right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn display_chars(&self) -> Vec<char> {
        if self.masked {
            vec![MASK_CHAR; self.value.chars().count()]
        } else {
            self.value.chars().collect()
        }
    }

    /// Returns the visible slice of the value and the cursor column within
    /// it, scrolled so the cursor stays inside `width` columns.
    fn visible_window(&self, width: usize) -> (String, usize) {
        let chars = self.display_chars();
        let widths: Vec<usize> = chars.iter().map(|c| c.width().unwrap_or(0)).collect();

        // Leave one column for the cursor cell past the last char.
        let budget = width.saturating_sub(1);
        let mut start = 0;
        let mut cursor_col: usize = widths[..self.cursor].iter().sum();
        while cursor_col > budget && start < self.cursor {
            cursor_col -= widths[start];
            start += 1;
        }

        let mut used = 0;
        let visible: String = chars[start..]
            .iter()
            .zip(&widths[start..])
            .take_while(|(_, w)| {
                used += **w;
                used <= width
            })
            .map(|(c, _)| *c)
            .collect();

        (visible, cursor_col)
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border
        } else {
            self.theme.idle_border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.value.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(self.theme.dimmed_style)
                .render(inner, buf);
        } else {
            let (visible, _) = self.visible_window(usize::from(inner.width));
            Paragraph::new(visible)
                .style(self.theme.text_style)
                .render(inner, buf);
        }

        if self.focused {
            let (_, cursor_col) = self.visible_window(usize::from(inner.width));
            let cursor_x = inner.x + u16::try_from(cursor_col).unwrap_or(u16::MAX);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Email");
        assert!(input.value().is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_cursor_editing_in_middle() {
        let mut input = TextInput::new("Name");
        input.set_value("acd");
        input.move_left();
        input.move_left();
        input.input_char('b');
        assert_eq!(input.value(), "abcd");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bcd");

        input.move_end();
        input.move_right();
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = TextInput::new("Name");
        input.input_char('é');
        input.input_char('ß');
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "ß");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new("Password").password();
        input.set_value("secret");

        let (visible, cursor_col) = input.visible_window(20);
        assert_eq!(visible, "••••••");
        assert_eq!(cursor_col, 6);
    }

    #[test]
    fn test_window_scrolls_to_cursor() {
        let mut input = TextInput::new("Email");
        input.set_value("abcdefghij");

        let (visible, cursor_col) = input.visible_window(5);
        assert_eq!(cursor_col, 4);
        assert_eq!(visible, "ghij");

        input.move_start();
        let (visible, cursor_col) = input.visible_window(5);
        assert_eq!(cursor_col, 0);
        assert_eq!(visible, "abcde");
    }

    #[test]
    fn test_render_rounded_border_and_placeholder() {
        let input = TextInput::new("Email").placeholder("you@example.com");
        let area = Rect::new(0, 0, 24, 3);
        let mut buf = Buffer::empty(area);

        (&input).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert_eq!(buf[(23, 2)].symbol(), "╯");
        assert_eq!(buf[(1, 1)].symbol(), "y");
    }
}
