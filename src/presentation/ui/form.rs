//! Card with text fields and a row of buttons, shared by the login and
//! registration screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::domain::navigation::NavigationAction;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::centered_fixed;
use crate::presentation::widgets::{Button, FocusRing, TextInput};

const CARD_WIDTH: u16 = 52;
const FIELD_HEIGHT: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;

pub struct FormButton {
    pub button: Button,
    pub action: NavigationAction,
}

pub struct Form {
    title: String,
    subtitle: String,
    inputs: Vec<TextInput>,
    buttons: Vec<FormButton>,
    focus: FocusRing,
}

impl Form {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        inputs: Vec<TextInput>,
        buttons: Vec<FormButton>,
    ) -> Self {
        let focus = FocusRing::new(inputs.len() + buttons.len());
        let mut form = Self {
            title: title.into(),
            subtitle: subtitle.into(),
            inputs,
            buttons,
            focus,
        };
        form.sync_focus();
        form
    }

    pub fn set_theme(&mut self, theme: Theme) {
        for input in &mut self.inputs {
            input.set_theme(theme);
        }
        for entry in &mut self.buttons {
            entry.button.set_theme(theme);
        }
    }

    #[must_use]
    pub fn input(&self, index: usize) -> Option<&TextInput> {
        self.inputs.get(index)
    }

    #[must_use]
    pub fn input_mut(&mut self, index: usize) -> Option<&mut TextInput> {
        self.inputs.get_mut(index)
    }

    #[must_use]
    pub fn focused_index(&self) -> usize {
        self.focus.index()
    }

    /// Focuses the control at `index`; inputs come before buttons.
    pub fn focus(&mut self, index: usize) {
        self.focus.focus(index);
        self.sync_focus();
    }

    /// Clears every field and focuses the first control.
    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.clear();
        }
        self.focus.reset();
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        let split = self.inputs.len();
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_focused(self.focus.is_focused(i));
        }
        for (i, entry) in self.buttons.iter_mut().enumerate() {
            entry.button.set_focused(self.focus.is_focused(split + i));
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        self.inputs.get_mut(self.focus.index())
    }

    fn focused_button(&self) -> Option<&FormButton> {
        self.focus
            .index()
            .checked_sub(self.inputs.len())
            .and_then(|i| self.buttons.get(i))
    }

    /// Handles key event, returns the navigation it triggers.
    pub fn handle_key(&mut self, key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus.next();
                self.sync_focus();
                return NavigationAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.previous();
                self.sync_focus();
                return NavigationAction::None;
            }
            _ => {}
        }

        if let Some(entry) = self.focused_button() {
            let action = entry.action;
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => return action,
                KeyCode::Left => {
                    self.focus.previous();
                    self.sync_focus();
                }
                KeyCode::Right => {
                    self.focus.next();
                    self.sync_focus();
                }
                _ => {}
            }
            return NavigationAction::None;
        }

        if key.code == KeyCode::Enter {
            self.focus.next();
            self.sync_focus();
            return NavigationAction::None;
        }

        let Some(input) = self.focused_input() else {
            return NavigationAction::None;
        };
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.input_char(c);
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
        NavigationAction::None
    }

    fn card_height(&self) -> u16 {
        let fields = u16::try_from(self.inputs.len()).unwrap_or(u16::MAX);
        // Borders, title, subtitle, spacer, fields, spacer, buttons.
        2 + 3 + fields.saturating_mul(FIELD_HEIGHT) + 1 + BUTTON_HEIGHT
    }

    pub fn render_card(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let card = centered_fixed(CARD_WIDTH, self.card_height(), area);
        if card.is_empty() {
            return;
        }

        Clear.render(card, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.focused_border)
            .style(theme.card_style)
            .title(Line::from(format!(" {} ", self.title)).centered());
        let inner = block.inner(card);
        block.render(card, buf);

        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ];
        constraints.extend(self.inputs.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        let rows = Layout::vertical(constraints).split(inner);

        Paragraph::new(self.subtitle.as_str())
            .style(theme.text_style)
            .centered()
            .render(rows[0], buf);
        Paragraph::new("Tab: next  Enter: select  Esc: back")
            .style(theme.dimmed_style)
            .centered()
            .render(rows[1], buf);

        for (input, row) in self.inputs.iter().zip(rows.iter().skip(3)) {
            input.render(*row, buf);
        }

        let button_row = rows[rows.len() - 1];
        let columns = Layout::horizontal(
            self.buttons
                .iter()
                .map(|entry| {
                    let width = u16::try_from(entry.button.label().chars().count())
                        .unwrap_or(u16::MAX)
                        .saturating_add(6);
                    Constraint::Length(width)
                }),
        )
        .flex(Flex::SpaceAround)
        .split(button_row);
        for (entry, column) in self.buttons.iter().zip(columns.iter()) {
            entry.button.render(*column, buf);
        }
    }
}
