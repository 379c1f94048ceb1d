//! Success screen.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::domain::navigation::NavigationAction;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::centered_fixed;
use crate::presentation::widgets::Button;

const CARD_WIDTH: u16 = 44;
const CARD_HEIGHT: u16 = 10;
const BADGE: &str = "✔";

fn intro_effect() -> Effect {
    fx::coalesce((700, Interpolation::CircOut))
}

/// Confirmation shown after a form is submitted.
pub struct SuccessScreen {
    back: Button,
    theme: Theme,
    intro: Effect,
    animate: bool,
    intro_finished: bool,
    pending_duration: Duration,
}

impl SuccessScreen {
    /// Creates the screen; `animate` enables the intro effect.
    #[must_use]
    pub fn new(theme: Theme, animate: bool) -> Self {
        let mut back = Button::new("Back");
        back.set_theme(theme);
        back.set_focused(true);

        Self {
            back,
            theme,
            intro: intro_effect(),
            animate,
            intro_finished: !animate,
            pending_duration: Duration::ZERO,
        }
    }

    /// Replays the intro the next time the screen is shown.
    pub fn restart(&mut self) {
        self.intro = intro_effect();
        self.intro_finished = !self.animate;
        self.pending_duration = Duration::ZERO;
    }

    /// Returns true while the intro still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.intro_finished
    }

    /// Queues elapsed time for the intro effect.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Handles key event, returns the navigation it triggers.
    pub fn handle_key(&mut self, key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Pop,
            _ => NavigationAction::None,
        }
    }
}

impl Default for SuccessScreen {
    fn default() -> Self {
        Self::new(Theme::default(), false)
    }
}

impl Widget for &mut SuccessScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_fixed(CARD_WIDTH, CARD_HEIGHT, area);
        if card.is_empty() {
            // Nothing to animate on; stop asking for frames.
            self.intro_finished = true;
            self.pending_duration = Duration::ZERO;
            return;
        }

        Clear.render(card, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.focused_border)
            .style(self.theme.card_style)
            .title(Line::from(" Success ").centered());
        let inner = block.inner(card);
        block.render(card, buf);

        let [badge, message, hint, _, button_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        Paragraph::new(BADGE)
            .style(self.theme.focused_border)
            .centered()
            .render(badge, buf);
        Paragraph::new("You're all set!")
            .style(self.theme.text_style)
            .centered()
            .render(message, buf);
        Paragraph::new("Press Enter to go back")
            .style(self.theme.dimmed_style)
            .centered()
            .render(hint, buf);

        let [_, button_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Fill(1),
        ])
        .areas(button_row);
        (&self.back).render(button_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;
        if !self.intro_finished {
            let overflow = self.intro.process(duration.into(), buf, card);
            if overflow.is_some() {
                self.intro_finished = true;
            }
        }
    }
}
