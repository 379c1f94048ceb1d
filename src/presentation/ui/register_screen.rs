//! Registration screen.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::domain::navigation::{NavigationAction, ScreenId};
use crate::presentation::theme::Theme;
use crate::presentation::ui::form::{Form, FormButton};
use crate::presentation::widgets::{Button, TextInput};

const NAME: usize = 0;
const EMAIL: usize = 1;
const PASSWORD: usize = 2;

/// Account creation screen UI.
pub struct RegisterScreen {
    form: Form,
    theme: Theme,
}

impl RegisterScreen {
    /// Creates an empty registration form.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut form = Form::new(
            "Create account",
            "A few details and you are in",
            vec![
                TextInput::new("Name").placeholder("Ada Lovelace"),
                TextInput::new("Email").placeholder("you@example.com"),
                TextInput::new("Password")
                    .password()
                    .placeholder("Choose a password"),
            ],
            vec![
                FormButton {
                    button: Button::new("Sign up"),
                    action: NavigationAction::Push(ScreenId::Success),
                },
                FormButton {
                    button: Button::new("Back to login"),
                    action: NavigationAction::Pop,
                },
            ],
        );
        form.set_theme(theme);
        Self { form, theme }
    }

    /// Returns the typed name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.form.input(NAME).map_or("", TextInput::value)
    }

    /// Returns the typed email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.form.input(EMAIL).map_or("", TextInput::value)
    }

    /// Returns the typed password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.form.input(PASSWORD).map_or("", TextInput::value)
    }

    /// Clears every field and focuses the name field.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Handles key event, returns the navigation it triggers.
    pub fn handle_key(&mut self, key: KeyEvent) -> NavigationAction {
        self.form.handle_key(key)
    }
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for &RegisterScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.form.render_card(area, buf, &self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_fields_in_order() {
        let mut screen = RegisterScreen::default();
        screen.handle_key(key(KeyCode::Char('n')));
        screen.handle_key(key(KeyCode::Enter));
        screen.handle_key(key(KeyCode::Char('e')));
        screen.handle_key(key(KeyCode::Enter));
        screen.handle_key(key(KeyCode::Char('p')));

        assert_eq!(
            (screen.name(), screen.email(), screen.password()),
            ("n", "e", "p")
        );
    }

    #[test]
    fn test_sign_up_pushes_success() {
        let mut screen = RegisterScreen::default();
        for _ in 0..3 {
            screen.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            NavigationAction::Push(ScreenId::Success)
        );
    }

    #[test]
    fn test_back_pops() {
        let mut screen = RegisterScreen::default();
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), NavigationAction::Pop);
    }

    #[test]
    fn test_reset_starts_empty() {
        let mut screen = RegisterScreen::default();
        screen.handle_key(key(KeyCode::Char('x')));
        screen.reset();
        assert!(screen.name().is_empty());
    }
}
