//! Login screen.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::domain::navigation::{NavigationAction, ScreenId};
use crate::presentation::theme::Theme;
use crate::presentation::ui::form::{Form, FormButton};
use crate::presentation::widgets::{Button, TextInput};

const EMAIL: usize = 0;
const PASSWORD: usize = 1;

/// Login screen UI.
pub struct LoginScreen {
    form: Form,
    theme: Theme,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut form = Form::new(
            "Welcome back",
            "Sign in to continue",
            vec![
                TextInput::new("Email").placeholder("you@example.com"),
                TextInput::new("Password")
                    .password()
                    .placeholder("Your password"),
            ],
            vec![
                FormButton {
                    button: Button::new("Log in"),
                    action: NavigationAction::Push(ScreenId::Success),
                },
                FormButton {
                    button: Button::new("Create account"),
                    action: NavigationAction::Push(ScreenId::Register),
                },
            ],
        );
        form.set_theme(theme);
        Self { form, theme }
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

    /// Clears both fields and focuses the email field.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> NavigationAction {
        self.form.handle_key(key)
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.form.render_card(area, buf, &self.theme);
    }
}
