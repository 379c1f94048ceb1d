//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Color,
    widgets::Paragraph,
};
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::domain::navigation::{NavigationAction, NavigationStack, ScreenId};
use crate::domain::tiling::{TilingConfig, should_redraw};
use crate::infrastructure::config::{AppConfig, ConfigError, clamp_cell_size};
use crate::presentation::events::{EventResult, GlobalKey, is_press};
use crate::presentation::theme::{BackgroundPalette, Theme};
use crate::presentation::ui::{LoginScreen, RegisterScreen, SuccessScreen};
use crate::presentation::widgets::Checkerboard;

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);
const CELL_SIZE_STEP: f64 = 2.0;
const HELP_TEXT: &str = "F2 palette · F3/F4 squares · Esc back · Ctrl+C quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Top-level application: owns the screens, the navigation stack and the
/// checkerboard background, and drives the terminal event loop.
pub struct App {
    state: AppState,
    navigation: NavigationStack,
    login: LoginScreen,
    register: RegisterScreen,
    success: SuccessScreen,
    theme: Theme,
    background: TilingConfig<Color>,
    vertical_scale: f64,
    last_background: Option<TilingConfig<Color>>,
    dirty: bool,
}

impl App {
    /// Creates the app on the login screen.
    #[must_use]
    pub fn new(
        theme: Theme,
        background: TilingConfig<Color>,
        vertical_scale: f64,
        enable_animations: bool,
    ) -> Self {
        Self {
            state: AppState::Running,
            navigation: NavigationStack::new(ScreenId::Login),
            login: LoginScreen::new(theme),
            register: RegisterScreen::new(theme),
            success: SuccessScreen::new(theme, enable_animations),
            theme,
            background,
            vertical_scale,
            last_background: None,
            dirty: true,
        }
    }

    /// Builds the app from configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if the background colors or cell size are invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let background = config.background.to_tiling()?;
        Ok(Self::new(
            config.theme(),
            background,
            config.background.vertical_scale,
            config.ui.enable_animations,
        ))
    }

    /// # Errors
    /// Returns error if reading terminal events or drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        info!(screen = %self.navigation.current(), "Application started");
        self.draw_if_needed(terminal)?;

        while self.state != AppState::Exiting {
            tokio::select! {
                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.state = AppState::Exiting,
                    }
                }

                _ = animation_interval.tick(), if self.is_animating() => {
                    self.success.tick(ANIMATION_TICK_RATE);
                }
            }

            if self.state != AppState::Exiting {
                self.draw_if_needed(terminal)?;
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn draw_if_needed(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if self.needs_redraw() {
            terminal.draw(|frame| self.render(frame))?;
            self.mark_drawn();
        }
        Ok(())
    }

    /// Returns true if the next frame would differ from the last one drawn.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.dirty
            || self.is_animating()
            || should_redraw(self.last_background.as_ref(), &self.background)
    }

    fn mark_drawn(&mut self) {
        self.last_background = Some(self.background);
        self.dirty = false;
    }

    fn is_animating(&self) -> bool {
        self.navigation.current() == ScreenId::Success && self.success.is_animating()
    }

    /// Returns the visible screen.
    #[must_use]
    pub fn current_screen(&self) -> ScreenId {
        self.navigation.current()
    }

    /// Returns the navigation stack.
    #[must_use]
    pub fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    /// Returns the current background tiling.
    #[must_use]
    pub fn background(&self) -> &TilingConfig<Color> {
        &self.background
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.dirty = true;
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }

    /// Handles key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !is_press(&key) {
            return EventResult::Continue;
        }

        if let Some(global) = GlobalKey::from_event(&key) {
            // Background keys are picked up by the tiling change check.
            return match global {
                GlobalKey::Quit => self.apply(NavigationAction::Quit),
                GlobalKey::Back => {
                    self.dirty = true;
                    self.apply(NavigationAction::Pop)
                }
                GlobalKey::CyclePalette => {
                    self.cycle_palette();
                    EventResult::Continue
                }
                GlobalKey::ShrinkCells => {
                    self.resize_cells(-CELL_SIZE_STEP);
                    EventResult::Continue
                }
                GlobalKey::GrowCells => {
                    self.resize_cells(CELL_SIZE_STEP);
                    EventResult::Continue
                }
            };
        }

        // Any other press may change a field or focus.
        self.dirty = true;
        let action = match self.navigation.current() {
            ScreenId::Login => self.login.handle_key(key),
            ScreenId::Register => self.register.handle_key(key),
            ScreenId::Success => self.success.handle_key(key),
        };
        self.apply(action)
    }

    fn apply(&mut self, action: NavigationAction) -> EventResult {
        match action {
            NavigationAction::None => EventResult::Continue,
            NavigationAction::Push(screen) => {
                match screen {
                    ScreenId::Login => self.login.reset(),
                    ScreenId::Register => self.register.reset(),
                    ScreenId::Success => self.success.restart(),
                }
                let from = self.navigation.current();
                self.navigation.push(screen);
                info!(%from, to = %screen, depth = self.navigation.depth(), "Navigated");
                EventResult::Continue
            }
            NavigationAction::Pop => match self.navigation.pop() {
                Some(closed) => {
                    info!(
                        from = %closed,
                        to = %self.navigation.current(),
                        depth = self.navigation.depth(),
                        "Navigated back"
                    );
                    EventResult::Continue
                }
                None => {
                    debug!("Back pressed on the first screen");
                    EventResult::Exit
                }
            },
            NavigationAction::Quit => EventResult::Exit,
        }
    }

    fn cycle_palette(&mut self) {
        let palette =
            BackgroundPalette::next_after(self.background.color_a(), self.background.color_b());
        self.background = self.background.with_colors(palette.color_a, palette.color_b);
        info!(palette = palette.name, "Background palette changed");
    }

    fn resize_cells(&mut self, delta: f64) {
        let size = clamp_cell_size(self.background.cell_size() + delta);
        match self.background.with_cell_size(size) {
            Ok(resized) => {
                if resized != self.background {
                    debug!(cell_size = size, "Background cell size changed");
                }
                self.background = resized;
            }
            Err(e) => warn!(error = %e, "Ignoring cell size change"),
        }
    }

    /// Draws the background, the current screen and the help line.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Checkerboard::new(&self.background).vertical_scale(self.vertical_scale),
            area,
        );

        let [content, help] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        match self.navigation.current() {
            ScreenId::Login => frame.render_widget(&self.login, content),
            ScreenId::Register => frame.render_widget(&self.register, content),
            ScreenId::Success => frame.render_widget(&mut self.success, content),
        }

        frame.render_widget(
            Paragraph::new(HELP_TEXT)
                .style(self.theme.text_style)
                .centered(),
            help,
        );
    }
}
