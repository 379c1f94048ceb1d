//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Keys handled by the application regardless of the visible screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalKey {
    /// Leave immediately.
    Quit,
    /// Go back one screen, or leave from the first one.
    Back,
    /// Switch to the next background palette.
    CyclePalette,
    /// Make checkerboard squares smaller.
    ShrinkCells,
    /// Make checkerboard squares larger.
    GrowCells,
}

impl GlobalKey {
    /// Classifies a key event. Releases and repeats are ignored.
    #[must_use]
    pub fn from_event(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Self::Quit),
            KeyEvent {
                code: KeyCode::Esc,
                ..
            } => Some(Self::Back),
            KeyEvent {
                code: KeyCode::F(2),
                ..
            } => Some(Self::CyclePalette),
            KeyEvent {
                code: KeyCode::F(3),
                ..
            } => Some(Self::ShrinkCells),
            KeyEvent {
                code: KeyCode::F(4),
                ..
            } => Some(Self::GrowCells),
            _ => None,
        }
    }
}

/// Returns true for key events a screen should see.
#[must_use]
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}
