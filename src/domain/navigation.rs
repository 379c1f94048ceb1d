//! Screen navigation stack.

use std::fmt;

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    /// Email and password form.
    Login,
    /// Account creation form.
    Register,
    /// Confirmation shown after either form is submitted.
    Success,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// What a screen asks the host to do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Stay on the current screen.
    None,
    /// Open a screen on top of the current one.
    Push(ScreenId),
    /// Return to the previous screen.
    Pop,
    /// Leave the application.
    Quit,
}

/// Stack of open screens. The root is never popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    screens: Vec<ScreenId>,
}

impl NavigationStack {
    /// Creates a stack holding only `root`.
    #[must_use]
    pub fn new(root: ScreenId) -> Self {
        Self {
            screens: vec![root],
        }
    }

    /// Returns the visible screen.
    #[must_use]
    pub fn current(&self) -> ScreenId {
        // The root is never removed, so the stack is never empty.
        self.screens[self.screens.len() - 1]
    }

    /// Returns the root screen.
    #[must_use]
    pub fn root(&self) -> ScreenId {
        self.screens[0]
    }

    /// Number of open screens, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// Returns true if there is a screen to go back to.
    #[must_use]
    pub fn can_pop(&self) -> bool {
        self.screens.len() > 1
    }

    /// Opens `screen` on top.
    pub fn push(&mut self, screen: ScreenId) {
        self.screens.push(screen);
    }

    /// Closes the top screen and returns it. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<ScreenId> {
        if self.can_pop() {
            self.screens.pop()
        } else {
            None
        }
    }

    /// Drops every screen and starts over from `root`.
    pub fn reset(&mut self, root: ScreenId) {
        self.screens.clear();
        self.screens.push(root);
    }

    /// Screens from root to top.
    #[must_use]
    pub fn screens(&self) -> &[ScreenId] {
        &self.screens
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(ScreenId::Login)
    }
}
