//! UI state owned by the dashboard shell.

use crate::theme_tokens::{ThemeMode, ThemeTokens};

/// The two booleans that drive the shell's chrome.
///
/// Starts expanded and light. Only [`ShellState::toggle_collapse`] and
/// [`ShellState::toggle_theme`] mutate it, and nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub collapsed: bool,
    pub is_dark_mode: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the sider between expanded and collapsed.
    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Sets dark mode to the switch's checked value.
    pub fn toggle_theme(&mut self, checked: bool) {
        self.is_dark_mode = checked;
    }

    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_dark_mode(self.is_dark_mode)
    }

    pub fn theme_tokens(&self) -> &'static ThemeTokens {
        ThemeTokens::select(self.is_dark_mode)
    }
}
