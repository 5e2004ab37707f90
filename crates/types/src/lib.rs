//! Shared types for the Laba Space dashboard shell.
//!
//! The static menu table, the two theme token sets, and the shell's UI state
//! live here so the terminal front end and its tests agree on a single source
//! of truth.

pub mod menu;
pub mod shell;
pub mod theme_tokens;

pub use menu::{DEFAULT_SELECTED_KEY, IconRef, MENU_ITEMS, MenuItem, find_item};
pub use shell::ShellState;
pub use theme_tokens::{DARK_THEME, LIGHT_THEME, ThemeMode, ThemeTokens, TokenColor};

/// Messages that can be sent to update the application state.
///
/// Only the two shell toggles mutate [`ShellState`]; the remaining variants
/// are runtime housekeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Flip the sider between expanded and collapsed
    ToggleCollapse,
    /// Set dark mode to the switch's new checked value
    ToggleTheme(bool),
    /// Periodic UI tick
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects that components report back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Leave the event loop and restore the terminal
    Quit,
}
