//! # Laba Space TUI
//!
//! Terminal front end for the Laba Space dashboard shell: a collapsible sider
//! with an inline menu, a header carrying the collapse button and the
//! light/dark switch, a breadcrumb panel with placeholder form widgets, and a
//! footer.
//!
//! ## Architecture
//!
//! Each shell region is a component that handles its own input and renders
//! itself. The shared `ShellState` lives in `App`, and the only messages that
//! mutate it are the collapse and theme toggles.

mod app;
pub mod config;
mod ui;

use anyhow::Result;

pub use config::{COLOR_MODE_ENV, ColorCapability, ColorMode, ConfigError, TuiConfig};

/// Runs the dashboard until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into (or restored from)
/// raw mode and the alternate screen, or when drawing a frame fails.
pub async fn run(config: TuiConfig) -> Result<()> {
    ui::runtime::run_app(config).await
}
