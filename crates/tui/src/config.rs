//! Runtime configuration for the dashboard TUI.
//!
//! Only presentation-depth settings live here. Nothing in this module affects
//! the initial shell state, which always starts expanded and light.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable consulted by the binary for the color mode.
pub const COLOR_MODE_ENV: &str = "LABA_COLOR_MODE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown color mode `{0}`; expected one of: auto, truecolor, ansi256")]
    UnknownColorMode(String),
}

/// Requested palette depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Inspect `COLORTERM`/`TERM` to decide
    #[default]
    Auto,
    Truecolor,
    Ansi256,
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(ColorMode::Auto),
            "truecolor" | "24bit" => Ok(ColorMode::Truecolor),
            "ansi256" | "256" | "8bit" => Ok(ColorMode::Ansi256),
            other => Err(ConfigError::UnknownColorMode(other.to_string())),
        }
    }
}

impl ColorMode {
    /// Resolves `Auto` against the current environment.
    pub fn resolve(self) -> ColorCapability {
        match self {
            ColorMode::Truecolor => ColorCapability::Truecolor,
            ColorMode::Ansi256 => ColorCapability::Ansi256,
            ColorMode::Auto => detect_color_capability(
                &env::var("COLORTERM").unwrap_or_default(),
                &env::var("TERM").unwrap_or_default(),
            ),
        }
    }
}

/// What the terminal can actually paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    Truecolor,
    Ansi256,
}

fn detect_color_capability(color_term: &str, term: &str) -> ColorCapability {
    let color_term = color_term.to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }
    let term = term.to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }
    ColorCapability::Ansi256
}

/// Settings handed to [`crate::run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TuiConfig {
    pub color_mode: ColorMode,
}

impl TuiConfig {
    pub fn new(color_mode: ColorMode) -> Self {
        Self { color_mode }
    }
}
