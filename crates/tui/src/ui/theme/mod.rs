//! Theme styling module for the TUI UI layer.
//!
//! Two palettes exist, light and dark, each derived from its token pair. On
//! terminals without truecolor support the selected palette is quantized to
//! xterm-256 indices. Prefer the helpers in `theme_helpers` over hard-coding
//! colors in components.

use laba_types::{ThemeMode, TokenColor};
use ratatui::style::Color;
use tracing::debug;

use crate::config::ColorCapability;

pub mod ansi256;
pub mod catalog;
pub mod dark;
pub mod light;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use dark::DarkTheme;
pub use light::LightTheme;
pub use roles::Theme;

/// Theme plus metadata describing how it was selected.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub capability: ColorCapability,
    pub theme: Box<dyn Theme>,
}

impl std::fmt::Debug for LoadedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedTheme")
            .field("id", &self.definition.id)
            .field("capability", &self.capability)
            .finish()
    }
}

/// Builds the theme for `mode`, quantizing it when the terminal lacks truecolor.
pub fn load(mode: ThemeMode, capability: ColorCapability) -> LoadedTheme {
    let definition = catalog::for_mode(mode);
    let theme = match capability {
        ColorCapability::Truecolor => definition.build(),
        ColorCapability::Ansi256 => {
            debug!(theme = definition.id, "ANSI-only terminal; quantizing palette");
            Box::new(Ansi256Theme::from_theme(&*definition.build())) as Box<dyn Theme>
        }
    };
    LoadedTheme {
        definition,
        capability,
        theme,
    }
}

/// Converts a token color into a terminal color, flattening alpha over `base`.
pub fn token_color(color: TokenColor, base: TokenColor) -> Color {
    let (r, g, b) = color.composite_over(base);
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use laba_types::{DARK_THEME, LIGHT_THEME};

    #[test]
    fn truecolor_load_uses_exact_token_colors() {
        let light = load(ThemeMode::Light, ColorCapability::Truecolor);
        assert_eq!(light.definition.id, "light");
        assert_eq!(light.theme.roles().background, Color::Rgb(0xFF, 0xFF, 0xFF));
        assert_eq!(light.theme.roles().text, Color::Rgb(0, 0, 0));

        let dark = load(ThemeMode::Dark, ColorCapability::Truecolor);
        assert_eq!(dark.definition.id, "dark");
        assert_eq!(dark.theme.roles().background, Color::Rgb(0x00, 0x21, 0x40));
        assert_eq!(dark.theme.roles().text, Color::Rgb(166, 177, 188));
    }

    #[test]
    fn ansi_load_quantizes_the_selected_palette() {
        let dark = load(ThemeMode::Dark, ColorCapability::Ansi256);
        assert_eq!(dark.definition.id, "dark");
        assert_eq!(dark.theme.roles().background, Color::Indexed(17));
    }

    #[test]
    fn token_color_flattens_alpha() {
        assert_eq!(
            token_color(DARK_THEME.text_color, DARK_THEME.background_color),
            Color::Rgb(166, 177, 188)
        );
        assert_eq!(
            token_color(LIGHT_THEME.background_color, LIGHT_THEME.background_color),
            Color::Rgb(255, 255, 255)
        );
    }
}
