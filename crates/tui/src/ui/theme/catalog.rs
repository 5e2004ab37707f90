use laba_types::ThemeMode;

use super::{DarkTheme, LightTheme, Theme};

/// Describes one of the two shell themes.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier, also used in log lines.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    pub mode: ThemeMode,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "light",
        label: "Light",
        mode: ThemeMode::Light,
        factory: || Box::new(LightTheme::new()),
    },
    ThemeDefinition {
        id: "dark",
        label: "Dark",
        mode: ThemeMode::Dark,
        factory: || Box::new(DarkTheme::new()),
    },
];

/// Two-way lookup of the definition for a theme mode.
pub fn for_mode(mode: ThemeMode) -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.mode == mode)
        .unwrap_or(&THEME_DEFINITIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_line_up_with_modes() {
        assert_eq!(THEME_DEFINITIONS.len(), 2);
        let light = for_mode(ThemeMode::Light);
        let dark = for_mode(ThemeMode::Dark);
        assert_eq!((light.id, light.label, light.mode), ("light", "Light", ThemeMode::Light));
        assert_eq!((dark.id, dark.label, dark.mode), ("dark", "Dark", ThemeMode::Dark));
    }
}
