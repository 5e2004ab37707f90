use laba_types::{LIGHT_THEME, TokenColor};

use super::roles::{Theme, ThemeRoles};
use super::token_color;

// Sider and control colors follow the stock light dashboard palette.
pub const SIDER_BG: TokenColor = TokenColor::hex(0xFF, 0xFF, 0xFF);
pub const SIDER_TEXT: TokenColor = TokenColor::rgba(0, 0, 0, 88);
pub const SELECTION_BG: TokenColor = TokenColor::hex(0xE6, 0xF4, 0xFF);
pub const PRIMARY: TokenColor = TokenColor::hex(0x16, 0x77, 0xFF);
pub const FOCUS: TokenColor = TokenColor::hex(0x40, 0x96, 0xFF);
pub const BORDER: TokenColor = TokenColor::hex(0xD9, 0xD9, 0xD9);
pub const TEXT_SECONDARY: TokenColor = TokenColor::rgba(0, 0, 0, 65);
pub const TEXT_MUTED: TokenColor = TokenColor::rgba(0, 0, 0, 45);
pub const SWITCH_OFF: TokenColor = TokenColor::rgba(0, 0, 0, 25);

/// Light theme built from the light token pair.
#[derive(Debug, Clone)]
pub struct LightTheme {
    roles: ThemeRoles,
}

impl LightTheme {
    pub fn new() -> Self {
        let bg = LIGHT_THEME.background_color;
        Self {
            roles: ThemeRoles {
                background: token_color(bg, bg),
                text: token_color(LIGHT_THEME.text_color, bg),
                text_secondary: token_color(TEXT_SECONDARY, bg),
                text_muted: token_color(TEXT_MUTED, bg),

                sider_background: token_color(SIDER_BG, SIDER_BG),
                sider_text: token_color(SIDER_TEXT, SIDER_BG),
                sider_selection_bg: token_color(SELECTION_BG, SIDER_BG),
                sider_selection_fg: token_color(PRIMARY, SIDER_BG),

                border: token_color(BORDER, bg),
                focus: token_color(FOCUS, bg),
                accent_primary: token_color(PRIMARY, bg),

                switch_on: token_color(PRIMARY, bg),
                switch_off: token_color(SWITCH_OFF, bg),
            },
        }
    }
}

impl Default for LightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for LightTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
