use laba_types::{DARK_THEME, TokenColor};

use super::roles::{Theme, ThemeRoles};
use super::token_color;

// Dark sider sits a shade deeper than the token background.
pub const SIDER_BG: TokenColor = TokenColor::hex(0x00, 0x15, 0x29);
pub const SIDER_TEXT: TokenColor = TokenColor::rgba(255, 255, 255, 65);
pub const SELECTION_BG: TokenColor = TokenColor::hex(0x16, 0x77, 0xFF);
pub const SELECTION_FG: TokenColor = TokenColor::hex(0xFF, 0xFF, 0xFF);
pub const PRIMARY: TokenColor = TokenColor::hex(0x16, 0x77, 0xFF);
pub const FOCUS: TokenColor = TokenColor::hex(0x40, 0x96, 0xFF);
pub const BORDER: TokenColor = TokenColor::rgba(255, 255, 255, 15);
pub const TEXT_SECONDARY: TokenColor = TokenColor::rgba(255, 255, 255, 55);
pub const TEXT_MUTED: TokenColor = TokenColor::rgba(255, 255, 255, 45);
pub const SWITCH_OFF: TokenColor = TokenColor::rgba(255, 255, 255, 30);

/// Dark theme built from the dark token pair.
#[derive(Debug, Clone)]
pub struct DarkTheme {
    roles: ThemeRoles,
}

impl DarkTheme {
    pub fn new() -> Self {
        let bg = DARK_THEME.background_color;
        Self {
            roles: ThemeRoles {
                background: token_color(bg, bg),
                text: token_color(DARK_THEME.text_color, bg),
                text_secondary: token_color(TEXT_SECONDARY, bg),
                text_muted: token_color(TEXT_MUTED, bg),

                sider_background: token_color(SIDER_BG, SIDER_BG),
                sider_text: token_color(SIDER_TEXT, SIDER_BG),
                sider_selection_bg: token_color(SELECTION_BG, SIDER_BG),
                sider_selection_fg: token_color(SELECTION_FG, SIDER_BG),

                border: token_color(BORDER, bg),
                focus: token_color(FOCUS, bg),
                accent_primary: token_color(PRIMARY, bg),

                switch_on: token_color(PRIMARY, bg),
                switch_off: token_color(SWITCH_OFF, bg),
            },
        }
    }
}

impl Default for DarkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DarkTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
