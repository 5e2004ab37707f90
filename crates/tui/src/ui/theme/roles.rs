use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRoles {
    /// Token background: layout, header, content panel, footer
    pub background: Color,
    /// Token text color, flattened over `background`
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub sider_background: Color,
    pub sider_text: Color,
    pub sider_selection_bg: Color,
    pub sider_selection_fg: Color,

    pub border: Color,
    pub focus: Color,
    pub accent_primary: Color,

    pub switch_on: Color,
    pub switch_off: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    /// Background and text of the token surfaces.
    fn surface_style(&self) -> Style {
        Style::default().bg(self.roles().background).fg(self.roles().text)
    }

    fn sider_style(&self) -> Style {
        Style::default().bg(self.roles().sider_background).fg(self.roles().sider_text)
    }

    fn sider_selection_style(&self) -> Style {
        Style::default()
            .bg(self.roles().sider_selection_bg)
            .fg(self.roles().sider_selection_fg)
    }

    fn accent_primary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary)
    }
    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }
}
