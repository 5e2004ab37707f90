//! ANSI 256-color fallback for terminals without truecolor support.
//!
//! Rather than maintaining hand-picked indexed palettes, every role of the
//! truecolor theme is quantized to its nearest xterm-256 entry so the light
//! and dark themes stay recognizable inside 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Indexed approximation of another theme.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn from_theme<T: Theme + ?Sized>(theme: &T) -> Self {
        let source = theme.roles();
        Self {
            roles: ThemeRoles {
                background: quantize(source.background),
                text: quantize(source.text),
                text_secondary: quantize(source.text_secondary),
                text_muted: quantize(source.text_muted),

                sider_background: quantize(source.sider_background),
                sider_text: quantize(source.sider_text),
                sider_selection_bg: quantize(source.sider_selection_bg),
                sider_selection_fg: quantize(source.sider_selection_fg),

                border: quantize(source.border),
                focus: quantize(source.focus),
                accent_primary: quantize(source.accent_primary),

                switch_on: quantize(source.switch_on),
                switch_off: quantize(source.switch_off),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Maps an RGB color to the closest xterm-256 index. Non-RGB colors pass through.
pub fn quantize(color: Color) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };

    let (ri, rv) = nearest_cube_level(r);
    let (gi, gv) = nearest_cube_level(g);
    let (bi, bv) = nearest_cube_level(b);
    let cube_index = 16 + 36 * ri + 6 * gi + bi;
    let cube_distance = distance((r, g, b), (rv, gv, bv));

    let average = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    let gray_step = (average.saturating_sub(8) + 5) / 10;
    let gray_step = gray_step.min(23) as u8;
    let gray_value = 8 + 10 * gray_step;
    let gray_distance = distance((r, g, b), (gray_value, gray_value, gray_value));

    if gray_distance < cube_distance {
        Color::Indexed(232 + gray_step)
    } else {
        Color::Indexed(cube_index)
    }
}

fn nearest_cube_level(channel: u8) -> (u8, u8) {
    let mut best = (0u8, CUBE_LEVELS[0]);
    for (index, level) in CUBE_LEVELS.iter().enumerate() {
        if channel.abs_diff(*level) < channel.abs_diff(best.1) {
            best = (index as u8, *level);
        }
    }
    best
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = u32::from(a.0.abs_diff(b.0));
    let dg = u32::from(a.1.abs_diff(b.1));
    let db = u32::from(a.2.abs_diff(b.2));
    dr * dr + dg * dg + db * db
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::{DarkTheme, LightTheme};

    #[test]
    fn quantizes_extremes_to_cube_corners() {
        assert_eq!(quantize(Color::Rgb(255, 255, 255)), Color::Indexed(231));
        assert_eq!(quantize(Color::Rgb(0, 0, 0)), Color::Indexed(16));
    }

    #[test]
    fn quantizes_dark_token_background() {
        assert_eq!(quantize(Color::Rgb(0x00, 0x21, 0x40)), Color::Indexed(17));
    }

    #[test]
    fn prefers_grayscale_ramp_for_neutral_colors() {
        assert_eq!(quantize(Color::Rgb(128, 128, 128)), Color::Indexed(244));
    }

    #[test]
    fn leaves_indexed_and_named_colors_alone() {
        assert_eq!(quantize(Color::Indexed(42)), Color::Indexed(42));
        assert_eq!(quantize(Color::Reset), Color::Reset);
    }

    #[test]
    fn fallback_keeps_every_role_indexed() {
        for theme in [Ansi256Theme::from_theme(&LightTheme::new()), Ansi256Theme::from_theme(&DarkTheme::new())] {
            let roles = theme.roles();
            for color in [roles.background, roles.text, roles.sider_background, roles.focus, roles.switch_off] {
                assert!(matches!(color, Color::Indexed(_)), "expected indexed color, got {color:?}");
            }
        }
    }
}
