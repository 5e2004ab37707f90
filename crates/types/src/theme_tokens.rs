//! Light and dark theme tokens.
//!
//! Exactly two token sets exist. Selecting between them is a plain lookup on the
//! dark-mode flag; nothing is merged or inherited.

use std::fmt;

/// An sRGB color with an alpha channel expressed in hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in hundredths: `100` is opaque, `65` is `0.65`.
    pub alpha: u8,
}

impl TokenColor {
    pub const fn hex(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 100 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self { r, g, b, alpha }
    }

    pub const fn is_opaque(&self) -> bool {
        self.alpha >= 100
    }

    /// Composites this color over an opaque `base`, returning the resulting RGB triple.
    ///
    /// Terminal cells cannot carry alpha, so translucent tokens are flattened
    /// against the surface they are painted on.
    pub fn composite_over(&self, base: TokenColor) -> (u8, u8, u8) {
        if self.is_opaque() {
            return (self.r, self.g, self.b);
        }
        let alpha = u32::from(self.alpha);
        let blend = |front: u8, back: u8| -> u8 {
            let mixed = (u32::from(front) * alpha + u32::from(back) * (100 - alpha) + 50) / 100;
            mixed.min(255) as u8
        };
        (blend(self.r, base.r), blend(self.g, base.g), blend(self.b, base.b))
    }
}

impl fmt::Display for TokenColor {
    /// `#RRGGBB` for opaque colors, `rgba(r,g,b,a)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            return write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b);
        }
        let alpha = match self.alpha {
            0 => "0".to_string(),
            tenths if tenths % 10 == 0 => format!("0.{}", tenths / 10),
            hundredths => format!("0.{hundredths:02}"),
        };
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

/// The light or dark appearance of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode { ThemeMode::Dark } else { ThemeMode::Light }
    }
}

/// Background and text colors consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeTokens {
    pub background_color: TokenColor,
    pub text_color: TokenColor,
}

impl ThemeTokens {
    /// Text color flattened over this theme's own background.
    pub fn text_rgb(&self) -> (u8, u8, u8) {
        self.text_color.composite_over(self.background_color)
    }

    pub fn background_rgb(&self) -> (u8, u8, u8) {
        (self.background_color.r, self.background_color.g, self.background_color.b)
    }

    /// Two-way lookup on the dark-mode flag.
    pub fn select(is_dark_mode: bool) -> &'static ThemeTokens {
        match ThemeMode::from_dark_mode(is_dark_mode) {
            ThemeMode::Light => &LIGHT_THEME,
            ThemeMode::Dark => &DARK_THEME,
        }
    }
}

pub const LIGHT_THEME: ThemeTokens = ThemeTokens {
    background_color: TokenColor::hex(0xFF, 0xFF, 0xFF),
    text_color: TokenColor::hex(0x00, 0x00, 0x00),
};

pub const DARK_THEME: ThemeTokens = ThemeTokens {
    background_color: TokenColor::hex(0x00, 0x21, 0x40),
    text_color: TokenColor::rgba(255, 255, 255, 65),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_render_in_canonical_form() {
        assert_eq!(LIGHT_THEME.background_color.to_string(), "#FFFFFF");
        assert_eq!(LIGHT_THEME.text_color.to_string(), "#000000");
        assert_eq!(DARK_THEME.background_color.to_string(), "#002140");
        assert_eq!(DARK_THEME.text_color.to_string(), "rgba(255,255,255,0.65)");
    }

    #[test]
    fn alpha_formatting_trims_trailing_zero() {
        assert_eq!(TokenColor::rgba(0, 0, 0, 50).to_string(), "rgba(0,0,0,0.5)");
        assert_eq!(TokenColor::rgba(0, 0, 0, 5).to_string(), "rgba(0,0,0,0.05)");
        assert_eq!(TokenColor::rgba(0, 0, 0, 0).to_string(), "rgba(0,0,0,0)");
    }

    #[test]
    fn select_is_a_two_way_lookup() {
        assert_eq!(ThemeTokens::select(false), &LIGHT_THEME);
        assert_eq!(ThemeTokens::select(true), &DARK_THEME);
    }

    #[test]
    fn translucent_text_is_flattened_over_its_background() {
        assert_eq!(DARK_THEME.text_rgb(), (166, 177, 188));
        assert_eq!(LIGHT_THEME.text_rgb(), (0, 0, 0));
        assert_eq!(TokenColor::rgba(10, 20, 30, 0).composite_over(TokenColor::hex(1, 2, 3)), (1, 2, 3));
    }
}
