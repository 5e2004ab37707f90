use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use laba_types::{Effect, IconRef, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, ButtonRenderOptions, render_button};
use crate::ui::utils::rect_contains;

const BUTTON_WIDTH: u16 = 7;
const SWITCH_WIDTH: u16 = 8;
const CONTROL_GAP: u16 = 2;

/// Header bar with the collapse button and the theme switch.
#[derive(Debug, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    /// Icon for the collapse button: fold while expanded, unfold while collapsed.
    pub fn collapse_icon(collapsed: bool) -> IconRef {
        if collapsed { IconRef::MenuUnfold } else { IconRef::MenuFold }
    }

    fn press_collapse_button(&mut self, app: &mut App) -> Vec<Effect> {
        self.handle_message(app, Msg::ToggleCollapse)
    }

    fn set_theme_switch(&mut self, app: &mut App, checked: bool) -> Vec<Effect> {
        self.handle_message(app, Msg::ToggleTheme(checked))
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.header.f_collapse_button.get() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.press_collapse_button(app),
                _ => Vec::new(),
            };
        }
        if app.header.f_theme_switch.get() {
            let checked = app.shell.is_dark_mode;
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.set_theme_switch(app, !checked),
                KeyCode::Right => self.set_theme_switch(app, true),
                KeyCode::Left => self.set_theme_switch(app, false),
                _ => Vec::new(),
            };
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        if rect_contains(app.header.button_area, mouse.column, mouse.row) {
            app.focus.focus(&app.header.f_collapse_button);
            return self.press_collapse_button(app);
        }
        if rect_contains(app.header.switch_area, mouse.column, mouse.row) {
            app.focus.focus(&app.header.f_theme_switch);
            let checked = app.shell.is_dark_mode;
            return self.set_theme_switch(app, !checked);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        frame.render_widget(Block::default().style(th::panel_style(theme)), area);

        let [button_area, _, switch_area, _] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(CONTROL_GAP),
            Constraint::Length(SWITCH_WIDTH),
            Constraint::Min(0),
        ])
        .areas(area);

        let button_focused = app.header.f_collapse_button.get();
        let borders = if button_focused { Borders::ALL } else { Borders::NONE };
        render_button(
            frame,
            button_area,
            Self::collapse_icon(app.shell.collapsed).glyph(),
            theme,
            ButtonRenderOptions::new(true, button_focused, borders),
        );

        let switch_focused = app.header.f_theme_switch.get();
        let switch_block = if switch_focused {
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme.border_style(true))
        } else {
            Block::default().padding(Padding::uniform(1))
        };
        let switch = Paragraph::new(th::switch_spans(theme, app.shell.is_dark_mode, "☾", "☀"))
            .centered()
            .block(switch_block)
            .style(th::panel_style(theme));
        frame.render_widget(switch, switch_area);

        app.header.last_area = area;
        app.header.button_area = button_area;
        app.header.switch_area = switch_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let hints: &[(&str, &str)] = if app.header.f_theme_switch.get() {
            &[(" Space", " Toggle theme"), (" ←/→", " Light/Dark")]
        } else {
            &[(" Space", " Toggle sider")]
        };
        th::build_hint_spans(&*app.theme.theme, hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_icon_tracks_state() {
        assert_eq!(HeaderComponent::collapse_icon(false), IconRef::MenuFold);
        assert_eq!(HeaderComponent::collapse_icon(true), IconRef::MenuUnfold);
    }
}
