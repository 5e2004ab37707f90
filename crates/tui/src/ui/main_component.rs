use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use laba_types::{Effect, Msg};
use ratatui::{
    prelude::*,
    style::Style,
    widgets::Paragraph,
};

use super::components::{Component, ContentComponent, FooterComponent, HeaderComponent, SiderComponent};
use super::layout::ShellLayout;
use super::theme::theme_helpers as th;
use super::utils::{into_owned_spans, rect_contains};
use crate::app::App;

/// Root view composing the sider, header, content panel and footer.
#[derive(Debug, Default)]
pub struct MainView {
    pub sider_view: SiderComponent,
    pub header_view: HeaderComponent,
    pub content_view: ContentComponent,
    pub footer_view: FooterComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcuts honored regardless of which widget holds focus.
    fn handle_global_keys(&mut self, app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(vec![Effect::Quit]),
            KeyCode::Char('b') if ctrl => Some(self.handle_message(app, Msg::ToggleCollapse)),
            KeyCode::Char('t') if ctrl => {
                let checked = !app.shell.is_dark_mode;
                Some(self.handle_message(app, Msg::ToggleTheme(checked)))
            }
            KeyCode::Tab => {
                app.focus.next();
                Some(Vec::new())
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Some(Vec::new())
            }
            _ => None,
        }
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if let Some(effects) = self.handle_global_keys(app, key) {
            return effects;
        }

        if app.menu.f_menu.get() {
            return self.sider_view.handle_key_events(app, key);
        }
        if app.header.f_collapse_button.get() || app.header.f_theme_switch.get() {
            return self.header_view.handle_key_events(app, key);
        }
        if app.content.f_radio.get() || app.content.f_input.get() {
            return self.content_view.handle_key_events(app, key);
        }

        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let (x, y) = (mouse.column, mouse.row);
        if rect_contains(app.menu.last_area, x, y) {
            return self.sider_view.handle_mouse_events(app, mouse);
        }
        if rect_contains(app.header.last_area, x, y) {
            return self.header_view.handle_mouse_events(app, mouse);
        }
        if rect_contains(app.content.last_area, x, y) {
            return self.content_view.handle_mouse_events(app, mouse);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the entire background with the token background first
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.theme.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = ShellLayout::compute(area, app.shell.collapsed);
        self.sider_view.render(frame, layout.sider, app);
        self.header_view.render(frame, layout.header, app);
        self.content_view.render(frame, layout.content, app);

        let hints = into_owned_spans(self.get_hint_spans(app));
        self.footer_view.set_hints(hints);
        self.footer_view.render(frame, layout.footer, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans = if app.menu.f_menu.get() {
            self.sider_view.get_hint_spans(app)
        } else if app.header.f_collapse_button.get() || app.header.f_theme_switch.get() {
            self.header_view.get_hint_spans(app)
        } else {
            self.content_view.get_hint_spans(app)
        };

        hint_spans.extend(th::build_hint_spans(
            &*app.theme.theme,
            &[(" Tab", " Focus "), ("Ctrl+B", " Collapse "), ("Ctrl+T", " Theme "), ("Ctrl+Q", " Quit ")],
        ));
        hint_spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorMode, TuiConfig};
    use crossterm::event::{MouseButton, MouseEventKind};
    use laba_types::ShellState;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 30;

    fn app() -> App {
        App::new(TuiConfig {
            color_mode: ColorMode::Truecolor,
        })
    }

    fn draw(view: &mut MainView, app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
        let wanted: Vec<String> = text.chars().map(String::from).collect();
        let len = wanted.len() as u16;
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width.saturating_sub(len - 1) {
                if (0..len).all(|offset| buffer[(x + offset, y)].symbol() == wanted[offset as usize]) {
                    return Some((x, y));
                }
            }
        }
        None
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn initial_frame_is_light_and_expanded() {
        let mut app = app();
        let mut view = MainView::new();
        let buffer = draw(&mut view, &mut app);

        let header = ShellLayout::compute(buffer.area, false).header;
        let cell = &buffer[(header.x + 30, header.y + 1)];
        assert_eq!(cell.bg, Color::Rgb(0xFF, 0xFF, 0xFF));

        let (x, y) = find_text(&buffer, "LABA SPACE").expect("footer label");
        assert!(x >= header.x);
        assert_eq!(buffer[(x, y)].fg, Color::Rgb(0, 0, 0));
        assert_eq!(buffer[(x, y)].bg, Color::Rgb(0xFF, 0xFF, 0xFF));

        assert!(find_text(&buffer, "Option 1").is_some());
        assert!(find_text(&buffer, "Files").is_some());
        assert!(find_text(&buffer, "User / Bill").is_some());
        assert!(find_text(&buffer, "Option D").is_some());
    }

    #[test]
    fn collapsed_sider_hides_labels() {
        let mut app = app();
        let mut view = MainView::new();
        assert!(view.handle_key_events(&mut app, ctrl('b')).is_empty());
        assert!(app.shell.collapsed);

        let buffer = draw(&mut view, &mut app);
        assert!(find_text(&buffer, "Option 1").is_none());
        assert!(find_text(&buffer, "Files").is_none());
        assert!(find_text(&buffer, "▤").is_some());
        assert_eq!(app.menu.last_area.width, crate::ui::layout::SIDER_COLLAPSED_WIDTH);
    }

    #[test]
    fn dark_mode_paints_dark_tokens() {
        let mut app = app();
        let mut view = MainView::new();
        view.handle_key_events(&mut app, ctrl('t'));
        assert!(app.shell.is_dark_mode);

        let buffer = draw(&mut view, &mut app);
        let (x, y) = find_text(&buffer, "LABA SPACE").expect("footer label");
        assert_eq!(buffer[(x, y)].bg, Color::Rgb(0x00, 0x21, 0x40));
        assert_eq!(buffer[(x, y)].fg, Color::Rgb(166, 177, 188));
    }

    #[test]
    fn double_toggles_restore_the_shell() {
        let mut app = app();
        let mut view = MainView::new();
        for shortcut in ['b', 'b', 't', 't'] {
            view.handle_key_events(&mut app, ctrl(shortcut));
        }
        assert_eq!(app.shell, ShellState::new());
        assert_eq!(app.theme.definition.id, "light");
    }

    #[test]
    fn quit_shortcuts_request_exit() {
        let mut app = app();
        let mut view = MainView::new();
        assert_eq!(view.handle_key_events(&mut app, ctrl('q')), vec![Effect::Quit]);
        assert_eq!(view.handle_key_events(&mut app, ctrl('c')), vec![Effect::Quit]);
    }

    #[test]
    fn radio_and_input_stay_local() {
        let mut app = app();
        let mut view = MainView::new();
        app.focus.focus(&app.content.f_radio);
        assert!(view.handle_key_events(&mut app, key(KeyCode::Down)).is_empty());
        assert!(view.handle_key_events(&mut app, key(KeyCode::Char(' '))).is_empty());
        assert_eq!(app.content.radio.checked().map(|option| option.label), Some("Option B"));

        view.handle_key_events(&mut app, key(KeyCode::Tab));
        assert!(app.content.f_input.get());
        for c in "héllo".chars() {
            assert!(view.handle_key_events(&mut app, key(KeyCode::Char(c))).is_empty());
        }
        view.handle_key_events(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.content.input.input(), "héll");
        assert_eq!(app.shell, ShellState::new());
    }

    #[test]
    fn mouse_clicks_route_to_the_region_under_the_pointer() {
        let mut app = app();
        let mut view = MainView::new();
        draw(&mut view, &mut app);

        let radio_row = app.content.radio_areas[2];
        assert!(view.handle_mouse_events(&mut app, click(radio_row.x + 2, radio_row.y)).is_empty());
        assert!(app.content.radio.is_checked(2));
        assert!(app.content.f_radio.get());
        assert_eq!(app.shell, ShellState::new());

        let button = app.header.button_area;
        view.handle_mouse_events(&mut app, click(button.x + 1, button.y + 1));
        assert!(app.shell.collapsed);
        assert!(app.header.f_collapse_button.get());

        let switch = app.header.switch_area;
        view.handle_mouse_events(&mut app, click(switch.x + 1, switch.y + 1));
        assert!(app.shell.is_dark_mode);
    }

    #[test]
    fn clicking_a_menu_row_selects_it_and_focuses_the_menu() {
        let mut app = app();
        let mut view = MainView::new();
        app.focus.focus(&app.content.f_input);
        draw(&mut view, &mut app);

        let files_row = app.menu.row_areas[4];
        assert!(view.handle_mouse_events(&mut app, click(files_row.x + 3, files_row.y)).is_empty());
        assert_eq!(app.menu.selected_key(), "9");
        assert!(app.menu.f_menu.get());
        assert!(!app.content.f_input.get());
        assert_eq!(app.shell, ShellState::new());

        // a submenu row opens inline instead of selecting
        let user_row = app.menu.row_areas[2];
        view.handle_mouse_events(&mut app, click(user_row.x + 3, user_row.y));
        assert!(app.menu.is_open("sub1"));
        assert_eq!(app.menu.selected_key(), "9");
        assert_eq!(app.shell, ShellState::new());
    }

    #[test]
    fn menu_selection_is_unchanged_by_shell_toggles() {
        let mut app = app();
        let mut view = MainView::new();
        view.handle_key_events(&mut app, key(KeyCode::Down));
        view.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(app.menu.selected_key(), "2");

        view.handle_key_events(&mut app, ctrl('b'));
        view.handle_key_events(&mut app, ctrl('t'));
        assert_eq!(app.menu.selected_key(), "2");
        assert_eq!(app.menu.items().len(), 5);
    }
}
