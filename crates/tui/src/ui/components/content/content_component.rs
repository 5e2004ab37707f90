use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use laba_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use tracing::trace;

use super::state::BREADCRUMB;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{find_target_index_by_mouse_position, rect_contains};

const INPUT_MAX_WIDTH: u16 = 48;

/// Breadcrumb plus the content panel holding the radio group and text input.
///
/// Every interaction here stays inside `ContentState`; the component never
/// dispatches a message or returns an effect.
#[derive(Debug, Default)]
pub struct ContentComponent;

impl ContentComponent {
    fn breadcrumb_line<'a>(theme: &dyn Theme) -> Line<'a> {
        let mut spans = Vec::with_capacity(BREADCRUMB.len() * 2);
        for (index, crumb) in BREADCRUMB.iter().enumerate() {
            let is_last = index + 1 == BREADCRUMB.len();
            if index > 0 {
                spans.push(Span::styled(" / ", theme.text_muted_style()));
            }
            let style = if is_last { theme.text_primary_style() } else { theme.text_muted_style() };
            spans.push(Span::styled(*crumb, style));
        }
        Line::from(spans)
    }

    fn handle_radio_key(app: &mut App, key: KeyEvent) {
        let radio = &mut app.content.radio;
        match key.code {
            KeyCode::Up => radio.move_cursor(-1),
            KeyCode::Down => radio.move_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                radio.check_cursor();
                trace!(value = ?radio.checked_value(), "radio option checked");
            }
            _ => {}
        }
    }

    fn handle_input_key(app: &mut App, key: KeyEvent) {
        let input = &mut app.content.input;
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => input.insert_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }

    fn render_radio_group(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        let focused = app.content.f_radio.get();
        let mut radio_areas = Vec::with_capacity(app.content.radio.options().len());
        for (index, option) in app.content.radio.options().iter().enumerate() {
            let y = area.y + index as u16;
            if y >= area.bottom() {
                break;
            }
            let row_area = Rect::new(area.x, y, area.width, 1);
            let at_cursor = focused && index == app.content.radio.cursor();
            let checked = app.content.radio.is_checked(index);
            let glyph = if checked { "◉" } else { "○" };
            let glyph_style = if checked { theme.accent_primary_style() } else { theme.text_secondary_style() };
            let mut label_style = theme.text_primary_style();
            if at_cursor {
                label_style = label_style.fg(theme.roles().focus).add_modifier(Modifier::BOLD);
            }
            let line = Line::from(vec![
                Span::styled(if at_cursor { "›" } else { " " }, theme.accent_primary_style()),
                Span::styled(glyph, glyph_style),
                Span::styled(format!(" {}", option.label), label_style),
            ]);
            frame.render_widget(Paragraph::new(line).style(th::panel_style(theme)), row_area);
            radio_areas.push(row_area);
        }
        app.content.radio_areas = radio_areas;
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        let focused = app.content.f_input.get();
        let block = th::block(theme, None, focused);
        let inner = block.inner(area);
        let cursor_columns = app.content.input.cursor_columns();
        let scroll = cursor_columns.saturating_sub(inner.width.saturating_sub(1));
        let input = Paragraph::new(app.content.input.input().to_string())
            .style(theme.text_primary_style())
            .scroll((0, scroll))
            .block(block);
        frame.render_widget(input, area);

        if focused && inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position(Position::new(inner.x + cursor_columns - scroll, inner.y));
        }
        app.content.input_area = area;
    }
}

impl Component for ContentComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.content.f_radio.get() {
            Self::handle_radio_key(app, key);
        } else if app.content.f_input.get() {
            Self::handle_input_key(app, key);
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let hit = find_target_index_by_mouse_position(&app.content.last_area, &app.content.radio_areas, mouse.column, mouse.row);
        if let Some(index) = hit {
            app.focus.focus(&app.content.f_radio);
            app.content.radio.check(index);
            trace!(value = ?app.content.radio.checked_value(), "radio option checked");
        } else if rect_contains(app.content.input_area, mouse.column, mouse.row) {
            app.focus.focus(&app.content.f_input);
            app.content.input.move_end();
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        let [_, crumb_area, _, panel_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .horizontal_margin(2)
        .areas(area);

        frame.render_widget(Paragraph::new(Self::breadcrumb_line(theme)).style(th::panel_style(theme)), crumb_area);

        let panel = Block::default().padding(Padding::new(3, 3, 1, 1)).style(th::panel_style(theme));
        let panel_inner = panel.inner(panel_area);
        frame.render_widget(panel, panel_area);

        let option_count = app.content.radio.options().len() as u16;
        let [radio_area, _, input_row, _] = Layout::vertical([
            Constraint::Length(option_count),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(panel_inner);
        let input_area = Rect {
            width: input_row.width.min(INPUT_MAX_WIDTH),
            ..input_row
        };

        self.render_radio_group(frame, radio_area, app);
        self.render_input(frame, input_area, app);
        app.content.last_area = area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let hints: &[(&str, &str)] = if app.content.f_input.get() {
            &[(" Type", " Edit"), (" ←/→", " Move cursor")]
        } else {
            &[(" ↑/↓", " Navigate"), (" Space", " Choose")]
        };
        th::build_hint_spans(&*app.theme.theme, hints)
    }
}
