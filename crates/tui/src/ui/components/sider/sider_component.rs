use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use laba_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::MenuRow;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::{find_target_index_by_mouse_position, pad_to_width};

/// Rows reserved above the menu for the logo strip.
const LOGO_HEIGHT: u16 = 2;

/// The collapsible sider holding the inline menu.
///
/// Renders labels and submenu markers while expanded and icons only while
/// collapsed. Menu interaction only changes `MenuState`.
#[derive(Debug, Default)]
pub struct SiderComponent;

impl SiderComponent {
    #[allow(clippy::too_many_arguments)]
    fn row_line<'a>(theme: &dyn Theme, row: MenuRow, width: u16, collapsed: bool, is_open: bool, highlighted: bool, at_cursor: bool) -> Line<'a> {
        let mut style = if highlighted { theme.sider_selection_style() } else { theme.sider_style() };
        if at_cursor {
            style = style.add_modifier(Modifier::BOLD);
        }
        let marker = if at_cursor {
            Span::styled("▎", style.fg(theme.roles().focus))
        } else {
            Span::styled(" ", style)
        };
        let glyph = row.item.icon.map(|icon| icon.glyph()).unwrap_or(" ");

        if collapsed {
            let text = pad_to_width(&format!("  {glyph}"), width.saturating_sub(1) as usize);
            return Line::from(vec![marker, Span::styled(text, style)]);
        }

        let indent = "  ".repeat(usize::from(row.depth) + 1);
        let arrow = match (row.item.is_submenu(), is_open) {
            (true, true) => " ▾",
            (true, false) => " ▸",
            (false, _) => "",
        };
        let body_width = (width as usize).saturating_sub(1 + arrow.chars().count());
        let body = if row.depth == 0 {
            format!("{glyph} {}", row.item.label)
        } else {
            row.item.label.to_string()
        };
        let text = pad_to_width(&format!("{indent}{body}"), body_width);
        Line::from(vec![marker, Span::styled(text, style), Span::styled(arrow, style)])
    }
}

impl Component for SiderComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let collapsed = app.shell.collapsed;
        let menu = &mut app.menu;
        match key.code {
            KeyCode::Up => menu.move_cursor(-1, collapsed),
            KeyCode::Down => menu.move_cursor(1, collapsed),
            KeyCode::Home => menu.move_cursor(isize::MIN / 2, collapsed),
            KeyCode::End => menu.move_cursor(isize::MAX / 2, collapsed),
            KeyCode::Right => menu.open_at_cursor(collapsed),
            KeyCode::Left => menu.close_at_cursor(collapsed),
            KeyCode::Enter | KeyCode::Char(' ') => menu.activate(collapsed),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = find_target_index_by_mouse_position(&app.menu.last_area, &app.menu.row_areas, mouse.column, mouse.row);
                app.focus.focus(&app.menu.f_menu);
                if let Some(index) = hit {
                    app.menu.click_row(index, app.shell.collapsed);
                }
            }
            MouseEventKind::ScrollDown => app.menu.move_cursor(1, app.shell.collapsed),
            MouseEventKind::ScrollUp => app.menu.move_cursor(-1, app.shell.collapsed),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        let collapsed = app.shell.collapsed;
        let focused = app.menu.f_menu.get();

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border_style(focused).bg(theme.roles().sider_background))
            .style(theme.sider_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [logo_area, menu_area] = Layout::vertical([Constraint::Length(LOGO_HEIGHT), Constraint::Min(0)]).areas(inner);
        let logo_width = logo_area.width.saturating_sub(4) as usize;
        let logo = Paragraph::new(Line::from(Span::styled(
            "▀".repeat(logo_width),
            Style::default().fg(theme.roles().text_muted),
        )))
        .centered()
        .style(theme.sider_style());
        frame.render_widget(logo, logo_area);

        let rows = app.menu.visible_rows(collapsed);
        let cursor_index = app.menu.cursor_index(collapsed);
        let mut row_areas = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let y = menu_area.y + index as u16;
            if y >= menu_area.bottom() {
                break;
            }
            let row_area = Rect::new(menu_area.x, y, menu_area.width, 1);
            // a collapsed sider highlights the submenu that holds the selection
            let highlighted = if collapsed {
                app.menu.is_selected_branch(row.item)
            } else {
                row.item.key == app.menu.selected_key()
            };
            let line = Self::row_line(
                theme,
                *row,
                menu_area.width,
                collapsed,
                app.menu.is_open(row.item.key),
                highlighted,
                focused && index == cursor_index,
            );
            frame.render_widget(Paragraph::new(line), row_area);
            row_areas.push(row_area);
        }

        app.menu.last_area = area;
        app.menu.row_areas = row_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.theme.theme,
            &[(" ↑/↓", " Navigate"), (" Enter", " Select"), (" ←/→", " Close/Open")],
        )
    }
}
