//! Footer strip: the centered brand label plus the key hints of the focused
//! widget.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

pub const FOOTER_LABEL: &str = "LABA SPACE";

#[derive(Debug, Default)]
pub struct FooterComponent {
    hints: Vec<Span<'static>>,
}

impl FooterComponent {
    /// Replaces the hint line shown beneath the label.
    pub fn set_hints(&mut self, hints: Vec<Span<'static>>) {
        self.hints = hints;
    }
}

impl Component for FooterComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        frame.render_widget(Block::default().style(th::panel_style(theme)), area);

        let [_, label_area, hint_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let label = Paragraph::new(FOOTER_LABEL).centered().style(th::panel_style(theme));
        frame.render_widget(label, label_area);

        let hints = Paragraph::new(Line::from(self.hints.clone()))
            .centered()
            .style(theme.text_muted_style().bg(theme.roles().background));
        frame.render_widget(hints, hint_area);
    }
}
