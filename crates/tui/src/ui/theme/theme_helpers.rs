use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::Theme;

/// Build a standard Block with token surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(theme.surface_style());
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for the token-colored containers (header, content panel, footer).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.surface_style()
}

/// Visual state for [`render_button`].
#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderOptions {
    pub enabled: bool,
    pub focused: bool,
    pub borders: Borders,
}

impl ButtonRenderOptions {
    pub fn new(enabled: bool, focused: bool, borders: Borders) -> Self {
        Self { enabled, focused, borders }
    }
}

/// Borderless text button style; focused buttons pick up the accent color.
pub fn button_style<T: Theme + ?Sized>(theme: &T, options: &ButtonRenderOptions) -> Style {
    if !options.enabled {
        return theme.text_muted_style().bg(theme.roles().background);
    }
    let base = theme.surface_style();
    if options.focused {
        base.fg(theme.roles().accent_primary).add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

/// Renders a standard button
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, options: ButtonRenderOptions) {
    let border_style = if options.enabled {
        theme.border_style(options.focused)
    } else {
        theme.text_muted_style()
    };

    let padding = if options.borders.is_empty() {
        Padding::uniform(1) // Add padding when no borders to match bordered button size
    } else {
        Padding::uniform(0)
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .borders(options.borders)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .padding(padding),
            )
            .style(button_style(theme, &options)),
        area,
    );
}

/// Spans for a two-state switch: a track with the knob on the checked side.
pub fn switch_spans<'a, T: Theme + ?Sized>(theme: &T, checked: bool, on_label: &'a str, off_label: &'a str) -> Line<'a> {
    let roles = theme.roles();
    let track = if checked { roles.switch_on } else { roles.switch_off };
    let knob_style = Style::default().fg(roles.background).bg(track).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(roles.background).bg(track);
    if checked {
        Line::from(vec![
            Span::styled(format!(" {on_label} "), label_style),
            Span::styled("●", knob_style),
        ])
    } else {
        Line::from(vec![
            Span::styled("●", knob_style),
            Span::styled(format!(" {off_label} "), label_style),
        ])
    }
}

/// Builds `key  description` hint pairs, keys emphasized.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
