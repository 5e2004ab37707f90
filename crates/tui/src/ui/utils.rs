//! UI utilities shared by the shell components.

use ratatui::layout::{Position, Rect};
use ratatui::text::Span;

/// Returns `true` when the cell at (`x`, `y`) lies inside `area`.
pub fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    area.contains(Position::new(x, y))
}

/// Finds which of `item_areas` was hit, provided the point lies inside `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, item_areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !rect_contains(*container, x, y) {
        return None;
    }
    item_areas.iter().position(|area| rect_contains(*area, x, y))
}

/// Pads `text` with spaces on the right up to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = unicode_width::UnicodeWidthStr::width(text);
    if current >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - current))
}

/// Detaches spans from whatever they borrowed so they can be stored.
pub fn into_owned_spans(spans: Vec<Span<'_>>) -> Vec<Span<'static>> {
    spans
        .into_iter()
        .map(|span| Span::styled(span.content.into_owned(), span.style))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_requires_container() {
        let container = Rect::new(0, 0, 10, 10);
        let rows = [Rect::new(0, 0, 10, 1), Rect::new(0, 1, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 3, 1), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 3, 5), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 30, 1), None);
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("日", 3), "日 ");
        assert_eq!(pad_to_width("long", 2), "long");
    }
}
