//! Shell layout: a sider column on the left and an inner column holding the
//! header, content and footer.
use ratatui::layout::{Constraint, Layout, Rect};

/// Sider width while expanded, in columns.
pub const SIDER_EXPANDED_WIDTH: u16 = 26;
/// Sider width while collapsed; wide enough for an icon plus the border.
pub const SIDER_COLLAPSED_WIDTH: u16 = 7;
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Rectangles for each shell region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub sider: Rect,
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
}

impl ShellLayout {
    pub fn sider_width(collapsed: bool) -> u16 {
        if collapsed { SIDER_COLLAPSED_WIDTH } else { SIDER_EXPANDED_WIDTH }
    }

    /// Splits `area` for the current collapse state.
    ///
    /// On very narrow terminals the sider keeps its width and the inner
    /// column shrinks first.
    pub fn compute(area: Rect, collapsed: bool) -> Self {
        let [sider, inner] = Layout::horizontal([Constraint::Length(Self::sider_width(collapsed)), Constraint::Min(0)]).areas(area);
        let [header, content, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(inner);
        Self {
            sider,
            header,
            content,
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_layout_reserves_full_sider() {
        let layout = ShellLayout::compute(Rect::new(0, 0, 100, 30), false);
        assert_eq!(layout.sider, Rect::new(0, 0, SIDER_EXPANDED_WIDTH, 30));
        assert_eq!(layout.header, Rect::new(26, 0, 74, 3));
        assert_eq!(layout.footer, Rect::new(26, 27, 74, 3));
        assert_eq!(layout.content, Rect::new(26, 3, 74, 24));
    }

    #[test]
    fn collapsing_widens_the_inner_column() {
        let expanded = ShellLayout::compute(Rect::new(0, 0, 100, 30), false);
        let collapsed = ShellLayout::compute(Rect::new(0, 0, 100, 30), true);
        assert_eq!(collapsed.sider.width, SIDER_COLLAPSED_WIDTH);
        assert_eq!(
            collapsed.content.width - expanded.content.width,
            SIDER_EXPANDED_WIDTH - SIDER_COLLAPSED_WIDTH
        );
        assert_eq!(collapsed.header.x, SIDER_COLLAPSED_WIDTH);
    }
}
