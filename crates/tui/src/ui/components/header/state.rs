use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// Focus flags and hit-test areas for the header controls.
///
/// The header owns no shell state of its own: the button and switch read
/// `ShellState` when rendering and dispatch the toggle messages when pressed.
#[derive(Debug, Clone)]
pub struct HeaderState {
    container: FocusFlag,
    pub f_collapse_button: FocusFlag,
    pub f_theme_switch: FocusFlag,
    pub last_area: Rect,
    pub button_area: Rect,
    pub switch_area: Rect,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            container: FocusFlag::named("header"),
            f_collapse_button: FocusFlag::named("header.collapse_button"),
            f_theme_switch: FocusFlag::named("header.theme_switch"),
            last_area: Rect::default(),
            button_area: Rect::default(),
            switch_area: Rect::default(),
        }
    }
}

impl HasFocus for HeaderState {
    fn build(&self, builder: &mut FocusBuilder) {
        let start = builder.start(self);
        builder.leaf_widget(&self.f_collapse_button);
        builder.leaf_widget(&self.f_theme_switch);
        builder.end(start);
    }

    fn focus(&self) -> FocusFlag {
        self.container.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
