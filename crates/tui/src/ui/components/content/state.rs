use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::{RadioGroupState, RadioOption, TextInputState};

/// Breadcrumb trail shown above the content panel.
pub const BREADCRUMB: [&str; 2] = ["User", "Bill"];

/// Radio options displayed in the content panel.
pub fn default_radio_options() -> Vec<RadioOption> {
    vec![
        RadioOption { value: 1, label: "Option A" },
        RadioOption { value: 2, label: "Option B" },
        RadioOption { value: 3, label: "Option C" },
        RadioOption { value: 4, label: "Option D" },
    ]
}

/// Widget-internal state of the content panel.
///
/// Both widgets are uncontrolled placeholders: they keep their own values and
/// nothing outside this struct observes them.
#[derive(Debug, Clone)]
pub struct ContentState {
    pub radio: RadioGroupState,
    pub input: TextInputState,
    container: FocusFlag,
    pub f_radio: FocusFlag,
    pub f_input: FocusFlag,
    pub last_area: Rect,
    pub radio_areas: Vec<Rect>,
    pub input_area: Rect,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            radio: RadioGroupState::new(default_radio_options()),
            input: TextInputState::new(),
            container: FocusFlag::named("content"),
            f_radio: FocusFlag::named("content.radio_group"),
            f_input: FocusFlag::named("content.input"),
            last_area: Rect::default(),
            radio_areas: Vec::new(),
            input_area: Rect::default(),
        }
    }
}

impl HasFocus for ContentState {
    fn build(&self, builder: &mut FocusBuilder) {
        let start = builder.start(self);
        builder.leaf_widget(&self.f_radio);
        builder.leaf_widget(&self.f_input);
        builder.end(start);
    }

    fn focus(&self) -> FocusFlag {
        self.container.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
