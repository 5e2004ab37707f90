//! Application state for the dashboard shell.
//!
//! `App` owns the two shell booleans, the loaded theme, and the per-widget
//! states of the sider, header and content regions. Messages flow through
//! [`App::update`]; widget-internal interactions mutate their own state
//! directly and never reach it.

use laba_types::{Effect, Msg, ShellState};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;

use crate::config::{ColorCapability, TuiConfig};
use crate::ui::components::{ContentState, HeaderState, MenuState};
use crate::ui::theme::{self, LoadedTheme};

#[derive(Debug)]
pub struct App {
    /// Collapse and dark-mode flags
    pub shell: ShellState,
    pub config: TuiConfig,
    /// Color depth resolved once at startup
    pub capability: ColorCapability,
    /// Palette for the current theme mode
    pub theme: LoadedTheme,
    /// Sider menu state
    pub menu: MenuState,
    /// Header controls
    pub header: HeaderState,
    /// Breadcrumb panel widgets
    pub content: ContentState,
    /// Focus ring over all interactive widgets
    pub focus: Focus,
    container: FocusFlag,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let shell = ShellState::new();
        let capability = config.color_mode.resolve();
        let theme = theme::load(shell.theme_mode(), capability);
        let mut app = Self {
            shell,
            config,
            capability,
            theme,
            menu: MenuState::default(),
            header: HeaderState::default(),
            content: ContentState::default(),
            focus: Focus::default(),
            container: FocusFlag::named("app"),
        };
        app.focus = FocusBuilder::build_for(&app);
        app.focus.first();
        app
    }

    /// Applies a message to the shell state.
    ///
    /// Returns effects for the runtime; the shell never requests any, so the
    /// result is currently always empty.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match *msg {
            Msg::ToggleCollapse => {
                self.shell.toggle_collapse();
                self.menu.sync_collapsed(self.shell.collapsed);
                debug!(collapsed = self.shell.collapsed, "sider collapse toggled");
            }
            Msg::ToggleTheme(checked) => {
                self.shell.toggle_theme(checked);
                self.theme = theme::load(self.shell.theme_mode(), self.capability);
                debug!(theme = self.theme.definition.label, "theme switched");
            }
            Msg::Tick | Msg::Resize(_, _) => {}
        }
        Vec::new()
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.widget(&self.menu);
        builder.widget(&self.header);
        builder.widget(&self.content);
    }

    fn focus(&self) -> FocusFlag {
        self.container.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
