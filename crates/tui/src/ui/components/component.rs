//! Component system for the dashboard TUI.
//!
//! This module defines the Component trait that every shell region
//! implements. Components are self-contained UI elements that handle their
//! own input and rendering while reading the shared shell state from `App`.

use crossterm::event::{KeyEvent, MouseEvent};
use laba_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A trait representing a UI component with its own state and behavior.
///
/// Components handle localized events, update their internal state, and render
/// themselves into a provided `Rect`, reporting any side effects back to the
/// runtime via `Effect`s.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: the main view routes key events to the component
///    owning the focused widget and mouse events to the component under the
///    pointer
/// 2. **State Updates**: `handle_message()` forwards application messages to
///    `App::update`
/// 3. **Rendering**: `render()` draws the component into the provided frame area
pub(crate) trait Component {
    /// Handle a generic application-level message.
    ///
    /// # Arguments
    ///
    /// * `app` - The application state
    /// * `msg` - The application message to handle
    ///
    /// # Returns
    ///
    /// Vector of effects that the runtime should process
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that land inside this component's last rendered area.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing,
    /// cursor placement, and recording hit-test areas for mouse handling.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Keyboard hints shown in the footer while this component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
