//! Content area: breadcrumb plus the panel with the placeholder radio group
//! and text input.

mod content_component;
mod state;

pub use content_component::ContentComponent;
pub use state::ContentState;
