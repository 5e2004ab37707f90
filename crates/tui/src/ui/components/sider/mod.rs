//! Collapsible sider with the inline menu.
//!
//! - `MenuState` owns open submenus, the selected leaf, and the keyboard cursor
//! - `SiderComponent` paints the menu and routes keys/clicks into the state
//!
//! Expanded, each row shows icon and label plus an open/closed marker for
//! submenus. Collapsed, only top-level icons are shown.

mod sider_component;
mod state;

pub use sider_component::SiderComponent;
pub use state::MenuState;
