//! Header bar: sider collapse button and light/dark theme switch.

mod header_component;
mod state;

pub use header_component::HeaderComponent;
pub use state::HeaderState;
