//! UI components: sider menu, header controls, content panel, footer.

pub mod common;
pub mod component;
pub mod content;
pub mod footer;
pub mod header;
pub mod sider;

pub(crate) use component::Component;
pub use content::{ContentComponent, ContentState};
pub use footer::FooterComponent;
pub use header::{HeaderComponent, HeaderState};
pub use sider::{MenuState, SiderComponent};
