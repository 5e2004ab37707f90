//! UI layer of the dashboard shell.
//!
//! Components draw the shell regions, `layout` splits the screen, `theme`
//! turns the token pairs into terminal styles, and `runtime` owns the
//! terminal and the event loop.

pub mod components;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
