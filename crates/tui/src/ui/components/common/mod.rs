pub mod radio_group;
pub mod text_input;

pub use radio_group::{RadioGroupState, RadioOption};
pub use text_input::TextInputState;
