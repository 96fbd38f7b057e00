//! Front-end abstraction trait definition

mod confirm_prompt;

pub use confirm_prompt::{ConfirmPrompt, PresetAnswer};
