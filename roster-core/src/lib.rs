//! Roster Core Library
//!
//! Provides the platform-independent part of the Roster record editor:
//! - Record store (ordered, keyed by stable record ids)
//! - Form controller (create/update state machine over the store)
//! - List renderer (pure view model of the store)
//! - Record query (exact-match filtering)
//!
//! Nothing here touches a terminal. The confirmation step of a delete is
//! abstracted through the [`ConfirmPrompt`] trait, so any front end can
//! plug in its own dialog.

pub mod error;
pub mod services;
pub mod store;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    render, render_filtered, ActionKind, Command, FormController, FormMode, ItemAction,
    ListEntry, Outcome, RecordQuery, RenderedList, SubmitLabel,
};
pub use store::RecordStore;
pub use traits::{ConfirmPrompt, PresetAnswer};
pub use types::{FormField, RecordForm, RecordId, UserRecord};
