//! Delete confirmation abstract Trait

use crate::types::UserRecord;

/// Synchronous yes/no confirmation asked before a record is deleted
///
/// Platform implementation:
/// - TUI: the answer collected by the confirm-delete modal, wrapped in
///   [`PresetAnswer`]
/// - Tests: scripted prompts that record what they were asked
pub trait ConfirmPrompt {
    /// Ask whether `record` should be deleted
    ///
    /// # Arguments
    /// * `record` - The record about to be removed
    fn confirm(&mut self, record: &UserRecord) -> bool;
}

/// A prompt whose answer is already known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresetAnswer(pub bool);

impl ConfirmPrompt for PresetAnswer {
    fn confirm(&mut self, _record: &UserRecord) -> bool {
        self.0
    }
}
