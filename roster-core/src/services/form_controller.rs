//! Form controller
//!
//! Owns the record store, the form inputs and the edit cursor. Every
//! mutation of the store goes through here.

use crate::error::{CoreError, CoreResult};
use crate::services::list_renderer::{self, RenderedList};
use crate::store::RecordStore;
use crate::traits::ConfirmPrompt;
use crate::types::{RecordForm, RecordId};

/// Controller mode (the edit cursor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submitting appends a new record
    #[default]
    Creating,
    /// Submitting overwrites the record with this id
    Editing(RecordId),
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        match self {
            Self::Creating => None,
            Self::Editing(id) => Some(*id),
        }
    }

    pub fn submit_label(&self) -> SubmitLabel {
        match self {
            Self::Creating => SubmitLabel::Create,
            Self::Editing(_) => SubmitLabel::Update,
        }
    }
}

/// Label of the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLabel {
    Create,
    Update,
}

/// Command dispatched by the form or by a rendered list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Submit the current form inputs
    Submit,
    /// Load a record into the form for editing
    Edit(RecordId),
    /// Delete a record (after confirmation)
    Delete(RecordId),
}

/// What a successful command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created(RecordId),
    Updated(RecordId),
    EditStarted(RecordId),
    Deleted(RecordId),
    DeleteCancelled(RecordId),
}

impl Outcome {
    /// Whether the store changed (the list must be re-rendered)
    pub fn mutated_store(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated(_) | Self::Deleted(_))
    }
}

/// Form controller
#[derive(Debug, Default)]
pub struct FormController {
    store: RecordStore,
    form: RecordForm,
    mode: FormMode,
}

impl FormController {
    /// Create a controller with an empty store in `Creating` mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller over an existing store
    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    /// Form inputs, for keystroke editing
    pub fn form_mut(&mut self) -> &mut RecordForm {
        &mut self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn submit_label(&self) -> SubmitLabel {
        self.mode.submit_label()
    }

    /// Render the current store
    pub fn render(&self) -> RenderedList {
        list_renderer::render(&self.store)
    }

    // ===== Commands =====

    /// Run a command
    ///
    /// `prompt` is only consulted for [`Command::Delete`].
    pub fn dispatch(
        &mut self,
        command: Command,
        prompt: &mut dyn ConfirmPrompt,
    ) -> CoreResult<Outcome> {
        match command {
            Command::Submit => self.submit(),
            Command::Edit(id) => self.begin_edit(id),
            Command::Delete(id) => self.delete_record(id, prompt),
        }
    }

    /// Validate the form and create or update a record
    ///
    /// On a blank field nothing changes: the inputs and the mode are kept.
    /// On success the inputs are cleared and the mode returns to `Creating`.
    pub fn submit(&mut self) -> CoreResult<Outcome> {
        let record = match self.form.validate() {
            Ok(record) => record,
            Err(e) => {
                log::debug!("Submission rejected: {e}");
                return Err(e);
            }
        };

        let outcome = match self.mode {
            FormMode::Creating => {
                let id = self.store.insert(record);
                log::info!("Record created: {}", id.short());
                Outcome::Created(id)
            }
            FormMode::Editing(id) => {
                self.store.replace(id, record)?;
                log::info!("Record updated: {}", id.short());
                Outcome::Updated(id)
            }
        };

        self.mode = FormMode::Creating;
        self.form.clear();
        Ok(outcome)
    }

    /// Copy a record into the form and switch to `Editing`
    pub fn begin_edit(&mut self, id: RecordId) -> CoreResult<Outcome> {
        let record = self.store.get(id).ok_or_else(|| {
            log::warn!("Edit requested for unknown record: {id}");
            CoreError::RecordNotFound(id)
        })?;

        self.form = RecordForm::from_record(record);
        self.mode = FormMode::Editing(id);
        log::debug!("Editing record: {}", id.short());
        Ok(Outcome::EditStarted(id))
    }

    /// Confirm, then remove a record
    ///
    /// Removing the record being edited resets the mode to `Creating` and
    /// clears the form, so the edit cursor never outlives its record.
    pub fn delete_record(
        &mut self,
        id: RecordId,
        prompt: &mut dyn ConfirmPrompt,
    ) -> CoreResult<Outcome> {
        let Some(record) = self.store.get(id) else {
            log::warn!("Delete requested for unknown record: {id}");
            return Err(CoreError::RecordNotFound(id));
        };

        if !prompt.confirm(record) {
            log::debug!("Delete cancelled: {}", id.short());
            return Ok(Outcome::DeleteCancelled(id));
        }

        self.store.remove(id)?;
        log::info!("Record deleted: {}", id.short());

        if self.mode == FormMode::Editing(id) {
            self.mode = FormMode::Creating;
            self.form.clear();
        }

        Ok(Outcome::Deleted(id))
    }
}
