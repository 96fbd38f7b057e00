//! List renderer
//!
//! Pure view model of the record store: one entry per record, in store
//! order, each carrying the commands its action controls dispatch. Front
//! ends rebuild it on every frame; there is no diffing.

use crate::services::form_controller::Command;
use crate::services::record_query::RecordQuery;
use crate::store::RecordStore;
use crate::types::{FormField, RecordId, UserRecord};

/// Kind of per-item action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
}

/// Action control attached to a list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemAction {
    pub kind: ActionKind,
    pub command: Command,
}

/// One rendered list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: RecordId,
    /// Position in the store (not in the rendered list when filtered)
    pub position: usize,
    pub record: UserRecord,
    pub actions: [ItemAction; 2],
}

impl ListEntry {
    fn new(position: usize, id: RecordId, record: &UserRecord) -> Self {
        Self {
            id,
            position,
            record: record.clone(),
            actions: [
                ItemAction {
                    kind: ActionKind::Edit,
                    command: Command::Edit(id),
                },
                ItemAction {
                    kind: ActionKind::Delete,
                    command: Command::Delete(id),
                },
            ],
        }
    }

    /// Labeled fields, in form order
    pub fn fields(&self) -> [(FormField, &str); 3] {
        self.record.fields()
    }

    /// Command of the given action control
    pub fn command(&self, kind: ActionKind) -> Command {
        match kind {
            ActionKind::Edit => self.actions[0].command,
            ActionKind::Delete => self.actions[1].command,
        }
    }
}

/// Rendered list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedList {
    pub entries: Vec<ListEntry>,
}

impl RenderedList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ListEntry> {
        self.entries.get(index)
    }

    /// Index of a record in the rendered list
    pub fn index_of(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

/// Render every record in the store
pub fn render(store: &RecordStore) -> RenderedList {
    render_filtered(store, &RecordQuery::default())
}

/// Render the records matching `query`, keeping store order
pub fn render_filtered(store: &RecordStore, query: &RecordQuery) -> RenderedList {
    let entries = store
        .iter()
        .enumerate()
        .filter(|(_, (_, record))| query.matches(record))
        .map(|(position, (id, record))| ListEntry::new(position, id, record))
        .collect();

    RenderedList { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_records;

    #[test]
    fn one_entry_per_record_in_store_order() {
        let store: RecordStore = sample_records().into_iter().collect();

        let rendered = render(&store);

        assert_eq!(rendered.len(), store.len());
        for (index, (entry, (id, record))) in rendered.entries.iter().zip(store.iter()).enumerate()
        {
            assert_eq!(entry.id, id);
            assert_eq!(entry.position, index);
            assert_eq!(&entry.record, record);
        }
    }

    #[test]
    fn actions_carry_the_record_id() {
        let store: RecordStore = sample_records().into_iter().collect();
        let ids = store.ids();

        let rendered = render(&store);
        let entry = rendered.get(1).unwrap();

        assert_eq!(entry.command(ActionKind::Edit), Command::Edit(ids[1]));
        assert_eq!(entry.command(ActionKind::Delete), Command::Delete(ids[1]));
        assert_eq!(entry.actions[0].kind, ActionKind::Edit);
        assert_eq!(entry.actions[1].kind, ActionKind::Delete);
    }

    #[test]
    fn rendering_is_idempotent() {
        let store: RecordStore = sample_records().into_iter().collect();
        assert_eq!(render(&store), render(&store));
    }

    #[test]
    fn empty_store_renders_nothing() {
        assert!(render(&RecordStore::new()).is_empty());
    }

    #[test]
    fn filtered_render_keeps_store_positions() {
        let store: RecordStore = sample_records().into_iter().collect();
        let ids = store.ids();

        let rendered = render_filtered(&store, &RecordQuery::new("333"));

        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered.entries[0].id, ids[2]);
        assert_eq!(rendered.entries[0].position, 2);
        assert_eq!(rendered.index_of(ids[2]), Some(0));
        assert_eq!(rendered.index_of(ids[0]), None);
    }
}
