//! Record store
//!
//! Ordered mapping from [`RecordId`] to [`UserRecord`]. Insertion order is
//! display order; replacing a record keeps its position, removing one shifts
//! every later record up by one.

use crate::error::{CoreError, CoreResult};
use crate::types::{RecordId, UserRecord};

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    entries: Vec<(RecordId, UserRecord)>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate records in display order
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &UserRecord)> {
        self.entries.iter().map(|(id, record)| (*id, record))
    }

    /// Record ids in display order
    pub fn ids(&self) -> Vec<RecordId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub fn get(&self, id: RecordId) -> Option<&UserRecord> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, record)| record)
    }

    /// Current display position of a record
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| *entry_id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    // ===== Mutations =====

    /// Append a record under a freshly generated id
    pub fn insert(&mut self, record: UserRecord) -> RecordId {
        let id = RecordId::new();
        self.entries.push((id, record));
        id
    }

    /// Overwrite a record in place
    pub fn replace(&mut self, id: RecordId, record: UserRecord) -> CoreResult<()> {
        let slot = self
            .entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .ok_or(CoreError::RecordNotFound(id))?;
        slot.1 = record;
        Ok(())
    }

    /// Remove a record, returning it
    pub fn remove(&mut self, id: RecordId) -> CoreResult<UserRecord> {
        let index = self.position(id).ok_or(CoreError::RecordNotFound(id))?;
        let (_, record) = self.entries.remove(index);
        Ok(record)
    }
}

impl FromIterator<UserRecord> for RecordStore {
    fn from_iter<T: IntoIterator<Item = UserRecord>>(iter: T) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_records;

    #[test]
    fn insert_appends_in_order() {
        let mut store = RecordStore::new();
        let a = store.insert(UserRecord::new("Ana", "a@x.com", "111"));
        let b = store.insert(UserRecord::new("Bia", "b@x.com", "222"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.ids(), vec![a, b]);
        assert_eq!(store.position(b), Some(1));
    }

    #[test]
    fn replace_keeps_position() {
        let mut store: RecordStore = sample_records().into_iter().collect();
        let ids = store.ids();

        store
            .replace(ids[1], UserRecord::new("Bruna", "b@y.com", "999"))
            .unwrap();

        assert_eq!(store.ids(), ids);
        assert_eq!(store.get(ids[1]).unwrap().name, "Bruna");
    }

    #[test]
    fn remove_shifts_later_records() {
        let mut store: RecordStore = sample_records().into_iter().collect();
        let ids = store.ids();

        let removed = store.remove(ids[0]).unwrap();

        assert_eq!(removed.name, "Ana");
        assert_eq!(store.len(), 2);
        assert_eq!(store.position(ids[1]), Some(0));
        assert_eq!(store.position(ids[2]), Some(1));
        assert!(!store.contains(ids[0]));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut store = RecordStore::new();
        let ghost = RecordId::new();

        assert_eq!(store.remove(ghost), Err(CoreError::RecordNotFound(ghost)));
        assert_eq!(
            store.replace(ghost, UserRecord::default()),
            Err(CoreError::RecordNotFound(ghost))
        );
        assert!(store.get(ghost).is_none());
    }

    #[test]
    fn duplicates_are_allowed() {
        let record = UserRecord::new("Ana", "a@x.com", "111");
        let store: RecordStore = vec![record.clone(), record].into_iter().collect();
        assert_eq!(store.len(), 2);
    }
}
