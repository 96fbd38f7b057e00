//! Record query
//!
//! Exact-match filter over name, email and phone. Comparison is
//! case-sensitive and never matches substrings; a blank filter matches
//! every record.

use crate::store::RecordStore;
use crate::types::{RecordId, UserRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    filter: String,
}

impl RecordQuery {
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.filter
    }

    /// Blank (empty or whitespace-only) filters match everything
    pub fn is_blank(&self) -> bool {
        self.filter.trim().is_empty()
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        self.is_blank()
            || record.name == self.filter
            || record.email == self.filter
            || record.phone == self.filter
    }

    /// Matching records, in store order
    pub fn apply<'a>(
        &'a self,
        store: &'a RecordStore,
    ) -> impl Iterator<Item = (RecordId, &'a UserRecord)> + 'a {
        store.iter().filter(move |(_, record)| self.matches(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_records;

    fn names(query: &RecordQuery, store: &RecordStore) -> Vec<String> {
        query.apply(store).map(|(_, r)| r.name.clone()).collect()
    }

    #[test]
    fn blank_filter_matches_all() {
        let store: RecordStore = sample_records().into_iter().collect();
        assert_eq!(names(&RecordQuery::new(""), &store).len(), 3);
        assert_eq!(names(&RecordQuery::new("   "), &store).len(), 3);
    }

    #[test]
    fn matches_any_field_exactly() {
        let store: RecordStore = sample_records().into_iter().collect();

        assert_eq!(names(&RecordQuery::new("Bia"), &store), ["Bia"]);
        assert_eq!(names(&RecordQuery::new("c@x.com"), &store), ["Caio"]);
        assert_eq!(names(&RecordQuery::new("111"), &store), ["Ana"]);
    }

    #[test]
    fn no_substring_or_case_folding() {
        let store: RecordStore = sample_records().into_iter().collect();

        assert!(names(&RecordQuery::new("Bi"), &store).is_empty());
        assert!(names(&RecordQuery::new("bia"), &store).is_empty());
        assert!(names(&RecordQuery::new(" Bia"), &store).is_empty());
    }

    #[test]
    fn duplicates_all_match() {
        let store: RecordStore = vec![
            UserRecord::new("Ana", "a@x.com", "111"),
            UserRecord::new("Ana", "other@x.com", "999"),
        ]
        .into_iter()
        .collect();

        assert_eq!(names(&RecordQuery::new("Ana"), &store).len(), 2);
    }
}
