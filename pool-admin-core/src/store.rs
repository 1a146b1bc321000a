//! In-memory record store
//!
//! Ordered sequence of records with unique identifiers. Every mutation
//! either succeeds completely or leaves the store untouched.

use std::collections::HashSet;

use crate::error::{ConsoleError, ConsoleResult};
use crate::types::Record;

/// Ordered, identifier-unique collection of records
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    /// Build a store from seed records, rejecting duplicate identifiers
    pub fn new(records: Vec<R>) -> ConsoleResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(ConsoleError::DuplicateIdentifier(record.id().to_string()));
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in display order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Insert at the front (newest first)
    pub fn prepend(&mut self, record: R) -> ConsoleResult<()> {
        if self.contains(record.id()) {
            return Err(ConsoleError::DuplicateIdentifier(record.id().to_string()));
        }
        self.records.insert(0, record);
        Ok(())
    }

    /// Insert at the back
    pub fn append(&mut self, record: R) -> ConsoleResult<()> {
        if self.contains(record.id()) {
            return Err(ConsoleError::DuplicateIdentifier(record.id().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    /// Mutate a record in place.
    ///
    /// The identifier is immutable: if `apply` changes it, the record is
    /// restored and an error is returned.
    pub fn update<F>(&mut self, id: &str, apply: F) -> ConsoleResult<&R>
    where
        F: FnOnce(&mut R),
    {
        let index = self
            .position(id)
            .ok_or_else(|| ConsoleError::RecordNotFound(id.to_string()))?;

        let original = self.records[index].clone();
        apply(&mut self.records[index]);

        if self.records[index].id() != id {
            self.records[index] = original;
            return Err(ConsoleError::InvalidFormState(format!(
                "identifier of {id} cannot change"
            )));
        }
        Ok(&self.records[index])
    }

    /// Remove a record by identifier, returning it
    pub fn remove(&mut self, id: &str) -> ConsoleResult<R> {
        let index = self
            .position(id)
            .ok_or_else(|| ConsoleError::RecordNotFound(id.to_string()))?;
        Ok(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SystemCard;

    fn card(title: &str) -> SystemCard {
        SystemCard {
            title: title.to_string(),
            category: "Academic".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn new_rejects_duplicate_seed() {
        let result = RecordStore::new(vec![card("A"), card("B"), card("A")]);
        assert_eq!(
            result.unwrap_err(),
            ConsoleError::DuplicateIdentifier("A".into())
        );
    }

    #[test]
    fn prepend_puts_record_first() {
        let mut store = RecordStore::new(vec![card("A")]).unwrap();
        store.prepend(card("B")).unwrap();
        let titles: Vec<_> = store.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn duplicate_prepend_leaves_store_unchanged() {
        let mut store = RecordStore::new(vec![card("A"), card("B")]).unwrap();
        let err = store.prepend(card("B")).unwrap_err();
        assert!(matches!(err, ConsoleError::DuplicateIdentifier(_)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].title, "A");
    }

    #[test]
    fn update_cannot_change_identifier() {
        let mut store = RecordStore::new(vec![card("A")]).unwrap();
        let err = store
            .update("A", |c| {
                c.title = "Z".into();
                c.description = "changed".into();
            })
            .unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidFormState(_)));
        assert_eq!(store.records()[0], card("A"));
    }

    #[test]
    fn update_and_remove_missing_record() {
        let mut store: RecordStore<SystemCard> = RecordStore::default();
        assert!(matches!(
            store.update("x", |_| {}),
            Err(ConsoleError::RecordNotFound(_))
        ));
        assert!(matches!(store.remove("x"), Err(ConsoleError::RecordNotFound(_))));
    }

    #[test]
    fn remove_takes_exactly_one() {
        let mut store = RecordStore::new(vec![card("A"), card("B"), card("C")]).unwrap();
        let removed = store.remove("B").unwrap();
        assert_eq!(removed.title, "B");
        let titles: Vec<_> = store.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }
}
