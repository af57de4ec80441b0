//! In-process record store backed by an ordered map.
//!
//! Never returns an error. Not `Sync`; one store serves one thread.

use crate::model::Record;
use crate::repo::record_store::{RecordStore, RepoResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// `BTreeMap`-backed store; iteration order is ascending key order.
#[derive(Debug)]
pub struct MemoryRecordStore<V> {
    entries: RefCell<BTreeMap<String, V>>,
}

impl<V> MemoryRecordStore<V> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<V> Default for MemoryRecordStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Record> RecordStore<V> for MemoryRecordStore<V> {
    fn get(&self, key: &str) -> RepoResult<Option<V>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn insert(&self, key: &str, value: &V) -> RepoResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn values(&self) -> RepoResult<Vec<V>> {
        Ok(self.entries.borrow().values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryRecordStore;
    use crate::model::identity::CallerId;
    use crate::model::vocabulary_list::VocabularyList;
    use crate::repo::record_store::RecordStore;

    fn list(id: &str) -> VocabularyList {
        VocabularyList::new(id.to_string(), id.to_uppercase(), CallerId::new("a"), 1)
    }

    #[test]
    fn values_are_key_ordered_and_insert_overwrites() {
        let store: MemoryRecordStore<VocabularyList> = MemoryRecordStore::new();
        store.insert("b", &list("b")).unwrap();
        store.insert("a", &list("a")).unwrap();

        let mut renamed = list("b");
        renamed.name = "renamed".to_string();
        store.insert("b", &renamed).unwrap();

        let values = store.values().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].id, "a");
        assert_eq!(values[1].name, "renamed");
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let store: MemoryRecordStore<VocabularyList> = MemoryRecordStore::new();
        store.remove("missing").unwrap();
        assert!(store.get("missing").unwrap().is_none());
        assert!(store.is_empty());
    }
}
