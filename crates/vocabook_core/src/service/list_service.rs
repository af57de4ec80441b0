//! Vocabulary list use-case service.
//!
//! # Responsibility
//! - Create, rename, read, count and delete owner-scoped lists.
//! - Delegate word-level cleanup to `WordService` on delete.
//!
//! # Invariants
//! - Single-list reads and all mutations are restricted to the creator.
//! - `list_all_lists` is intentionally unfiltered.
//! - Deleting a list purges its words from the canonical store; the purge
//!   and the list removal commit together, words first.

use crate::model::validation::normalize_list_name;
use crate::model::vocabulary_list::VocabularyList;
use crate::model::word::Word;
use crate::repo::record_store::{RecordStore, VocabularyStores};
use crate::service::access::load_owned_list;
use crate::service::error::ServiceResult;
use crate::service::word_service::WordService;
use crate::session::{CallScope, IdGenerator, IdentityAndClock};
use log::info;

/// Confirmation returned by `delete_list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedList {
    pub list_id: String,
    /// Canonical words removed together with the list.
    pub purged_words: usize,
}

/// List service over the shared word/list stores.
pub struct ListService<'a, W, L> {
    stores: &'a VocabularyStores<W, L>,
    session: &'a dyn IdentityAndClock,
    ids: &'a dyn IdGenerator,
}

impl<'a, W, L> ListService<'a, W, L>
where
    W: RecordStore<Word>,
    L: RecordStore<VocabularyList>,
{
    pub fn new(
        stores: &'a VocabularyStores<W, L>,
        session: &'a dyn IdentityAndClock,
        ids: &'a dyn IdGenerator,
    ) -> Self {
        Self {
            stores,
            session,
            ids,
        }
    }

    /// Word service sharing this service's stores and capabilities.
    pub fn words(&self) -> WordService<'a, W, L> {
        WordService::new(self.stores, self.session, self.ids)
    }

    /// Creates an empty list owned by the caller.
    pub fn create_list(&self, name: &str) -> ServiceResult<VocabularyList> {
        let scope = CallScope::resolve(self.session);
        let name = normalize_list_name(name)?;

        let list = VocabularyList::new(self.ids.next_id(), name, scope.caller, scope.now);
        self.stores.lists.insert(&list.id, &list)?;

        info!(
            "event=list_create module=list_service status=ok list_id={}",
            list.id
        );
        Ok(list)
    }

    /// Renames a list owned by the caller.
    pub fn update_list(&self, list_id: &str, name: &str) -> ServiceResult<VocabularyList> {
        let scope = CallScope::resolve(self.session);
        let name = normalize_list_name(name)?;
        let mut list = load_owned_list(&self.stores.lists, list_id, &scope)?;

        list.rename(name, scope.now);
        self.stores.lists.insert(&list.id, &list)?;

        info!(
            "event=list_update module=list_service status=ok list_id={}",
            list_id
        );
        Ok(list)
    }

    /// Returns a list owned by the caller.
    pub fn get_list(&self, list_id: &str) -> ServiceResult<VocabularyList> {
        let scope = CallScope::resolve(self.session);
        load_owned_list(&self.stores.lists, list_id, &scope)
    }

    /// Deletes a list owned by the caller together with its words.
    pub fn delete_list(&self, list_id: &str) -> ServiceResult<DeletedList> {
        let scope = CallScope::resolve(self.session);
        let list = load_owned_list(&self.stores.lists, list_id, &scope)?;

        let purged_words = self.stores.atomically(|| -> ServiceResult<usize> {
            let purged = self.words().purge_list_words(&list)?;
            self.stores.lists.remove(list_id)?;
            Ok(purged)
        })?;

        info!(
            "event=list_delete module=list_service status=ok list_id={} purged_words={}",
            list_id, purged_words
        );
        Ok(DeletedList {
            list_id: list_id.to_string(),
            purged_words,
        })
    }

    /// Returns every stored list regardless of owner.
    pub fn list_all_lists(&self) -> ServiceResult<Vec<VocabularyList>> {
        Ok(self.stores.lists.values()?)
    }

    /// Counts the words embedded in a list owned by the caller.
    pub fn count_words(&self, list_id: &str) -> ServiceResult<usize> {
        self.get_list(list_id).map(|list| list.word_count())
    }
}
