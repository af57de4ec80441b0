//! Word use-case service.
//!
//! # Responsibility
//! - Add, update, read and delete words scoped to an owning list.
//! - Keep the canonical word store and the list's embedded copies equal.
//! - Serve the public word listings (initial slice, all, by difficulty).
//!
//! # Invariants
//! - Every word mutation goes through `commit_word`, which writes the
//!   canonical entry and the embedded copy in one atomic store scope.
//! - All validation and ownership checks run before the first write.
//! - List-scoped operations authorize against the list creator;
//!   `change_difficulty` authorizes against the word creator.

use crate::model::vocabulary_list::VocabularyList;
use crate::model::word::{Word, WordPayload};
use crate::repo::record_store::{RecordStore, VocabularyStores};
use crate::service::access::{ensure_owner, load_owned_list};
use crate::service::error::{ServiceError, ServiceResult};
use crate::session::{CallScope, IdGenerator, IdentityAndClock};
use log::{info, warn};

/// Size of the public "initial words" slice.
pub const INITIAL_WORDS_LIMIT: usize = 5;

/// Confirmation returned by `delete_word`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedWord {
    pub list_id: String,
    pub word_id: String,
    /// Whether the list actually embedded the word.
    pub was_embedded: bool,
}

/// Word service over the shared word/list stores.
pub struct WordService<'a, W, L> {
    stores: &'a VocabularyStores<W, L>,
    session: &'a dyn IdentityAndClock,
    ids: &'a dyn IdGenerator,
}

impl<'a, W, L> WordService<'a, W, L>
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

    /// Creates a word inside a list owned by the caller.
    pub fn add_word(&self, list_id: &str, payload: &WordPayload) -> ServiceResult<Word> {
        let scope = CallScope::resolve(self.session);
        let mut list = load_owned_list(&self.stores.lists, list_id, &scope)?;
        let fields = payload.validate()?;

        let word = Word::new(self.ids.next_id(), fields, scope.caller, scope.now);
        self.commit_word(&mut list, &word)?;

        info!(
            "event=word_add module=word_service status=ok list_id={} word_id={} word_count={}",
            list.id,
            word.id,
            list.word_count()
        );
        Ok(word)
    }

    /// Replaces a word's content inside a list owned by the caller.
    ///
    /// `creator` and `created_at` keep their original values.
    pub fn update_word(
        &self,
        list_id: &str,
        word_id: &str,
        payload: &WordPayload,
    ) -> ServiceResult<Word> {
        let scope = CallScope::resolve(self.session);
        let mut list = load_owned_list(&self.stores.lists, list_id, &scope)?;
        let fields = payload.validate()?;

        let mut word = list
            .find_word(word_id)
            .cloned()
            .ok_or_else(|| word_not_in_list(list_id, word_id))?;
        word.apply(fields, scope.now);
        self.commit_word(&mut list, &word)?;

        info!(
            "event=word_update module=word_service status=ok list_id={} word_id={}",
            list_id, word_id
        );
        Ok(word)
    }

    /// Removes a word from a list and from the canonical store.
    ///
    /// The canonical entry is removed even when the list did not embed it.
    pub fn delete_word(&self, list_id: &str, word_id: &str) -> ServiceResult<DeletedWord> {
        let scope = CallScope::resolve(self.session);
        let mut list = load_owned_list(&self.stores.lists, list_id, &scope)?;

        let was_embedded = list.remove_word(word_id);
        if !was_embedded {
            warn!(
                "event=word_delete module=word_service status=not_embedded list_id={} word_id={}",
                list_id, word_id
            );
        }
        self.stores.atomically(|| -> ServiceResult<()> {
            if was_embedded {
                self.stores.lists.insert(&list.id, &list)?;
            }
            self.stores.words.remove(word_id)?;
            Ok(())
        })?;

        info!(
            "event=word_delete module=word_service status=ok list_id={} word_id={} word_count={}",
            list_id,
            word_id,
            list.word_count()
        );
        Ok(DeletedWord {
            list_id: list_id.to_string(),
            word_id: word_id.to_string(),
            was_embedded,
        })
    }

    /// Returns the embedded copy of a word from a list owned by the caller.
    pub fn get_word(&self, list_id: &str, word_id: &str) -> ServiceResult<Word> {
        let scope = CallScope::resolve(self.session);
        let list = load_owned_list(&self.stores.lists, list_id, &scope)?;
        list.find_word(word_id)
            .cloned()
            .ok_or_else(|| word_not_in_list(list_id, word_id))
    }

    /// Sets a word's difficulty; only the word's creator may do so.
    ///
    /// The owning list's embedded copy is updated in the same step.
    pub fn change_difficulty(&self, word_id: &str, difficulty: u32) -> ServiceResult<Word> {
        let scope = CallScope::resolve(self.session);
        let mut word = self
            .stores
            .words
            .get(word_id)?
            .ok_or_else(|| ServiceError::WordNotFound(word_id.to_string()))?;
        ensure_owner::<Word>(&word.creator, &scope, word_id)?;

        word.set_difficulty(difficulty, scope.now);
        match self.find_owning_list(word_id)? {
            Some(mut list) => self.commit_word(&mut list, &word)?,
            None => {
                warn!(
                    "event=word_difficulty module=word_service status=no_owning_list word_id={}",
                    word_id
                );
                self.stores.words.insert(&word.id, &word)?;
            }
        }

        info!(
            "event=word_difficulty module=word_service status=ok word_id={} difficulty={}",
            word_id, difficulty
        );
        Ok(word)
    }

    /// Returns the first `INITIAL_WORDS_LIMIT` words in store order.
    pub fn list_initial_words(&self) -> ServiceResult<Vec<Word>> {
        let mut words = self.stores.words.values()?;
        words.truncate(INITIAL_WORDS_LIMIT);
        Ok(words)
    }

    /// Returns every canonical word regardless of owner.
    pub fn list_all_words(&self) -> ServiceResult<Vec<Word>> {
        Ok(self.stores.words.values()?)
    }

    /// Returns every canonical word with exactly `difficulty`.
    pub fn list_words_by_difficulty(&self, difficulty: u32) -> ServiceResult<Vec<Word>> {
        let words = self.stores.words.values()?;
        Ok(words
            .into_iter()
            .filter(|word| word.difficulty == difficulty)
            .collect())
    }

    /// Drops the canonical entries of every word embedded in `list`.
    ///
    /// Used when the list itself is deleted; returns the number purged.
    pub(crate) fn purge_list_words(&self, list: &VocabularyList) -> ServiceResult<usize> {
        for word in &list.words {
            self.stores.words.remove(&word.id)?;
        }
        Ok(list.word_count())
    }

    fn commit_word(&self, list: &mut VocabularyList, word: &Word) -> ServiceResult<()> {
        list.upsert_word(word.clone());
        self.stores.atomically(|| -> ServiceResult<()> {
            self.stores.words.insert(&word.id, word)?;
            self.stores.lists.insert(&list.id, &*list)?;
            Ok(())
        })
    }

    fn find_owning_list(&self, word_id: &str) -> ServiceResult<Option<VocabularyList>> {
        let lists = self.stores.lists.values()?;
        Ok(lists.into_iter().find(|list| list.contains_word(word_id)))
    }
}

fn word_not_in_list(list_id: &str, word_id: &str) -> ServiceError {
    ServiceError::WordNotInList {
        list_id: list_id.to_string(),
        word_id: word_id.to_string(),
    }
}
