//! Vocabulary list domain model.
//!
//! # Invariants
//! - `words` holds embedded copies; each entry mirrors one canonical word.
//! - Embedded word ids are unique within one list.

use crate::model::identity::{CallerId, EpochMs, RecordId};
use crate::model::word::Word;
use crate::model::Record;
use serde::{Deserialize, Serialize};

/// Named, owner-scoped group of words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyList {
    pub id: RecordId,
    pub name: String,
    /// Denormalized copies in insertion order.
    pub words: Vec<Word>,
    pub creator: CallerId,
    pub created_at: EpochMs,
    pub updated_at: Option<EpochMs>,
}

impl VocabularyList {
    /// Creates an empty list owned by `creator`.
    pub fn new(id: RecordId, name: String, creator: CallerId, now: EpochMs) -> Self {
        Self {
            id,
            name,
            words: Vec::new(),
            creator,
            created_at: now,
            updated_at: None,
        }
    }

    pub fn rename(&mut self, name: String, now: EpochMs) {
        self.name = name;
        self.updated_at = Some(now);
    }

    pub fn find_word(&self, word_id: &str) -> Option<&Word> {
        self.words.iter().find(|word| word.id == word_id)
    }

    pub fn contains_word(&self, word_id: &str) -> bool {
        self.find_word(word_id).is_some()
    }

    /// Replaces the embedded copy with the same id, or appends when absent.
    pub fn upsert_word(&mut self, word: Word) {
        match self.words.iter_mut().find(|entry| entry.id == word.id) {
            Some(entry) => *entry = word,
            None => self.words.push(word),
        }
    }

    /// Removes the embedded copy; returns whether one was present.
    pub fn remove_word(&mut self, word_id: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|word| word.id != word_id);
        self.words.len() != before
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl Record for VocabularyList {
    const KIND: &'static str = "vocabulary_list";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}
