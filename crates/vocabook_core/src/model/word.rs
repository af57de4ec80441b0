//! Word domain model.
//!
//! # Responsibility
//! - Define the canonical Word record and its caller-supplied payload.
//! - Keep field-level mutation rules next to the data they protect.
//!
//! # Invariants
//! - `id`, `creator` and `created_at` are set once at creation.
//! - `updated_at` is `None` until the first mutation, then always `Some`.
//! - `word` is never blank after validation.

use crate::model::identity::{CallerId, EpochMs, RecordId};
use crate::model::validation::ValidationError;
use crate::model::Record;
use serde::{Deserialize, Serialize};

/// Canonical vocabulary word.
///
/// The same shape is embedded inside its owning `VocabularyList`; the copy in
/// the word store is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: RecordId,
    pub word: String,
    pub meaning: String,
    pub difficulty: u32,
    /// Ownership anchor for `change_difficulty`.
    pub creator: CallerId,
    pub created_at: EpochMs,
    pub updated_at: Option<EpochMs>,
}

impl Word {
    /// Creates a fresh word from validated fields.
    pub fn new(id: RecordId, fields: WordFields, creator: CallerId, now: EpochMs) -> Self {
        Self {
            id,
            word: fields.word,
            meaning: fields.meaning,
            difficulty: fields.difficulty,
            creator,
            created_at: now,
            updated_at: None,
        }
    }

    /// Replaces mutable content fields, keeping identity and provenance.
    pub fn apply(&mut self, fields: WordFields, now: EpochMs) {
        self.word = fields.word;
        self.meaning = fields.meaning;
        self.difficulty = fields.difficulty;
        self.updated_at = Some(now);
    }

    pub fn set_difficulty(&mut self, difficulty: u32, now: EpochMs) {
        self.difficulty = difficulty;
        self.updated_at = Some(now);
    }
}

impl Record for Word {
    const KIND: &'static str = "word";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Raw add/update payload as received from a caller.
///
/// `difficulty` is signed so that negative input is reported as invalid
/// instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordPayload {
    pub word: String,
    pub meaning: String,
    pub difficulty: i64,
}

/// Validated word content ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFields {
    pub word: String,
    pub meaning: String,
    pub difficulty: u32,
}

impl WordPayload {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>, difficulty: i64) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            difficulty,
        }
    }

    /// Decodes a JSON payload, mapping shape errors to `MalformedPayload`.
    pub fn from_json(raw: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(raw).map_err(|err| ValidationError::MalformedPayload(err.to_string()))
    }

    /// Trims text fields and checks the difficulty range.
    ///
    /// Inner whitespace is kept as written. `meaning` may be empty; `word` may not.
    pub fn validate(&self) -> Result<WordFields, ValidationError> {
        let word = self.word.trim().to_string();
        if word.is_empty() {
            return Err(ValidationError::EmptyWordText);
        }
        let difficulty = validate_difficulty(self.difficulty)?;
        Ok(WordFields {
            word,
            meaning: self.meaning.trim().to_string(),
            difficulty,
        })
    }
}

/// Converts caller difficulty input into the stored unsigned form.
pub fn validate_difficulty(value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::DifficultyOutOfRange(value))
}
