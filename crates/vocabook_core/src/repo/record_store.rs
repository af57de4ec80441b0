//! Record store contract shared by every storage engine.
//!
//! # Responsibility
//! - Define the ordered key/value contract the services persist through.
//! - Provide the repository error type used by all engines.
//!
//! # Invariants
//! - `insert` is an upsert; callers never observe the difference.
//! - `remove` of an absent key is a no-op, not an error.
//! - `values` yields records in ascending key order.
//! - Absence is `Ok(None)`; errors are reserved for engine failures.
//! - Writes made inside `VocabularyStores::atomically` land in both maps or
//!   in neither.

use crate::db::DbError;
use crate::model::vocabulary_list::VocabularyList;
use crate::model::word::Word;
use crate::model::Record;
use std::error::Error;
use log::error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage engine error.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Persisted payload cannot be decoded into a valid record.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "record store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "record store requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "record store requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Ordered map from record id to record value.
pub trait RecordStore<V: Record> {
    /// Loads one record by key.
    fn get(&self, key: &str) -> RepoResult<Option<V>>;
    /// Inserts or overwrites the record stored under `key`.
    fn insert(&self, key: &str, value: &V) -> RepoResult<()>;
    /// Removes the record under `key`, if any.
    fn remove(&self, key: &str) -> RepoResult<()>;
    /// Returns all records in ascending key order.
    fn values(&self) -> RepoResult<Vec<V>>;

    /// Opens a write scope. Engines that cannot fail mid-write keep the default no-op.
    fn begin_scope(&self) -> RepoResult<()> {
        Ok(())
    }
    /// Keeps every write made since the matching `begin_scope`.
    fn commit_scope(&self) -> RepoResult<()> {
        Ok(())
    }
    /// Discards every write made since the matching `begin_scope`.
    fn rollback_scope(&self) -> RepoResult<()> {
        Ok(())
    }
}

impl<V: Record, S: RecordStore<V> + ?Sized> RecordStore<V> for &S {
    fn get(&self, key: &str) -> RepoResult<Option<V>> {
        (**self).get(key)
    }

    fn insert(&self, key: &str, value: &V) -> RepoResult<()> {
        (**self).insert(key, value)
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        (**self).remove(key)
    }

    fn values(&self) -> RepoResult<Vec<V>> {
        (**self).values()
    }

    fn begin_scope(&self) -> RepoResult<()> {
        (**self).begin_scope()
    }

    fn commit_scope(&self) -> RepoResult<()> {
        (**self).commit_scope()
    }

    fn rollback_scope(&self) -> RepoResult<()> {
        (**self).rollback_scope()
    }
}

/// The two maps the services keep consistent: canonical words and lists.
pub struct VocabularyStores<W, L> {
    pub words: W,
    pub lists: L,
}

impl<W, L> VocabularyStores<W, L>
where
    W: RecordStore<Word>,
    L: RecordStore<VocabularyList>,
{
    pub fn new(words: W, lists: L) -> Self {
        Self { words, lists }
    }

    /// Runs `op` so that its writes to both maps commit together or not at all.
    ///
    /// Any error from `op` or from committing rolls both scopes back and is
    /// returned unchanged.
    pub fn atomically<T, E>(&self, op: impl FnOnce() -> Result<T, E>) -> Result<T, E>
    where
        E: From<RepoError>,
    {
        self.words.begin_scope()?;
        if let Err(err) = self.lists.begin_scope() {
            self.rollback_words();
            return Err(err.into());
        }

        let outcome = op();
        if outcome.is_err() {
            self.rollback_lists();
            self.rollback_words();
            return outcome;
        }

        if let Err(err) = self.lists.commit_scope() {
            self.rollback_lists();
            self.rollback_words();
            return Err(err.into());
        }
        if let Err(err) = self.words.commit_scope() {
            self.rollback_words();
            return Err(err.into());
        }
        outcome
    }

    fn rollback_words(&self) {
        if let Err(err) = self.words.rollback_scope() {
            error!("event=store_rollback module=repo status=error store=words error={err}");
        }
    }

    fn rollback_lists(&self) {
        if let Err(err) = self.lists.rollback_scope() {
            error!("event=store_rollback module=repo status=error store=lists error={err}");
        }
    }
}
