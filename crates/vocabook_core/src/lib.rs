//! Core domain logic for vocabook.
//! Owns the word/list record stores and the ownership-checked use-cases
//! that keep them consistent.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use config::VocabConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::identity::{CallerId, EpochMs, RecordId};
pub use model::validation::ValidationError;
pub use model::vocabulary_list::VocabularyList;
pub use model::word::{Word, WordFields, WordPayload};
pub use model::Record;
pub use repo::memory_store::MemoryRecordStore;
pub use repo::record_store::{RecordStore, RepoError, RepoResult, VocabularyStores};
pub use repo::sqlite_store::{SqliteRecord, SqliteRecordStore};
pub use service::error::{ErrorKind, ServiceError, ServiceResult};
pub use service::list_service::{DeletedList, ListService};
pub use service::word_service::{DeletedWord, WordService, INITIAL_WORDS_LIMIT};
pub use session::{
    CallScope, IdGenerator, IdentityAndClock, ManualSession, SequentialIdGenerator,
    SystemSession, UuidIdGenerator,
};

/// In-memory word and list stores.
pub type MemoryStores =
    VocabularyStores<MemoryRecordStore<Word>, MemoryRecordStore<VocabularyList>>;

/// SQLite word and list stores sharing one connection.
pub type SqliteStores<'conn> =
    VocabularyStores<SqliteRecordStore<'conn, Word>, SqliteRecordStore<'conn, VocabularyList>>;

/// Creates empty in-memory stores.
pub fn memory_stores() -> MemoryStores {
    VocabularyStores::new(MemoryRecordStore::new(), MemoryRecordStore::new())
}

/// Creates stores over a migrated SQLite connection.
pub fn sqlite_stores(conn: &rusqlite::Connection) -> RepoResult<SqliteStores<'_>> {
    Ok(VocabularyStores::new(
        SqliteRecordStore::try_new(conn)?,
        SqliteRecordStore::try_new(conn)?,
    ))
}

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
