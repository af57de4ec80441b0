//! SQLite-backed record store.
//!
//! # Responsibility
//! - Persist one record kind per table as JSON payload keyed by record id.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Construction requires a fully migrated connection.
//! - Read paths reject undecodable payloads instead of masking them.
//! - Listing order is `id ASC`, matching the in-memory engine.
//! - Write scopes are named savepoints (`{table}_write`), so scopes opened by
//!   two stores on one connection nest and roll back together.

use crate::db::migrations::latest_version;
use crate::model::vocabulary_list::VocabularyList;
use crate::model::word::Word;
use crate::model::Record;
use crate::repo::record_store::{RecordStore, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::marker::PhantomData;

const REQUIRED_COLUMNS: [&str; 3] = ["id", "payload", "stored_at"];

/// Record kind with a dedicated SQLite table.
pub trait SqliteRecord: Record {
    const TABLE: &'static str;
}

impl SqliteRecord for Word {
    const TABLE: &'static str = "words";
}

impl SqliteRecord for VocabularyList {
    const TABLE: &'static str = "vocabulary_lists";
}

/// Record store over one table of a migrated connection.
pub struct SqliteRecordStore<'conn, V> {
    conn: &'conn Connection,
    _record: PhantomData<fn() -> V>,
}

impl<'conn, V: SqliteRecord> SqliteRecordStore<'conn, V> {
    /// Creates a store after checking schema version and table shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_store_ready(conn, V::TABLE)?;
        Ok(Self {
            conn,
            _record: PhantomData,
        })
    }
}

impl<V: SqliteRecord> RecordStore<V> for SqliteRecordStore<'_, V> {
    fn get(&self, key: &str) -> RepoResult<Option<V>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                &format!("SELECT payload FROM {} WHERE id = ?1;", V::TABLE),
                [key],
                |row| row.get(0),
            )
            .optional()?;

        payload
            .map(|raw| decode_payload::<V>(key, &raw))
            .transpose()
    }

    fn insert(&self, key: &str, value: &V) -> RepoResult<()> {
        let payload = serde_json::to_string(value).map_err(|err| {
            RepoError::InvalidData(format!("cannot encode {} `{key}`: {err}", V::KIND))
        })?;

        self.conn.execute(
            &format!(
                "INSERT INTO {} (id, payload) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET
                    payload = excluded.payload,
                    stored_at = (strftime('%s', 'now') * 1000);",
                V::TABLE
            ),
            params![key, payload],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute(&format!("DELETE FROM {} WHERE id = ?1;", V::TABLE), [key])?;
        Ok(())
    }

    fn values(&self) -> RepoResult<Vec<V>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT id, payload FROM {} ORDER BY id ASC;", V::TABLE))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            let payload: String = row.get(1)?;
            records.push(decode_payload::<V>(&id, &payload)?);
        }

        Ok(records)
    }

    fn begin_scope(&self) -> RepoResult<()> {
        self.conn
            .execute_batch(&format!("SAVEPOINT {};", savepoint_name::<V>()))?;
        Ok(())
    }

    fn commit_scope(&self) -> RepoResult<()> {
        self.conn
            .execute_batch(&format!("RELEASE SAVEPOINT {};", savepoint_name::<V>()))?;
        Ok(())
    }

    fn rollback_scope(&self) -> RepoResult<()> {
        let name = savepoint_name::<V>();
        self.conn.execute_batch(&format!(
            "ROLLBACK TO SAVEPOINT {name}; RELEASE SAVEPOINT {name};"
        ))?;
        Ok(())
    }
}

fn savepoint_name<V: SqliteRecord>() -> String {
    format!("{}_write", V::TABLE)
}

fn decode_payload<V: SqliteRecord>(key: &str, raw: &str) -> RepoResult<V> {
    serde_json::from_str(raw).map_err(|err| {
        RepoError::InvalidData(format!(
            "invalid {} payload for `{key}` in {}.payload: {err}",
            V::KIND,
            V::TABLE
        ))
    })
}

fn ensure_store_ready(conn: &Connection, table: &'static str) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for column in REQUIRED_COLUMNS {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
