//! Domain model for vocabulary words and the lists that group them.
//!
//! # Responsibility
//! - Define canonical record shapes persisted by the record stores.
//! - Keep payload validation and normalization out of the service layer.
//!
//! # Invariants
//! - Every record is addressed by its own string `id`.
//! - `creator` is the single ownership anchor on every record.

pub mod identity;
pub mod validation;
pub mod vocabulary_list;
pub mod word;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Record kind that can live in a `RecordStore`.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Stable kind label used in diagnostics.
    const KIND: &'static str;

    /// Key under which the record is stored.
    fn record_id(&self) -> &str;
}
