//! Record store abstractions and storage engines.
//!
//! # Responsibility
//! - Define the ordered key/value contract the services depend on.
//! - Provide in-memory and SQLite engines behind that contract.
//!
//! # Invariants
//! - Engines never interpret record contents beyond (de)serialization.
//! - Engines are interchangeable: services observe identical behavior.

pub mod memory_store;
pub mod record_store;
pub mod sqlite_store;
