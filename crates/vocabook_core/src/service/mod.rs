//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record-store calls into list/word use-cases.
//! - Enforce ownership and input validation before any write.
//!
//! # Invariants
//! - Services are storage-agnostic; they only see `RecordStore`.
//! - Caller identity and time are resolved once per operation.

mod access;
pub mod error;
pub mod list_service;
pub mod word_service;
