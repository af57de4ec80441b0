//! Input validation and text normalization for record payloads.
//!
//! # Invariants
//! - Normalized text has no leading/trailing whitespace and no internal
//!   whitespace runs longer than one space.
//! - Validation never touches storage.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Payload validation failures, surfaced to callers as invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// List name is blank after normalization.
    EmptyListName,
    /// Word text is blank after normalization.
    EmptyWordText,
    /// Difficulty is negative or does not fit the stored range.
    DifficultyOutOfRange(i64),
    /// Payload could not be decoded into the expected shape.
    MalformedPayload(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyListName => write!(f, "list name must not be blank"),
            Self::EmptyWordText => write!(f, "word text must not be blank"),
            Self::DifficultyOutOfRange(value) => {
                write!(f, "difficulty must be a non-negative integer, got {value}")
            }
            Self::MalformedPayload(details) => write!(f, "malformed payload: {details}"),
        }
    }
}

impl Error for ValidationError {}

/// Trims and collapses whitespace runs to a single space.
pub fn normalize_text(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}

/// Normalizes a list name, rejecting blank values.
pub fn normalize_list_name(value: &str) -> Result<String, ValidationError> {
    let normalized = normalize_text(value);
    if normalized.is_empty() {
        return Err(ValidationError::EmptyListName);
    }
    Ok(normalized)
}
