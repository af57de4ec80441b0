//! Identity primitives shared by every record kind.
//!
//! # Invariants
//! - `CallerId` is opaque: core code only compares it for equality.
//! - Timestamps are Unix epoch milliseconds supplied by the session clock.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Record identifier as stored in the word and list maps.
pub type RecordId = String;

/// Unix epoch milliseconds.
pub type EpochMs = i64;

/// Opaque identity of the acting caller.
///
/// Used as the ownership anchor (`creator`) on words and lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for CallerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
