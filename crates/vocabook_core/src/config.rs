//! Runtime configuration resolved from environment variables.
//!
//! # Invariants
//! - Blank values are treated as unset and fall back to defaults.
//! - Resolution never fails; validation happens where values are used
//!   (`init_logging`, `open_db`).

use crate::logging::default_log_level;
use crate::model::identity::CallerId;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "VOCABOOK_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "VOCABOOK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "VOCABOOK_LOG_DIR";
pub const ENV_CALLER: &str = "VOCABOOK_CALLER";

const DEFAULT_DB_FILE_NAME: &str = "vocabook.sqlite3";
const DEFAULT_CALLER: &str = "local";

/// Effective process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabConfig {
    /// SQLite database file backing both record stores.
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    /// Identity used by local single-user entry points.
    pub caller: CallerId,
}

impl VocabConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_level: read(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
            caller: CallerId::new(read(ENV_CALLER).unwrap_or_else(|| DEFAULT_CALLER.to_string())),
        }
    }
}
