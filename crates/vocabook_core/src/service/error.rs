//! Service error taxonomy.
//!
//! # Invariants
//! - Every variant maps to exactly one `ErrorKind`.
//! - Messages name the entity kind and identifier involved.

use crate::model::validation::ValidationError;
use crate::model::vocabulary_list::VocabularyList;
use crate::model::Record;
use crate::repo::record_store::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Coarse error class exposed to transport bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Unauthorized,
    Storage,
}

/// Errors from word and list use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Payload or name failed validation.
    InvalidInput(ValidationError),
    /// No list stored under the id.
    ListNotFound(String),
    /// No canonical word stored under the id.
    WordNotFound(String),
    /// List exists but does not embed the word.
    WordNotInList { list_id: String, word_id: String },
    /// Acting caller is not the record's creator.
    Unauthorized { entity: &'static str, id: String },
    /// Storage engine failure.
    Repo(RepoError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::ListNotFound(_) | Self::WordNotFound(_) | Self::WordNotInList { .. } => {
                ErrorKind::NotFound
            }
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Repo(_) => ErrorKind::Storage,
        }
    }

    pub(crate) fn list_not_found(list_id: &str) -> Self {
        Self::ListNotFound(list_id.to_string())
    }

    pub(crate) fn unauthorized<V: Record>(id: &str) -> Self {
        Self::Unauthorized {
            entity: V::KIND,
            id: id.to_string(),
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid input: {err}"),
            Self::ListNotFound(id) => write!(f, "{} not found: {id}", VocabularyList::KIND),
            Self::WordNotFound(id) => write!(f, "word not found: {id}"),
            Self::WordNotInList { list_id, word_id } => {
                write!(f, "word {word_id} not found in list {list_id}")
            }
            Self::Unauthorized { entity, id } => {
                write!(f, "caller is not the creator of {entity} {id}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidInput(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
