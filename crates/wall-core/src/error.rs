//! Error type for record storage.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::RecordKind;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No record of this kind has the given id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    /// Create was called with a blank name or target.
    #[error("{kind} requires a non-empty name and target")]
    MissingFields { kind: RecordKind },

    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record data in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
