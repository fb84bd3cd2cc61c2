//! Store error model.
//!
//! Every failure degrades to "return the error and continue": no operation
//! panics, and the in-memory collection is either untouched (validation,
//! import) or remains authoritative until the next successful save
//! (persistence).

use std::path::PathBuf;

use thiserror::Error;

use jobtrackr_core::ValidationErrors;

/// Error surfaced by a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required-field validation failed; nothing was mutated.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Import payload rejected; the existing collection is untouched.
    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    /// The persistence slot failed; the in-memory collection stays
    /// authoritative until the next successful save.
    #[error("persistence failed: {0}")]
    Persistence(#[from] SlotError),
}

impl StoreError {
    /// The per-field messages, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            StoreError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Malformed import payload.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("payload is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("payload must be a JSON array of job records")]
    NotAnArray,

    #[error("record at index {index} is malformed: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Persistence-slot failure.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot io failure at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("slot serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("slot unavailable: {0}")]
    Unavailable(String),
}

impl SlotError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
