//! Driver-level error types
//!
//! The resolution engine itself has exactly one failure mode -- an unresolved
//! key -- which is represented as `Option::None`, never as an error. These
//! variants cover the thin I/O layer around it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error in {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialize error: {0}")]
    SerializeError(String),

    #[error("Source catalog for locale '{0}' not found")]
    MissingCatalog(String),

    #[error("Persist error for {}: {reason}", path.display())]
    PersistError { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, SyncError>;
