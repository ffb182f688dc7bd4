//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to persist {path}: {reason}")]
    Persist { path: PathBuf, reason: String },

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("quota exceeded writing '{key}': {needed} bytes needed, {limit} allowed")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
