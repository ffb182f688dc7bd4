//! Tree loading and lookup errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("node not found: {0}")]
    NotFound(String),

    #[error("duplicate node id '{0}'")]
    DuplicateId(String),

    #[error("empty node id under '{parent}'")]
    EmptyId { parent: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
