//! Errors surfaced to the host when a node invocation fails.
//!
//! The host shows a single "invalid operation" message to the user, so every
//! variant renders as one human-readable line.

use thiserror::Error;

use crate::node::ValueType;

/// Node invocation errors
#[derive(Error, Debug)]
pub enum NodeError {
    #[error("invalid JSON string")]
    InvalidJson(#[source] serde_json::Error),

    #[error("error fetching JSON from URL: {0}")]
    Fetch(String),

    #[error("error downloading image: {0}")]
    Download(String),

    #[error("invalid path or key not found")]
    InvalidPath,

    #[error("no image URL provided")]
    EmptyImageUrl,

    #[error("cannot derive a filename from '{0}'")]
    NoFilename(String),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("missing required input: {0}")]
    MissingInput(String),

    #[error("input '{name}' expects {expected}, got {actual}")]
    InputType {
        name: String,
        expected: ValueType,
        actual: ValueType,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("host error: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, NodeError>;
