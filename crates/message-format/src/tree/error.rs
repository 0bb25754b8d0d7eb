//! Error types for decoding parser output.

use thiserror::Error;

/// The parser's wire output could not be turned into nodes.
///
/// A conforming parser never produces these; they indicate a version or
/// integration mismatch.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The input is not valid JSON or not an array of elements.
    #[error("invalid message tree: {0}")]
    Json(#[from] serde_json::Error),

    /// An argument element names a type this interpreter does not know.
    #[error("unknown argument type '{kind}' for '{id}'")]
    UnknownType { id: String, kind: String },

    /// An element has the wrong shape for its type.
    #[error("malformed {kind} element '{id}': {message}")]
    Malformed {
        id: String,
        kind: String,
        message: String,
    },
}
