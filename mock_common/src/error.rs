//! Error types shared by the generator library and the demo client.
//!
//! Generation itself cannot fail. `MockDataError` covers the ambient failure
//! cases around it: I/O on the client side, JSON encoding of records, parsing
//! a domain name, and background generator tasks that died before reporting.
use std::io;

use thiserror::Error;

/// Unified error type shared across the workspace.
#[derive(Error, Debug)]
pub enum MockDataError {
    /// I/O error originating from the standard library (stdout, signals).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A domain name that does not match any of the generated record kinds.
    #[error("Unknown data domain: {0}")]
    UnknownDomain(String),

    /// A spawned generator task panicked or was aborted before sending its result.
    #[error("Generator task failed: {0}")]
    TaskFailed(String),
}
