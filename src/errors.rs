//! Error types for ecomap-core.

use thiserror::Error;

/// Top-level error type for ecomap operations.
///
/// The transformation layer itself is total over well-typed input; errors
/// only arise on the load path, and a load failure is fatal — the store never
/// yields a partial or defaulted collection.
#[derive(Debug, Error)]
pub enum EcomapError {
    /// Structurally invalid dataset (missing partition, wrong category,
    /// duplicate id, malformed record).
    #[error("dataset error: {0}")]
    Dataset(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for ecomap operations.
pub type Result<T> = std::result::Result<T, EcomapError>;
