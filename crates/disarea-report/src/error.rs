//! Errors from the reporting layer.

use thiserror::Error;

/// Convenience alias for results within the report crate.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while rendering reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown output format: '{name}'. Available formats: text, json")]
    UnknownFormat { name: String },

    #[error("baseline variant '{name}' is not among the successful results")]
    UnknownBaseline { name: String },

    #[error("no variant in the batch produced a result to summarize")]
    EmptyBatch,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
