//! Error types for the estimation pipeline.

use std::path::PathBuf;

/// Convenience alias for results within the core crate.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Errors that can occur while configuring or running an analysis.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// Listing file does not exist.
    #[error("listing not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// None of the candidate encodings could decode the listing bytes.
    #[error("could not decode {}: no candidate encoding accepted the file", path.display())]
    Decode {
        /// The path whose contents failed to decode.
        path: PathBuf,
    },

    /// Malformed cost model or technology parameters. Indicates a
    /// configuration bug, so it is checked before any run starts.
    #[error("invalid model: {detail}")]
    InvalidModel {
        /// Description of the validation failure.
        detail: String,
    },

    /// Reference area came out as zero, so no ratio can be formed.
    /// Recoverable: the comparison is omitted and the rest of the
    /// estimate remains valid.
    #[error("reference area is zero, comparison is undefined")]
    ZeroReferenceArea,

    /// I/O error reading a listing or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
