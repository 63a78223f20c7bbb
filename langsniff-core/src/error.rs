//! Error types for langsniff
//!
//! Detection itself never fails: empty or unusable input resolves to the
//! `und` sentinel. Errors only surface at the edges, when model data or
//! configuration is loaded and when callers register new models.

use thiserror::Error;

/// Error type for langsniff operations
#[derive(Debug, Error)]
pub enum LangsniffError {
    /// A raw rank string could not be turned into a model
    #[error("Malformed model {script}/{code}: {reason}")]
    MalformedModel {
        /// Script identifier the model was registered under
        script: String,
        /// Language code of the model
        code: String,
        /// What is wrong with the rank string
        reason: String,
    },

    /// Embedded or user supplied model data could not be parsed
    #[error("Model data error: {0}")]
    ModelData(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Script identifier unknown to the classifier
    #[error("Unknown script: {0}")]
    UnknownScript(String),

    /// Worker pool for batch detection could not be created
    #[error("Parallel processing error: {0}")]
    Parallel(String),

    /// Infrastructure error (I/O, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for langsniff operations
pub type Result<T> = std::result::Result<T, LangsniffError>;
