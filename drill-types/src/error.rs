//! Error types for drill.

use thiserror::Error;

/// Errors that can occur in drill operations.
#[derive(Debug, Error)]
pub enum DrillError {
    /// Topic id not in the curriculum
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    /// URL could not be parsed
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// HTTP method name not recognised
    #[error("invalid http method: {0}")]
    InvalidMethod(String),
}
