use thiserror::Error;

/// Errors that can occur during invoice construction or rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BijakError {
    /// Malformed or missing input — a programming/configuration error, not a
    /// recoverable runtime condition. Raised before any computation proceeds.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Document rendering or export failure. Surfaced verbatim; not retried.
    #[error("render error: {0}")]
    Render(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "buyer.state_code").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
